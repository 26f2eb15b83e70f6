//! Locates the per-restaurant blocks inside the results page.

use std::sync::LazyLock;

use regex::Regex;

use crate::dom::{descendants, ElementLike};

static LISTING_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^PR[0-9]+~").expect("valid regex"));

/// `true` when `node` is a `div` whose `id` starts with `PR<digits>~`.
pub fn is_listing_root<E: ElementLike>(node: &E) -> bool {
    node.tag_name() == "div" && node.attr("id").is_some_and(|id| LISTING_ID_RE.is_match(id))
}

/// Every listing root below `root`, in document order.
///
/// Page order matters downstream: the pipeline truncates to the first N
/// listings before sorting.
pub fn find_listings<E: ElementLike>(root: &E) -> Vec<E> {
    let listings: Vec<E> = descendants(root)
        .into_iter()
        .filter(is_listing_root)
        .collect();
    tracing::debug!(listings = listings.len(), "located restaurant listings");
    listings
}

#[cfg(test)]
mod tests {
    use scraper::Html;

    use super::*;
    use crate::dom::test_node::TestNode;

    #[test]
    fn matches_listing_ids() {
        assert!(is_listing_root(&&TestNode::new("div").with_id("PR0084952~")));
        assert!(is_listing_root(&&TestNode::new("div").with_id("PR1~extra")));
    }

    #[test]
    fn rejects_non_matching_ids() {
        for id in ["PR~", "pr123~", "PR123", "xPR123~", "PRA12~", ""] {
            assert!(
                !is_listing_root(&&TestNode::new("div").with_id(id)),
                "id {id:?} should not match"
            );
        }
        assert!(!is_listing_root(&&TestNode::new("div")));
    }

    #[test]
    fn rejects_non_div_elements() {
        assert!(!is_listing_root(&&TestNode::new("span").with_id("PR123~")));
        assert!(!is_listing_root(&&TestNode::new("tr").with_id("PR123~")));
    }

    #[test]
    fn finds_listings_in_document_order() {
        let doc = Html::parse_document(
            r#"<html><body>
                <div id="header"></div>
                <div id="PR002~"><div id="PR003~"></div></div>
                <span id="PR004~"></span>
                <div id="PR001~"></div>
            </body></html>"#,
        );
        let ids: Vec<&str> = find_listings(&doc.root_element())
            .into_iter()
            .filter_map(|el| el.value().attr("id"))
            .collect();
        assert_eq!(ids, ["PR002~", "PR003~", "PR001~"]);
    }

    #[test]
    fn finds_nothing_in_page_without_listings() {
        let doc = Html::parse_document("<html><body><p>No results</p></body></html>");
        assert!(find_listings(&doc.root_element()).is_empty());
    }
}
