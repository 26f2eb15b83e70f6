//! The minimal element capability the extraction heuristics need.
//!
//! Row classification and cell cleaning only look at a node's tag name, its
//! direct child elements, and its direct text. [`ElementLike`] captures that
//! so the heuristics are free functions, independent of the tree library.

use scraper::{ElementRef, Node};

pub trait ElementLike: Sized {
    /// Lower-case local tag name, e.g. `"tr"`.
    fn tag_name(&self) -> &str;

    fn attr(&self, name: &str) -> Option<&str>;

    /// Direct child elements in document order. Text and comment nodes are
    /// not included.
    fn child_elements(&self) -> Vec<Self>;

    /// Text of the element when it is the element's sole content.
    ///
    /// An element whose only child is a text node yields that text. An element
    /// whose only child is another element yields that child's direct text.
    /// Anything else (no children, several children, a lone comment) has no
    /// direct text.
    fn direct_text(&self) -> Option<String>;
}

impl ElementLike for ElementRef<'_> {
    fn tag_name(&self) -> &str {
        self.value().name()
    }

    fn attr(&self, name: &str) -> Option<&str> {
        self.value().attr(name)
    }

    fn child_elements(&self) -> Vec<Self> {
        self.children().filter_map(ElementRef::wrap).collect()
    }

    fn direct_text(&self) -> Option<String> {
        let mut node = *self;
        loop {
            let mut children = node.children();
            let only = children.next()?;
            if children.next().is_some() {
                return None;
            }
            match only.value() {
                Node::Text(text) => return Some(String::from(&**text)),
                Node::Element(_) => node = ElementRef::wrap(only)?,
                _ => return None,
            }
        }
    }
}

/// All elements below `root` in document (pre-)order, excluding `root` itself.
///
/// Walks with an explicit stack; page nesting depth is unbounded.
pub fn descendants<E: ElementLike>(root: &E) -> Vec<E> {
    let mut out = Vec::new();
    let mut stack: Vec<E> = root.child_elements().into_iter().rev().collect();
    while let Some(node) = stack.pop() {
        stack.extend(node.child_elements().into_iter().rev());
        out.push(node);
    }
    out
}

/// First element below `root` (document order) with the given tag.
pub fn find_first<E: ElementLike>(root: &E, tag: &str) -> Option<E> {
    let mut stack: Vec<E> = root.child_elements().into_iter().rev().collect();
    while let Some(node) = stack.pop() {
        if node.tag_name() == tag {
            return Some(node);
        }
        stack.extend(node.child_elements().into_iter().rev());
    }
    None
}
