mod map;

use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::Parser;
use healthinspect_core::SortKey;
use healthinspect_scraper::ResultOptions;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "healthinspect")]
#[command(about = "Map King County restaurant inspection scores")]
struct Cli {
    /// Field to sort by: "Average Score", "High Score" or "Total Inspections".
    #[arg(short, long, default_value = "High Score")]
    sort: String,

    /// Number of listings to include.
    #[arg(short, long, default_value_t = 5)]
    count: usize,

    /// Sort descending.
    #[arg(short, long)]
    reverse: bool,

    /// Read the stored results page instead of querying the live site.
    #[arg(long)]
    test: bool,

    #[arg(long, default_value = "98109")]
    zip_code: String,

    /// Inspection window start (M/D/YYYY).
    #[arg(long, default_value = "2/1/2017")]
    start: String,

    /// Inspection window end (M/D/YYYY).
    #[arg(long, default_value = "6/1/2017")]
    end: String,

    /// Where to write the `GeoJSON` map. Defaults to `HEALTHINSPECT_OUTPUT_PATH`.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl Cli {
    /// Search form overrides for the inspection query.
    fn query_overrides(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            ("Zip_Code".to_owned(), self.zip_code.clone()),
            ("Inspection_Start".to_owned(), self.start.clone()),
            ("Inspection_End".to_owned(), self.end.clone()),
        ])
    }

    fn result_options(&self) -> ResultOptions {
        let sort = SortKey::from_label(&self.sort);
        if sort.is_none() {
            tracing::warn!(sort = %self.sort, "unknown sort field, keeping page order");
        }
        ResultOptions {
            sort,
            count: self.count,
            reverse: self.reverse,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = healthinspect_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    tracing::debug!(?config, "loaded configuration");

    let options = cli.result_options();
    let output = cli.output.clone().unwrap_or_else(|| config.output_path.clone());
    map::run_map(&config, &cli.query_overrides(), &options, cli.test, &output).await
}
