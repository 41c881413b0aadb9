use std::future::Future;
use std::path::PathBuf;

use anyhow::Context;
use chrono::Local;
use clap::Parser;
use dotenv::dotenv;
use tikscout_finder::{
    CreatorSource, Criteria, FailurePolicy, FinderConfig, FinderError, FinderReport,
    InfluencerFinder, Pacer, RandomDelay,
};
use tikscout_tiktok::TikTokClient;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod progress;
mod report;

use progress::TerminalProgress;
use report::{SummaryHeader, criteria_line};

const TABLE_ROWS: usize = 10;

#[derive(Parser, Debug)]
#[command(author, version, about = "Find TikTok influencers based on criteria", long_about = None)]
struct Args {
    /// Keywords to search for influencers
    #[arg(long, num_args = 1.., default_values = ["AI", "tech", "business"])]
    keywords: Vec<String>,

    /// Maximum follower count
    #[arg(long, alias = "max_followers", default_value = "550000")]
    max_followers: u64,

    /// Minimum average views per video
    #[arg(long, alias = "min_avg_views", default_value = "40000")]
    min_avg_views: u64,

    /// Output CSV file name; a .txt summary is written alongside
    #[arg(long, default_value = "tiktok_influencers.csv")]
    output: PathBuf,

    /// TikTok msToken for API access (optional)
    #[arg(long, alias = "ms_token", env = "TIKTOK_MS_TOKEN", hide_env_values = true)]
    ms_token: Option<String>,

    /// Maximum number of results to process per keyword
    #[arg(long, alias = "results_per_keyword", default_value = "50")]
    results_per_keyword: usize,

    /// Shortest pause between API calls, in seconds
    #[arg(long, default_value = "1.0")]
    min_delay: f64,

    /// Longest pause between API calls, in seconds
    #[arg(long, default_value = "2.0")]
    max_delay: f64,

    /// Abort on the first failed API call instead of treating it as empty
    #[arg(long)]
    strict: bool,
}

impl Args {
    fn criteria(&self) -> Criteria {
        Criteria::builder()
            .max_followers(self.max_followers)
            .min_avg_views(self.min_avg_views as f64)
            .build()
    }

    fn finder_config(&self) -> FinderConfig {
        FinderConfig::builder()
            .criteria(self.criteria())
            .results_per_keyword(self.results_per_keyword)
            .failure_policy(if self.strict {
                FailurePolicy::Strict
            } else {
                FailurePolicy::Degrade
            })
            .build()
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("scout=info,tikscout_finder=info,tikscout_tiktok=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Runs the finder until it completes or `shutdown` resolves, whichever is first.
/// Returns `None` when interrupted.
async fn run_until<S, P, K, F>(
    finder: &InfluencerFinder<S, P>,
    keywords: &[K],
    shutdown: F,
) -> Result<Option<FinderReport>, FinderError>
where
    S: CreatorSource,
    P: Pacer,
    K: AsRef<str>,
    F: Future<Output = ()>,
{
    tokio::select! {
        report = finder.find(keywords) => report.map(Some),
        () = shutdown => Ok(None),
    }
}

/// Resolves on Ctrl-C. If the handler cannot be installed the run carries on
/// uninterruptible instead of stopping.
async fn interrupted<F>(signal: F)
where
    F: Future<Output = std::io::Result<()>>,
{
    if let Err(e) = signal.await {
        warn!(error = %e, "could not listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}

async fn search(args: &Args) -> anyhow::Result<Option<FinderReport>> {
    let client = TikTokClient::new(args.ms_token.as_deref())
        .context("Failed to build TikTok client")?;
    let pacer = RandomDelay::new(args.min_delay, args.max_delay)?;
    let finder = InfluencerFinder::new(client, pacer, args.finder_config())
        .with_progress(TerminalProgress::default());

    let outcome = run_until(
        &finder,
        args.keywords.as_slice(),
        interrupted(tokio::signal::ctrl_c()),
    )
    .await?;

    Ok(outcome)
}

fn write_reports(args: &Args, found: &FinderReport) -> anyhow::Result<()> {
    let ranked = report::rank(found.influencers.clone());
    let criteria = args.criteria();

    report::write_csv(&args.output, &ranked)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    println!(
        "\nFound {} matching influencers. Results saved to {}",
        ranked.len(),
        args.output.display()
    );

    let summary_path = report::summary_path(&args.output);
    let header = SummaryHeader {
        generated_at: Local::now(),
        keywords: &args.keywords,
        criteria: &criteria,
    };
    report::write_summary(&summary_path, &header, &found.influencers)
        .with_context(|| format!("Failed to write {}", summary_path.display()))?;
    println!(
        "A detailed summary is also available at {}",
        summary_path.display()
    );

    report::print_table(&ranked, TABLE_ROWS);

    Ok(())
}

fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing();

    let args = Args::parse();

    println!("\nTikTok Influencer Finder");
    println!("=======================");
    println!(
        "Searching for influencers in these niches: {}",
        args.keywords.join(", ")
    );
    println!("Criteria: {}", criteria_line(&args.criteria()));
    println!("=======================\n");

    let rt = tokio::runtime::Runtime::new().context("Failed to start tokio runtime")?;

    let outcome = rt.block_on(search(&args));
    report_outcome(&args, outcome);

    Ok(())
}

fn report_outcome(args: &Args, outcome: anyhow::Result<Option<FinderReport>>) {
    let found = match outcome {
        Ok(Some(found)) => found,
        Ok(None) => {
            println!("\nSearch interrupted by user.");
            return;
        }
        Err(e) => {
            eprintln!("\nAn error occurred: {e:#}");
            return;
        }
    };

    let stats = &found.stats;
    info!(
        search_calls = stats.search_calls,
        video_calls = stats.video_calls,
        screened = stats.candidates_screened,
        qualified = stats.qualified,
        "run finished"
    );
    if stats.failures() > 0 {
        warn!(
            transport = stats.transport_failures,
            shape = stats.shape_failures,
            "some API calls failed and were counted as empty; results may be incomplete"
        );
    }

    if found.influencers.is_empty() {
        println!("No influencers found matching the criteria.");
        return;
    }

    if let Err(e) = write_reports(args, &found) {
        eprintln!("\nAn error occurred: {e:#}");
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use tikscout_finder::NoDelay;
    use tikscout_finder::testing::{MockSource, candidate};

    fn two_qualifying_accounts() -> MockSource {
        MockSource::new()
            .on_search("tech", vec![vec![candidate("first", 1_000), candidate("second", 2_000)]])
            .on_videos("sec-first", &[45_000])
            .on_videos("sec-second", &[90_000])
    }

    fn args_writing_to(path: &std::path::Path) -> Args {
        Args::parse_from(["scout", "--keywords", "tech", "--output", path.to_str().unwrap()])
    }

    #[tokio::test(start_paused = true)]
    async fn interrupt_stops_the_run_and_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let pacer = RandomDelay::fixed(60.0).unwrap();
        let finder = InfluencerFinder::new(two_qualifying_accounts(), pacer, FinderConfig::default());

        let outcome = run_until(&finder, &["tech"], tokio::time::sleep(Duration::from_secs(1)))
            .await
            .unwrap();

        assert!(outcome.is_none());
        assert_eq!(finder.source().search_calls().len(), 1);
        assert!(finder.source().video_calls().is_empty());

        report_outcome(&args_writing_to(&dir.path().join("out.csv")), Ok(outcome));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn failed_signal_handler_does_not_stop_the_run() {
        let dir = tempfile::tempdir().unwrap();
        let csv = dir.path().join("out.csv");
        let finder = InfluencerFinder::new(two_qualifying_accounts(), NoDelay, FinderConfig::default());
        let signal = async { Err(std::io::Error::other("no signal handler")) };

        let outcome = run_until(&finder, &["tech"], interrupted(signal))
            .await
            .unwrap();

        assert_eq!(outcome.as_ref().map(|r| r.influencers.len()), Some(2));

        report_outcome(&args_writing_to(&csv), Ok(outcome));

        let table = std::fs::read_to_string(&csv).unwrap();
        let rows: Vec<&str> = table.lines().skip(1).collect();
        assert!(rows[0].starts_with("second,"));
        assert!(rows[1].starts_with("first,"));

        let summary = std::fs::read_to_string(dir.path().join("out.txt")).unwrap();
        let first = summary.find("1. @first").unwrap();
        let second = summary.find("2. @second").unwrap();
        assert!(first < second);
    }

    #[test]
    fn defaults_mirror_the_finder_defaults() {
        let args = Args::parse_from(["scout"]);

        assert_eq!(args.keywords, vec!["AI", "tech", "business"]);
        assert_eq!(args.output, PathBuf::from("tiktok_influencers.csv"));
        assert!(!args.strict);
        assert_eq!(args.finder_config(), FinderConfig::default());
    }

    #[test]
    fn parses_keywords_thresholds_and_strict_mode() {
        let args = Args::parse_from([
            "scout",
            "--keywords",
            "cooking",
            "travel",
            "--max-followers",
            "100000",
            "--min_avg_views",
            "25000",
            "--results-per-keyword",
            "20",
            "--strict",
        ]);

        let config = args.finder_config();
        assert_eq!(args.keywords, vec!["cooking", "travel"]);
        assert_eq!(config.criteria.max_followers, 100_000);
        assert_eq!(config.criteria.min_avg_views, 25_000.0);
        assert_eq!(config.results_per_keyword, 20);
        assert_eq!(config.failure_policy, FailurePolicy::Strict);
    }
}
