pub mod config;
pub mod dedup;
pub mod error;
pub mod finder;
pub mod pacing;
pub mod progress;
pub mod qualify;
pub mod search;
pub mod source;
pub mod stats;
pub mod testing;

pub use config::{Criteria, FailurePolicy, FinderConfig};
pub use error::{FinderError, Operation};
pub use finder::{FinderReport, InfluencerFinder};
pub use pacing::{NoDelay, Pacer, RandomDelay};
pub use progress::{NoProgress, ProgressSink, Stage};
pub use qualify::{Verdict, average_views};
pub use source::{CreatorSource, FetchFailure};
pub use stats::RunStats;
