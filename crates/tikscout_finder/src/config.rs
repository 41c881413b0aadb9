use bon::Builder;
use tikscout_tiktok::DEFAULT_PAGE_SIZE;

#[derive(Debug, Clone, PartialEq, Builder)]
pub struct Criteria {
    /// Inclusive ceiling; anything above is rejected before any video fetch.
    #[builder(default = 550_000)]
    pub max_followers: u64,
    /// Inclusive floor on the average play count.
    #[builder(default = 40_000.0)]
    pub min_avg_views: f64,
    #[builder(default = DEFAULT_PAGE_SIZE)]
    pub videos_per_user: u32,
}

impl Default for Criteria {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Log it, count it, carry on as if the call returned nothing.
    #[default]
    Degrade,
    Strict,
}

#[derive(Debug, Clone, PartialEq, Builder)]
pub struct FinderConfig {
    #[builder(default)]
    pub criteria: Criteria,
    #[builder(default = 50)]
    pub results_per_keyword: usize,
    #[builder(default = DEFAULT_PAGE_SIZE)]
    pub page_size: u32,
    #[builder(default)]
    pub failure_policy: FailurePolicy,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
