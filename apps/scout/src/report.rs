use std::fs::File;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use polars::prelude::*;
use prettytable::{Cell, Row, Table};
use thiserror::Error;
use tikscout_finder::Criteria;
use tikscout_shared_models::QualifiedInfluencer;

const BIO_PREVIEW_CHARS: usize = 70;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to write report file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to build CSV: {0}")]
    Polars(#[from] PolarsError),
}

pub struct SummaryHeader<'a> {
    pub generated_at: DateTime<Local>,
    pub keywords: &'a [String],
    pub criteria: &'a Criteria,
}

/// Highest average views first; ties keep discovery order.
pub fn rank(mut influencers: Vec<QualifiedInfluencer>) -> Vec<QualifiedInfluencer> {
    influencers.sort_by(|a, b| b.avg_views.total_cmp(&a.avg_views));
    influencers
}

/// The text summary sits next to the CSV with a `.txt` extension.
pub fn summary_path(csv_path: &Path) -> PathBuf {
    let txt = csv_path.with_extension("txt");
    if txt == csv_path {
        let mut name = csv_path.as_os_str().to_owned();
        name.push(".summary.txt");
        return PathBuf::from(name);
    }
    txt
}

pub fn write_csv(path: &Path, influencers: &[QualifiedInfluencer]) -> Result<(), ReportError> {
    let strings = |field: fn(&QualifiedInfluencer) -> String| {
        influencers.iter().map(field).collect::<Vec<_>>()
    };

    let mut df = DataFrame::new(vec![
        Column::new("Username".into(), strings(|i| i.username.clone())),
        Column::new("Display Name".into(), strings(|i| i.display_name.clone())),
        Column::new(
            "Followers".into(),
            influencers.iter().map(|i| i.follower_count).collect::<Vec<_>>(),
        ),
        Column::new(
            "Avg Views".into(),
            influencers.iter().map(|i| i.avg_views).collect::<Vec<_>>(),
        ),
        Column::new(
            "Videos".into(),
            influencers.iter().map(|i| i.video_count).collect::<Vec<_>>(),
        ),
        Column::new("Niche".into(), strings(|i| i.niche.clone())),
        Column::new("Bio".into(), strings(|i| i.bio.clone())),
        Column::new(
            "Verified".into(),
            influencers.iter().map(|i| i.verified).collect::<Vec<_>>(),
        ),
        Column::new("Profile URL".into(), strings(|i| i.profile_url.clone())),
        Column::new("Sec UID".into(), strings(|i| i.sec_uid.clone())),
    ])?;

    let mut file = File::create(path)?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)?;

    Ok(())
}

pub fn render_summary(header: &SummaryHeader<'_>, influencers: &[QualifiedInfluencer]) -> String {
    let mut out = String::new();

    out.push_str("TikTok Influencer Finder Results\n");
    out.push_str("===============================\n\n");
    out.push_str(&format!(
        "Date: {}\n",
        header.generated_at.format("%Y-%m-%d %H:%M:%S")
    ));
    out.push_str(&format!("Search Keywords: {}\n", header.keywords.join(", ")));
    out.push_str(&format!("Criteria: {}\n\n", criteria_line(header.criteria)));
    out.push_str(&format!(
        "Found {} matching influencers:\n\n",
        influencers.len()
    ));

    for (i, inf) in influencers.iter().enumerate() {
        out.push_str(&format!("{}. @{} ({})\n", i + 1, inf.username, inf.display_name));
        out.push_str(&format!("   Followers: {}\n", group_thousands(inf.follower_count)));
        out.push_str(&format!("   Avg Views: {}\n", format_views(inf.avg_views)));
        out.push_str(&format!("   Videos: {}\n", inf.video_count));
        out.push_str(&format!("   Niche: {}\n", inf.niche));
        out.push_str(&format!(
            "   Verified: {}\n",
            if inf.verified { "Yes" } else { "No" }
        ));
        out.push_str(&format!("   Profile: {}\n", inf.profile_url));

        let bio = inf.bio.trim();
        if !bio.is_empty() {
            out.push_str(&format!("   Bio: {}\n", bio_preview(bio)));
        }

        out.push('\n');
    }

    out
}

pub fn write_summary(
    path: &Path,
    header: &SummaryHeader<'_>,
    influencers: &[QualifiedInfluencer],
) -> Result<(), ReportError> {
    std::fs::write(path, render_summary(header, influencers))?;
    Ok(())
}

pub fn print_table(influencers: &[QualifiedInfluencer], limit: usize) {
    let mut table = Table::new();
    table.set_titles(Row::new(
        ["#", "Username", "Followers", "Avg Views", "Niche", "Verified"]
            .iter()
            .map(|title| Cell::new(title))
            .collect(),
    ));

    for (i, inf) in influencers.iter().take(limit).enumerate() {
        table.add_row(Row::new(vec![
            Cell::new(&(i + 1).to_string()),
            Cell::new(&format!("@{}", inf.username)),
            Cell::new(&group_thousands(inf.follower_count)),
            Cell::new(&format_views(inf.avg_views)),
            Cell::new(&inf.niche),
            Cell::new(if inf.verified { "Yes" } else { "No" }),
        ]));
    }

    table.printstd();
}

pub fn criteria_line(criteria: &Criteria) -> String {
    format!(
        "Under {} followers, with at least {} average views per video",
        group_thousands(criteria.max_followers),
        group_thousands(criteria.min_avg_views.max(0.0).round() as u64)
    )
}

fn bio_preview(bio: &str) -> String {
    match bio.char_indices().nth(BIO_PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &bio[..cut]),
        None => bio.to_string(),
    }
}

pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

/// `1234567.891` -> `1,234,567.89`
pub fn format_views(views: f64) -> String {
    let fixed = format!("{:.2}", views.max(0.0));
    let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let whole = whole.parse::<u64>().map(group_thousands).unwrap_or_else(|_| whole.to_string());

    format!("{whole}.{frac}")
}
