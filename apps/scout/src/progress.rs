use std::sync::Mutex;

use indicatif::{ProgressBar, ProgressStyle};
use tikscout_finder::{ProgressSink, Stage};

const TEMPLATE: &str = "{msg}: {percent:>3}%|{wide_bar:.cyan/blue}| {pos}/{len} [{elapsed_precise}]";

/// Terminal progress bars, one per search or analysis stage.
#[derive(Default)]
pub struct TerminalProgress {
    bar: Mutex<Option<ProgressBar>>,
}

impl TerminalProgress {
    fn with_bar(&self, f: impl FnOnce(&ProgressBar)) {
        if let Ok(guard) = self.bar.lock() {
            if let Some(bar) = guard.as_ref() {
                f(bar);
            }
        }
    }
}

fn message(stage: Stage<'_>) -> String {
    match stage {
        Stage::Search { keyword } => format!("Finding {keyword} creators"),
        Stage::Analyze => "Analyzing accounts".to_string(),
    }
}

impl ProgressSink for TerminalProgress {
    fn start(&self, stage: Stage<'_>, total: u64) {
        let bar = ProgressBar::new(total);
        bar.set_style(
            ProgressStyle::default_bar()
                .template(TEMPLATE)
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        bar.set_message(message(stage));

        if let Ok(mut guard) = self.bar.lock() {
            if let Some(previous) = guard.replace(bar) {
                previous.finish();
            }
        }
    }

    fn advance(&self, delta: u64) {
        self.with_bar(|bar| bar.inc(delta));
    }

    fn finish(&self) {
        if let Ok(mut guard) = self.bar.lock() {
            if let Some(bar) = guard.take() {
                bar.finish();
            }
        }
    }
}
