//! Terminal progress bar for the row passes.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use textminer_core::Progress;

const TEMPLATE: &str = "{msg}: {percent:>3}%|{bar:40.cyan/blue}| {pos}/{len} [{elapsed_precise}<{eta}]";

/// Draws on stderr, or nowhere when disabled.
pub struct BarProgress {
    bar: ProgressBar,
}

impl BarProgress {
    pub fn new(enabled: bool) -> Self {
        let bar = ProgressBar::new(0);
        if enabled {
            bar.set_draw_target(ProgressDrawTarget::stderr());
            if let Ok(style) = ProgressStyle::default_bar().template(TEMPLATE) {
                bar.set_style(style.progress_chars("█▉ "));
            }
        } else {
            bar.set_draw_target(ProgressDrawTarget::hidden());
        }
        Self { bar }
    }
}

impl Progress for BarProgress {
    fn start(&self, label: &str, total: usize) {
        self.bar.reset();
        self.bar.set_length(total as u64);
        self.bar.set_message(label.to_string());
    }

    fn advance(&self) {
        self.bar.inc(1);
    }

    fn finish(&self) {
        self.bar.finish();
    }
}
