//! Indicatif spinner shown while a post is fetched and scored.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const TICK: Duration = Duration::from_millis(100);

/// Start a steady-ticking spinner with `message`.
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.magenta} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(&["◐", "◓", "◑", "◒", "●"]);
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb.enable_steady_tick(TICK);
    pb
}
