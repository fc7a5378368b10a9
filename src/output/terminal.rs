//! Terminal output formatting with colors and box drawing.

use colored::Colorize;

use crate::result::ThresholdEstimate;
use crate::staircase::Staircase;

const BOX_WIDTH: usize = 56;

fn header(title: &str) -> String {
    let dashes = BOX_WIDTH.saturating_sub(title.len() + 4);
    format!("\u{250c}\u{2500} {} {}\n", title, "\u{2500}".repeat(dashes))
}

fn footer() -> String {
    format!("\u{2514}{}\n", "\u{2500}".repeat(BOX_WIDTH))
}

/// Format a threshold estimate as a compact, skimmable box.
///
/// Designed for demo drivers and for inclusion in assertion panic
/// messages, where a one-glance summary beats a debug dump.
///
/// # Example output
///
/// ```text
/// ┌─ Threshold Estimate ───────────────────────────────
/// │ Threshold = 8.000
/// │ Hit rate  = 75.0% (3 hits in 4 trials at threshold)
/// │ Evidence  = 11 trials across 3 levels
/// └────────────────────────────────────────────────────
/// ```
pub fn format_estimate(estimate: &ThresholdEstimate) -> String {
    let mut out = String::new();
    out.push_str(&header("Threshold Estimate"));
    let threshold = format!("{:.3}", estimate.threshold);
    out.push_str(&format!(
        "\u{2502} Threshold = {}\n",
        threshold.as_str().bold()
    ));
    out.push_str(&format!(
        "\u{2502} Hit rate  = {:.1}% ({} hits in {} trials at threshold)\n",
        estimate.hit_rate * 100.0,
        estimate.hits,
        estimate.trials_at_threshold
    ));
    out.push_str(&format!(
        "\u{2502} Evidence  = {} trials across {} levels\n",
        estimate.total_trials, estimate.levels_visited
    ));
    out.push_str(&footer());
    out
}

/// Format the current state of a session, running or stopped.
///
/// Lists every visited level with its tally, coloring levels that meet the
/// detection criterion green and the rest dimmed.
pub fn format_session(staircase: &Staircase) -> String {
    let mut out = String::new();
    out.push_str(&header("Staircase Session"));

    let status = if staircase.is_stopped() {
        "stopped".red().to_string()
    } else {
        "running".green().to_string()
    };
    out.push_str(&format!(
        "\u{2502} Status: {} ({} trials, {} consecutive misses)\n",
        status,
        staircase.trials_run(),
        staircase.consecutive_misses()
    ));
    out.push_str(&format!(
        "\u{2502} Next intensity: {:.3}\n",
        staircase.current_intensity()
    ));
    out.push_str("\u{2502}\n");

    for (intensity, tally) in staircase.history().iter() {
        let line = format!("{:>10.3}  {}", intensity, tally);
        let line = if tally.hit_rate() >= crate::HIT_RATE_CRITERION {
            line.as_str().green().to_string()
        } else {
            line.as_str().dimmed().to_string()
        };
        out.push_str(&format!("\u{2502} {}\n", line));
    }

    out.push_str(&footer());
    out
}
