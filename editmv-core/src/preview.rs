use nu_ansi_term::{Color as AnsiColor, Style};
use std::fmt::Write;
use std::io::{self, IsTerminal};

use crate::plan::{ApplyReport, RenamePlan};

/// Determine whether to use colors based on explicit preference or terminal detection
pub fn should_use_color_with_detector<F>(use_color: Option<bool>, is_terminal: F) -> bool
where
    F: Fn() -> bool,
{
    match use_color {
        Some(explicit_color) => explicit_color,
        None => is_terminal(),
    }
}

/// Determine whether to use colors based on explicit preference or terminal detection
pub fn should_use_color(use_color: Option<bool>) -> bool {
    should_use_color_with_detector(use_color, || io::stdout().is_terminal())
}

fn label(text: &str, background: AnsiColor, use_color: bool) -> String {
    if use_color {
        Style::new()
            .on(background)
            .fg(AnsiColor::Black)
            .paint(text)
            .to_string()
    } else {
        text.to_string()
    }
}

/// Render the plan as NEW/OLD pairs in snapshot order.
///
/// Changed entries show the proposed name on a green NEW label and the
/// current name on a red OLD label; unchanged entries show a single yellow
/// NEW line. Entries are separated by a blank line.
pub fn render_preview(plan: &RenamePlan, use_color: bool) -> String {
    let mut output = String::new();

    for (index, entry) in plan.entries.iter().enumerate() {
        if index > 0 {
            writeln!(output).unwrap();
        }
        if entry.is_noop() {
            writeln!(
                output,
                "{} {}",
                label("NEW:", AnsiColor::Yellow, use_color),
                entry.new_name
            )
            .unwrap();
        } else {
            writeln!(
                output,
                "{} {}",
                label("NEW:", AnsiColor::Green, use_color),
                entry.new_name
            )
            .unwrap();
            writeln!(
                output,
                "{} {}",
                label("OLD:", AnsiColor::Red, use_color),
                entry.old_name
            )
            .unwrap();
        }
    }

    output
}

/// Render per-entry apply results: a green OK line per success, a red ERROR
/// line with the reason per failure.
pub fn render_apply_report(report: &ApplyReport, use_color: bool) -> String {
    if report.outcomes.is_empty() {
        return "Nothing to rename.\n".to_string();
    }

    let mut output = String::new();
    for outcome in &report.outcomes {
        match &outcome.error {
            None => writeln!(
                output,
                "{} {} -> {}",
                label("OK:", AnsiColor::Green, use_color),
                outcome.old_name,
                outcome.new_name
            )
            .unwrap(),
            Some(reason) => writeln!(
                output,
                "{} {} -> {} ({})",
                label("ERROR:", AnsiColor::Red, use_color),
                outcome.old_name,
                outcome.new_name,
                reason
            )
            .unwrap(),
        }
    }
    output
}
