//! Terminal styling utilities for headless output

use console::{style, Emoji};

use crate::pipeline::{Notice, NoticeKind};

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", ">> ");
pub static DATASET: Emoji<'_, '_> = Emoji("📂 ", "");
pub static BRAIN: Emoji<'_, '_> = Emoji("🧠 ", "");
pub static CHART: Emoji<'_, '_> = Emoji("📊 ", "");

/// Print the application banner
pub fn print_banner(version: &str) {
    let banner = r#"
    ┏━┓╻┏━┓┏━╸┏┓ ╻ ╻╻╻  ╺┳┓┏━╸┏━┓
    ┣━┛┃┣━┛┣╸ ┣┻┓┃ ┃┃┃   ┃┃┣╸ ┣┳┛
    ╹  ╹╹  ┗━╸┗━┛┗━┛╹┗━╸╺┻┛┗━╸╹┗╸
    "#;

    println!();
    println!("{}", style(banner).cyan().bold());
    println!(
        "    {}",
        style("Text-classification pipelines, step by step").dim()
    );
    println!("    {}", style(format!("v{}", version)).dim());
    println!("    {}", style("━".repeat(50)).dim());
    println!();
}

/// Print a step header with styling
pub fn print_step_header(step_num: usize, title: &str) {
    println!();
    println!(
        "    {} {} {}",
        style(format!("STEP {}", step_num)).cyan().bold(),
        style("│").dim(),
        style(title).white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {} {}", INFO, message);
}

/// Render a notice as a single styled line
pub fn format_notice(notice: &Notice) -> String {
    match notice.kind {
        NoticeKind::Success => format!(
            "{} {} {}",
            style("✓").green().bold(),
            style(&notice.title).green().bold(),
            style(&notice.description).dim()
        ),
        NoticeKind::Error => format!(
            "{} {} {}",
            style("✗").red().bold(),
            style(&notice.title).red().bold(),
            style(&notice.description).dim()
        ),
    }
}

/// Print a notice to stdout
pub fn print_notice(notice: &Notice) {
    println!("    {}", format_notice(notice));
}

/// Print the final completion message
pub fn print_completion() {
    println!();
    println!(
        "    {} {}",
        ROCKET,
        style("Pipeline run complete!").green().bold()
    );
    println!();
}

/// Shorten a string to `max_len` characters, keeping the tail
pub fn truncate_string(s: &str, max_len: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= max_len {
        s.to_string()
    } else {
        let tail: String = chars[chars.len() - max_len.saturating_sub(3)..]
            .iter()
            .collect();
        format!("...{}", tail)
    }
}
