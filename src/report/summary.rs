//! Review card and results table for headless output

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::pipeline::{PipelineResults, WizardState, MODEL, NOT_AVAILABLE, TRAINING_METHOD};
use crate::utils::{truncate_string, BRAIN, CHART, DATASET};

fn or_none(value: String) -> String {
    if value.is_empty() {
        "None".to_string()
    } else {
        value
    }
}

/// Print the configuration card shown on the review step
pub fn print_review(state: &WizardState) {
    let box_width = 64;
    let line = "─".repeat(box_width - 2);

    println!("    ┌{}┐", line);
    let title = "Review & Start";
    println!(
        "    │ {}{}│",
        style(title).cyan().bold(),
        " ".repeat(box_width - 3 - title.len())
    );
    println!("    ├{}┤", line);
    println!(
        "    │  {}Dataset:        {:<41}│",
        DATASET,
        truncate_string(&or_none(state.dataset_label.clone()), 38)
    );
    println!(
        "    │  {}Model:          {:<41}│",
        BRAIN,
        truncate_string(&format!("{} ({})", MODEL, TRAINING_METHOD), 38)
    );
    println!("    ├{}┤", line);
    for (label, value) in [
        ("Preprocessing:", state.preprocessing.joined()),
        ("Metrics:", state.metrics.joined()),
        ("Visualizations:", state.visualizations.joined()),
    ] {
        println!(
            "    │  {}{:<16}{:<41}│",
            CHART,
            label,
            truncate_string(&or_none(value), 38)
        );
    }
    println!("    └{}┘", line);
    println!();
}

/// Results of a completed run rendered as tables
pub struct ResultsReport<'a> {
    results: &'a PipelineResults,
}

impl<'a> ResultsReport<'a> {
    pub fn new(results: &'a PipelineResults) -> Self {
        Self { results }
    }

    /// Metric table with "N/A" for metrics that have no placeholder value
    pub fn metrics_table(&self) -> Table {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        for metric in &self.results.metrics {
            let value = metric.display_value();
            let cell = if value == NOT_AVAILABLE {
                Cell::new(value).fg(Color::DarkGrey)
            } else {
                Cell::new(value).fg(Color::Green).add_attribute(Attribute::Bold)
            };
            table.add_row(vec![Cell::new(&metric.name), cell]);
        }
        table
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("PIPELINE RESULTS").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!(
            "      Results for {} {}",
            style(&self.results.dataset).cyan().bold(),
            style(format!(
                "({}, {})",
                self.results.model, self.results.training_method
            ))
            .dim()
        );
        println!();

        if self.results.metrics.is_empty() {
            println!("      {}", style("No metrics selected").dim());
        } else {
            for line in self.metrics_table().to_string().lines() {
                println!("    {}", line);
            }
        }

        println!();
        println!("      {}:", style("Visualizations").yellow());
        if self.results.visualizations.is_empty() {
            println!("        {}", style("None selected").dim());
        }
        for visual in &self.results.visualizations {
            println!(
                "        {} {} {}",
                style("▣").dim(),
                visual,
                style("(visualization placeholder)").dim()
            );
        }

        println!();
        println!(
            "      {}",
            style(format!(
                "Completed at {}",
                self.results.completed_at.format("%Y-%m-%d %H:%M:%S UTC")
            ))
            .dim()
        );
    }
}
