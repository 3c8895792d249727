//! Listing of everything the wizard offers

use console::style;

use crate::pipeline::{
    mock_metric_value, DATASETS, METRICS, MODEL, NOT_AVAILABLE, PREPROCESSING_METHODS,
    TRAINING_METHOD, VISUALIZATION_TYPES,
};

fn print_section(title: &str, items: &[&str]) {
    println!();
    println!("    {}", style(title).cyan().bold());
    for item in items {
        println!("      {} {}", style("•").dim(), item);
    }
}

/// Print the catalog of datasets, methods, metrics and visualizations
pub fn print_catalog() {
    print_section("Datasets", &DATASETS);
    print_section("Preprocessing Methods", &PREPROCESSING_METHODS);
    print_section("Language Model", &[MODEL]);
    print_section("Training Method", &[TRAINING_METHOD]);

    println!();
    println!("    {}", style("Metrics").cyan().bold());
    for metric in METRICS {
        println!(
            "      {} {} {}",
            style("•").dim(),
            metric,
            style(format!("(mock: {})", mock_metric_value(metric).unwrap_or(NOT_AVAILABLE))).dim()
        );
    }

    print_section("Visualization Types", &VISUALIZATION_TYPES);
    println!();
}
