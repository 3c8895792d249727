//! Pipebuilder: Text-Classification Pipeline Wizard CLI
//!
//! Walks through dataset, preprocessing, model and evaluation choices, then
//! runs a simulated pipeline and shows placeholder results.

use anyhow::{Context, Result};
use clap::Parser;

use pipebuilder::cli::{
    run_headless, run_wizard, Cli, Commands, HeadlessOptions, RunConfig, WizardOutcome,
};
use pipebuilder::pipeline::PipelineResults;
use pipebuilder::report::{print_catalog, ResultsReport};
use pipebuilder::utils::{init_logging, print_banner, print_completion};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        init_logging();
    }

    if let Some(command) = &cli.command {
        return match command {
            Commands::Catalog => {
                print_catalog();
                Ok(())
            }
        };
    }

    let config = RunConfig::from(&cli);

    let results = if cli.headless {
        if !cli.json {
            print_banner(env!("CARGO_PKG_VERSION"));
        }
        let options = HeadlessOptions {
            no_confirm: cli.no_confirm,
            quiet: cli.json,
        };
        run_headless(&config, options)?
    } else {
        match run_wizard(&config)? {
            WizardOutcome::Completed(results) => Some(*results),
            WizardOutcome::Quit => {
                println!("Cancelled by user.");
                None
            }
        }
    };

    if let Some(results) = results {
        output_results(&results, cli.json)?;
    }

    Ok(())
}

fn output_results(results: &PipelineResults, json: bool) -> Result<()> {
    if json {
        let body = results
            .to_json()
            .context("Failed to serialize results as JSON")?;
        println!("{}", body);
    } else {
        ResultsReport::new(results).display();
        print_completion();
    }
    Ok(())
}
