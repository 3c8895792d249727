//! Headless flow: build the wizard state from flags and run without the TUI

use std::thread;
use std::time::Instant;

use anyhow::{Context, Result};
use log::debug;

use super::config::RunConfig;
use super::prompts::confirm_start_run;
use crate::pipeline::{PipelineResults, Step, TickOutcome};
use crate::report::print_review;
use crate::utils::{
    create_progress_bar, finish_with_success, format_notice, print_info, print_notice,
    print_step_header,
};

/// Switches that only affect the headless front end
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadlessOptions {
    /// Start without asking
    pub no_confirm: bool,
    /// Keep stdout free of status output (JSON mode); notices go to stderr
    pub quiet: bool,
}

/// Walk the wizard to Review, optionally confirm, then run the simulation.
///
/// Returns `None` when the user declines to start.
pub fn run_headless(
    config: &RunConfig,
    options: HeadlessOptions,
) -> Result<Option<PipelineResults>> {
    let (mut state, notice) = config.seed_state();

    if let Some(notice) = notice {
        if options.quiet {
            eprintln!("{}", format_notice(&notice));
        } else {
            print_notice(&notice);
        }
    }

    while state.current_step != Step::Review {
        state.go_next();
    }
    debug!("headless wizard reached {}", state.current_step);

    if !options.quiet {
        print_step_header(Step::Review.index() + 1, Step::Review.title());
        println!();
        print_review(&state);
    }

    if !options.no_confirm && !confirm_start_run(&state.dataset_label)? {
        if !options.quiet {
            print_info("Cancelled by user.");
        }
        return Ok(None);
    }

    if !options.quiet {
        print_step_header(Step::Processing.index() + 1, Step::Processing.title());
        println!();
    }

    let mut runner = config.runner();
    runner.start(&mut state, Instant::now())?;

    let pb = create_progress_bar(100, "Processing pipeline");
    let completion = loop {
        if let Some(wait) = runner.time_until_tick(Instant::now()) {
            thread::sleep(wait);
        }
        match runner.tick(&mut state, Instant::now()) {
            TickOutcome::Progress(percent) => pb.set_position(u64::from(percent)),
            TickOutcome::Completed(notice) => {
                pb.set_position(u64::from(state.progress_percent));
                break notice;
            }
            TickOutcome::Idle => {}
        }
    };
    finish_with_success(&pb, "Processing complete");

    if options.quiet {
        eprintln!("{}", format_notice(&completion));
    } else {
        print_notice(&completion);
    }

    let results = state
        .results()
        .context("simulated run finished without results")?;
    Ok(Some(results))
}
