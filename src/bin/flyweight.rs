// Flyweight demo: replays the builtin scenario with every lifecycle event
// traced, then prints a JSON summary per phase.

use colored::Colorize;
use flyweight_patterns::{Scenario, ScenarioError};
use std::process::ExitCode;

fn run() -> Result<(), ScenarioError> {
    let scenario = Scenario::builtin()?;
    let report = scenario.run();

    println!();
    println!("{}", "=== Summary ===".bold());
    for phase in &report.phases {
        println!(
            "  {}: {} trees sharing {} types ({} hits, {} misses)",
            phase.name.green(),
            phase.forest_size,
            phase.cache_size,
            phase.stats.hits,
            phase.stats.misses
        );
    }
    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("{} {e}", "could not render report:".yellow()),
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_target(false)
        .init();

    println!("Flyweight Pattern");
    println!("=================\n");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
