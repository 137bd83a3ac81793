use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use log::info;

use invaders_core::config::LevelConfig;
use invaders_headless::logging;
use invaders_headless::state::RunnerState;
use invaders_sim::SimConfig;

const USAGE: &str = "usage: invaders-headless [LEVEL | LEVEL.json] [SECONDS]";

/// A bare number selects a built-in level; anything else is a JSON file.
fn load_level(arg: Option<&str>) -> anyhow::Result<LevelConfig> {
    match arg {
        None => Ok(LevelConfig::for_level(1)),
        Some(arg) => match arg.parse::<u32>() {
            Ok(level) => Ok(LevelConfig::for_level(level)),
            Err(_) => LevelConfig::load(Path::new(arg))
                .with_context(|| format!("loading level from {}", arg)),
        },
    }
}

fn main() -> anyhow::Result<()> {
    logging::setup_logging(logging::Info);

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        println!("{}", USAGE);
        return Ok(());
    }

    let level = load_level(args.first().map(String::as_str))?;
    let seconds: u64 = match args.get(1) {
        Some(s) => s.parse().with_context(|| format!("invalid seconds: {}\n{}", s, USAGE))?,
        None => 10,
    };

    info!(
        "running level {} ({}x{}) for {}s",
        level.level, level.formation_width, level.formation_height, seconds
    );

    let runner = RunnerState::new();
    runner.start(level, SimConfig::default())?;
    std::thread::sleep(Duration::from_secs(seconds));

    if let Some(report) = runner.latest_report()? {
        info!(
            "final report: {}",
            serde_json::to_string(&report).context("serializing report")?
        );
    }

    if let Some(summary) = runner.shutdown()? {
        info!(
            "{} ticks, {} bullets spawned, cleared: {}",
            summary.ticks, summary.bullets, summary.cleared
        );
    }
    Ok(())
}
