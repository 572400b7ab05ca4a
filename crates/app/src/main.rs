use std::env;

use log::{info, LevelFilter};
use rig_app::Scenario;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut verbose = false;
    let mut path = None;
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "-v" | "--verbose" => verbose = true,
            _ => path = Some(arg),
        }
    }
    let Some(path) = path else {
        eprintln!("usage: rig-replay [--verbose] <scenario.json>");
        std::process::exit(2);
    };

    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
    TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto)?;

    let scenario = Scenario::load(&path)?;
    info!("replaying {} ticks from {}", scenario.ticks.len(), path);
    let report = scenario.run()?;

    for outputs in &report.outputs {
        println!("{}", serde_json::to_string(outputs)?);
    }
    for line in &report.display.lines {
        eprintln!("{line}");
    }
    Ok(())
}
