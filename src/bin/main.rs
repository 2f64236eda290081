use anyhow::Result;
use clap::Parser;
use equivtrees::config::Config;
use equivtrees::runner::Runner;
use log::info;

fn main() -> Result<()> {
    // Logs go to stderr, stdout carries only the results
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Stderr)
        .init();

    let config = Config::parse();
    let mut runner = Runner::new(config)?;
    info!("Starting equivtrees");

    let outcomes = runner.fixed()?;
    for outcome in &outcomes {
        println!("{}", outcome.same);
    }

    if let Some((equal, total)) = runner.sweep()? {
        println!("{}/{}", equal, total);
    }

    if runner.strict() && !outcomes.iter().all(|o| o.as_expected()) {
        std::process::exit(1);
    }

    Ok(())
}
