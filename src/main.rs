use clap::Parser;

use s7doctor::safety::command_filter::CommandFilter;
use s7doctor::{cli, config, probe, safety};

fn main() -> anyhow::Result<()> {
    // Initialize tracing. Default WARN so the diagnostic transcript on
    // stdout stays clean; RUST_LOG=debug surfaces discovery details.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();
    let config = config::load_config(&cli)?;

    match &cli.command {
        cli::Commands::Profiles { .. } => {
            let report = probe::run(&config);
            print!("{report}");
        }
        cli::Commands::Stty { command } => {
            let filter = CommandFilter::new(&config.blocked_patterns)
                .map_err(|e| anyhow::anyhow!("Failed to compile blocklist patterns: {}", e))?;

            match command {
                Some(command) => match filter.check(command) {
                    Some(blocked) => {
                        println!("BLOCKED: {}", blocked.reason);
                        println!("  pattern: {}", blocked.pattern);
                        println!("  command: {}", blocked.command);
                    }
                    None => println!("ALLOWED: {command}"),
                },
                None => {
                    let report = safety::run_smoke_test(&filter);
                    print!("{report}");
                }
            }
        }
    }

    Ok(())
}
