use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, IsTerminal, Write};
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use container_alive::banner;
use container_alive::runner::{DEFAULT_INTERVAL, DEFAULT_ITERATIONS};
use container_alive::{PlatformInfo, RunSettings, Runner, TokioPause};

#[derive(Parser)]
#[command(name = "container-alive")]
#[command(
    about = "Prints host metadata and a heartbeat to show a container is running",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    Run {
        #[arg(
            short,
            long,
            default_value_t = DEFAULT_ITERATIONS,
            help = "Number of progress lines"
        )]
        iterations: u32,

        #[arg(
            long,
            default_value_t = DEFAULT_INTERVAL.as_millis() as u64,
            help = "Pause after each line, in milliseconds"
        )]
        interval_ms: u64,
    },

    Info {
        #[arg(long, help = "Print platform metadata as JSON")]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logger();

    let cli = Cli::parse();

    match cli.command {
        None => {
            run(RunSettings::default()).await?;
        }
        Some(Commands::Run { iterations, interval_ms }) => {
            let settings = RunSettings::new(iterations, Duration::from_millis(interval_ms))?;
            run(settings).await?;
        }
        Some(Commands::Info { json }) => {
            print_info(json)?;
        }
    }

    Ok(())
}

// Quiet unless RUST_LOG asks for more; stderr shares the container log stream.
fn init_logger() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(io::stderr().is_terminal())
                .with_target(false)
                .compact(),
        )
        .init();
}

async fn run(settings: RunSettings) -> Result<()> {
    let platform = PlatformInfo::detect();
    let mut runner = Runner::new(io::stdout(), TokioPause, settings);

    runner.run(&platform).await?;

    Ok(())
}

fn print_info(json: bool) -> Result<()> {
    let platform = PlatformInfo::detect();
    let mut out = io::stdout();

    if json {
        serde_json::to_writer_pretty(&mut out, &platform)
            .context("serializing platform info")?;
        writeln!(out).context("writing platform info")?;
    } else {
        for line in banner::metadata_lines(&platform) {
            writeln!(out, "{}", line).context("writing platform info")?;
        }
    }

    Ok(())
}
