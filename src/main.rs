use anyhow::Result;
use clap::Parser;
use clap::error::ErrorKind;
use torus_snake::game::GameConfig;
use torus_snake::modes::HumanMode;

#[derive(Parser)]
#[command(name = "torus_snake")]
#[command(version, about = "Terminal snake with a hunting enemy")]
struct Cli {
    /// Tick interval in milliseconds (positive integer)
    #[arg(long, value_name = "MILLISECONDS")]
    speed: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err)
            if matches!(
                err.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
            ) =>
        {
            err.print()?;
            std::process::exit(0);
        }
        Err(err) => {
            err.print()?;
            std::process::exit(1);
        }
    };

    let mut config = GameConfig::default();
    if let Some(raw) = cli.speed.as_deref() {
        // A bad value is a warning, not an error: keep the default.
        match raw.parse::<u64>() {
            Ok(ms) if ms > 0 => config.tick_ms = ms,
            _ => eprintln!(
                "Invalid speed value: {raw} (keeping default {} ms)",
                config.tick_ms
            ),
        }
    }

    HumanMode::new(config).run().await
}
