mod config;
mod error;
mod megacli;
mod parser;
mod sink;

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use tracing::{error, info};

use config::Config;
use error::CycleError;
use sink::EsSink;

#[derive(Parser)]
#[command(name = "megamon", about = "MegaRAID drive status shipper for Elasticsearch")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ShipArgs {
    /// Elasticsearch host:port
    #[arg(long, default_value = "localhost:9200")]
    destination: String,
    /// Index name; shipped documents go to <index>-YYYY.MM.DD
    #[arg(long, default_value = "euronas")]
    index: String,
    /// Value of the shipper field identifying this collector
    #[arg(long, default_value = "euronas")]
    shipper: String,
    /// Location of the MegaCli binary
    #[arg(long = "cli", default_value = "/opt/MegaRAID/MegaCli/MegaCli64")]
    cli_path: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Poll MegaCli on an interval and index every slot each cycle
    Run {
        /// Reporting interval (e.g. 30s, 5m, 1h)
        #[arg(short, long, default_value = "5m", value_parser = config::parse_interval)]
        interval: Duration,
        #[command(flatten)]
        ship: ShipArgs,
    },
    /// Run a single poll cycle and exit
    Once {
        #[command(flatten)]
        ship: ShipArgs,
    },
    /// Parse a saved -PDList report and print the records as JSON
    Parse {
        /// Report file ("-" for stdin)
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { interval, ship } => {
            let cfg = ship.into_config(interval);
            run_loop(&cfg).await
        }
        Commands::Once { ship } => {
            let cfg = ship.into_config(Duration::ZERO);
            let sink = EsSink::new(&cfg.destination, &cfg.index, &cfg.shipper)?;
            let indexed = cycle(&cfg, &sink).await?;
            println!("Indexed {indexed} slots.");
            Ok(())
        }
        Commands::Parse { file } => {
            let text = if file.as_os_str() == "-" {
                std::io::read_to_string(std::io::stdin())?
            } else {
                std::fs::read_to_string(&file)?
            };
            let records = parser::parse_report(&text)?;
            println!("{}", serde_json::to_string_pretty(&records)?);
            Ok(())
        }
    }
}

impl ShipArgs {
    fn into_config(self, interval: Duration) -> Config {
        Config {
            interval,
            destination: self.destination,
            index: self.index,
            shipper: self.shipper,
            cli_path: self.cli_path,
        }
    }
}

/// Poll forever, one cycle per interval. Command and transport failures are
/// transient and only cost the current cycle; a parse failure means MegaCli's
/// report format drifted, which nothing but an operator can fix.
async fn run_loop(cfg: &Config) -> anyhow::Result<()> {
    let sink = EsSink::new(&cfg.destination, &cfg.index, &cfg.shipper)?;
    info!(
        "Polling {} every {:?}, shipping to {} index {}",
        cfg.cli_path.display(),
        cfg.interval,
        cfg.destination,
        cfg.index
    );

    loop {
        match cycle(cfg, &sink).await {
            Ok(indexed) => info!("Indexed {} slots. Sleeping for {:?}", indexed, cfg.interval),
            Err(CycleError::Parse(e)) => {
                error!("Report format drifted, giving up: {e}");
                return Err(e.into());
            }
            Err(e) => error!("Poll cycle failed, retrying next interval: {e}"),
        }
        tokio::time::sleep(cfg.interval).await;
    }
}

/// One poll cycle: execute MegaCli, parse the report, index each record in
/// order. Returns the number of documents indexed.
async fn cycle(cfg: &Config, sink: &EsSink) -> Result<usize, CycleError> {
    let report = megacli::run_pdlist(&cfg.cli_path).await?;
    let records = parser::parse_report(&report)?;

    for record in &records {
        sink.index_record(record).await?;
    }

    Ok(records.len())
}
