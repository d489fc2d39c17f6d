use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use ipcforge::config::Config;
use ipcforge::error::IpcResult;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Collects per-run IPC from simulator logs into one CSV",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON settings file; flags typed on the command line still win.
    #[arg(global = true, long = "config")]
    config_file: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write the benchmark x configuration IPC table
    Collect(cmd::collect::CollectArgs),
    /// Probe every result file without writing anything
    Check(cmd::check::CheckArgs),
}

fn resolve_config(
    cli_config: &Config,
    config_file: Option<&str>,
    sub_matches: Option<&ArgMatches>,
) -> IpcResult<Config> {
    let Some(path) = config_file else {
        return Ok(cli_config.clone());
    };

    info!("⚙️  Loading settings from: {}", path);
    let mut config = Config::load_from_file(path)?;
    if let Some(m) = sub_matches {
        config.merge_from_cli(cli_config, m);
    }
    Ok(config)
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    let (cli_config, sub_matches) = match &cli.command {
        Commands::Collect(args) => (&args.config, matches.subcommand_matches("collect")),
        Commands::Check(args) => (&args.config, matches.subcommand_matches("check")),
    };

    let config = resolve_config(cli_config, cli.config_file.as_deref(), sub_matches)
        .unwrap_or_else(|e| {
            error!("❌ {}", e);
            process::exit(1);
        });

    let outcome = match &cli.command {
        Commands::Collect(args) => cmd::collect::run(args, &config).map(|_| true),
        Commands::Check(args) => cmd::check::run(args, &config),
    };

    match outcome {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            error!("❌ FATAL: {}", e);
            process::exit(1);
        }
    }
}
