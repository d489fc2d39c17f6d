use crate::reports;
use clap::Args;
use ipcforge::collect::Collector;
use ipcforge::config::Config;
use ipcforge::error::IpcResult;
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    #[command(flatten)]
    pub config: Config,

    #[arg(value_name = "CONFIG")]
    pub configurations: Vec<String>,
}

/// `Ok(false)` when `collect` would abort under the current policies.
pub fn run(args: &CheckArgs, config: &Config) -> IpcResult<bool> {
    let collector = Collector::new(config)?;
    info!(
        "🔎 Probing result files in '{}'",
        collector.paths().results_dir().display()
    );

    let report = collector.probe_all(&args.configurations)?;
    reports::print_probe_report(&report, collector.policy());

    let blocking = report.blocking(collector.policy());
    if blocking > 0 {
        warn!("⚠️  {} pair(s) would abort a collect run", blocking);
        return Ok(false);
    }
    info!("✅ All pairs readable");
    Ok(true)
}
