use crate::reports;
use clap::Args;
use ipcforge::collect::Collector;
use ipcforge::config::Config;
use ipcforge::error::{IpcError, IpcResult};
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct CollectArgs {
    #[command(flatten)]
    pub config: Config,

    /// Configuration the terminal report measures speedups against
    #[arg(short, long)]
    pub baseline: Option<String>,

    /// Configuration names, one output column each, in column order
    #[arg(value_name = "CONFIG")]
    pub configurations: Vec<String>,
}

/// Column of `--baseline`, checked before any output file is touched.
fn baseline_column(configurations: &[String], baseline: Option<&str>) -> IpcResult<Option<usize>> {
    let Some(name) = baseline else {
        return Ok(None);
    };
    configurations
        .iter()
        .position(|c| c == name)
        .map(Some)
        .ok_or_else(|| {
            IpcError::Config(format!("baseline '{}' is not a listed configuration", name))
        })
}

pub fn run(args: &CollectArgs, config: &Config) -> IpcResult<()> {
    let baseline = baseline_column(&args.configurations, args.baseline.as_deref())?;

    let collector = Collector::new(config)?;
    info!(
        "🚀 Collecting IPC for {} configuration(s) from '{}'",
        args.configurations.len(),
        collector.paths().results_dir().display()
    );

    let table = collector.run(&args.configurations)?;
    reports::print_ipc_report(&table, baseline);
    Ok(())
}
