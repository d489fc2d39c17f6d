use crate::collect::{MissingMarkerPolicy, MissingResultPolicy};
use crate::error::{IpcError, IpcResult};
use crate::extract::MetricPattern;
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_MARKER: &str = "CPU 0 cumulative IPC";
pub const DEFAULT_TRACE_DIR: &str = "dpc3_traces";
pub const DEFAULT_TRACE_FILE: &str = "dpc3_all_simpoint.txt";
pub const RESULTS_SUBDIR: &str = "results";
pub const OUTPUT_FILE: &str = "ipc.csv";

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    #[command(flatten)]
    pub paths: PathConfig,
    #[command(flatten)]
    pub extract: ExtractConfig,
    #[command(flatten)]
    pub policy: PolicyConfig,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct PathConfig {
    /// Simulator checkout; results live under `<root>/results` unless overridden.
    #[arg(long, default_value = ".")]
    pub root_dir: PathBuf,
    #[arg(long)]
    pub results_dir: Option<PathBuf>,
    #[arg(long, default_value = DEFAULT_TRACE_DIR)]
    pub trace_dir: PathBuf,
    #[arg(long, default_value = DEFAULT_TRACE_FILE)]
    pub trace_file: String,
    /// CSV destination, defaults to `<results>/ipc.csv`.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            root_dir: PathBuf::from("."),
            results_dir: None,
            trace_dir: PathBuf::from(DEFAULT_TRACE_DIR),
            trace_file: DEFAULT_TRACE_FILE.to_string(),
            output: None,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ExtractConfig {
    #[arg(long, default_value = DEFAULT_MARKER)]
    pub marker: String,
    #[arg(long, default_value_t = MetricPattern::Legacy)]
    pub pattern: MetricPattern,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            pattern: MetricPattern::Legacy,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct PolicyConfig {
    #[arg(long, default_value_t = MissingResultPolicy::Abort)]
    pub on_missing_result: MissingResultPolicy,
    #[arg(long, default_value_t = MissingMarkerPolicy::Zero)]
    pub on_missing_marker: MissingMarkerPolicy,
}

impl PathConfig {
    pub fn results_dir(&self) -> PathBuf {
        match &self.results_dir {
            Some(dir) => dir.clone(),
            None => self.root_dir.join(RESULTS_SUBDIR),
        }
    }

    pub fn trace_list_path(&self) -> PathBuf {
        self.trace_dir.join(&self.trace_file)
    }

    /// `<results>/<configuration>-<benchmark>.txt`
    pub fn result_path(&self, configuration: &str, benchmark: &str) -> PathBuf {
        self.results_dir()
            .join(format!("{}-{}.txt", configuration, benchmark))
    }

    pub fn output_path(&self) -> PathBuf {
        match &self.output {
            Some(path) => path.clone(),
            None => self.results_dir().join(OUTPUT_FILE),
        }
    }
}

impl Config {
    /// Points every path at `dir`: results and the benchmark list both live there.
    pub fn rooted_at<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        let mut config = Self::default();
        config.paths.root_dir = dir.to_path_buf();
        config.paths.results_dir = Some(dir.to_path_buf());
        config.paths.trace_dir = dir.to_path_buf();
        config
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> IpcResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| IpcError::io(path, e))?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Overlays only the flags the user actually typed, so file values beat clap defaults.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($group:ident . $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$group.$field = cli.$group.$field.clone();
                }
            };
        }

        update_if_present!(paths.root_dir);
        update_if_present!(paths.results_dir);
        update_if_present!(paths.trace_dir);
        update_if_present!(paths.trace_file);
        update_if_present!(paths.output);

        update_if_present!(extract.marker);
        update_if_present!(extract.pattern);

        update_if_present!(policy.on_missing_result);
        update_if_present!(policy.on_missing_marker);
    }
}
