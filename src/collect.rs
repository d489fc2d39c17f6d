use crate::config::{Config, PathConfig, PolicyConfig};
use crate::error::{IpcError, IpcResult};
use crate::extract::Extractor;
use crate::table::{format_cell, format_metric, Cell, IpcTable};
use crate::traces::load_benchmarks;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use strum::{Display, EnumString};
use tracing::{debug, info, warn};

/// What to do when `<results>/<configuration>-<benchmark>.txt` does not exist.
#[derive(Debug, Clone, Copy, Default, EnumString, Display, PartialEq, Eq, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MissingResultPolicy {
    /// Stop the run; rows already written stay in the output.
    #[default]
    Abort,
    /// Warn and leave the cell empty.
    Skip,
}

/// What to do when a result file exists but never prints the marker.
#[derive(Debug, Clone, Copy, Default, EnumString, Display, PartialEq, Eq, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MissingMarkerPolicy {
    #[default]
    Zero,
    Error,
}

/// Outcome of looking at one pair without committing to a policy.
#[derive(Debug, Clone, PartialEq)]
pub enum Probe {
    Value(f64),
    NoMarker,
    Missing,
    /// Marker line present but its number is absent or unparseable.
    Malformed(String),
    /// The file exists but could not be read.
    Unreadable(String),
}

impl Probe {
    pub fn would_abort(&self, policy: &PolicyConfig) -> bool {
        match self {
            Self::Value(_) => false,
            Self::NoMarker => policy.on_missing_marker == MissingMarkerPolicy::Error,
            Self::Missing => policy.on_missing_result == MissingResultPolicy::Abort,
            Self::Malformed(_) | Self::Unreadable(_) => true,
        }
    }

    pub fn label(&self) -> String {
        match self {
            Self::Value(v) => format_metric(*v),
            Self::NoMarker => "no marker".to_string(),
            Self::Missing => "missing".to_string(),
            Self::Malformed(_) => "malformed".to_string(),
            Self::Unreadable(_) => "error".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProbeReport {
    pub configs: Vec<String>,
    pub rows: Vec<(String, Vec<Probe>)>,
}

impl ProbeReport {
    pub fn blocking(&self, policy: &PolicyConfig) -> usize {
        self.rows
            .iter()
            .flat_map(|(_, probes)| probes.iter())
            .filter(|p| p.would_abort(policy))
            .count()
    }
}

/// One CSV line. A lone empty field is a bare newline rather than `""`.
fn encode_row<T: AsRef<[u8]>>(fields: &[T]) -> IpcResult<Vec<u8>> {
    if fields.len() == 1 && fields[0].as_ref().is_empty() {
        return Ok(b"\n".to_vec());
    }
    let mut wtr = csv::WriterBuilder::new().from_writer(Vec::new());
    wtr.write_record(fields)?;
    wtr.into_inner()
        .map_err(|e| IpcError::Csv(csv::Error::from(e.into_error())))
}

fn emit<W: Write>(out: &mut W, line: &[u8]) -> IpcResult<()> {
    out.write_all(line)
        .and_then(|_| out.flush())
        .map_err(|e| IpcError::Csv(csv::Error::from(e)))
}

pub struct Collector {
    paths: PathConfig,
    policy: PolicyConfig,
    extractor: Extractor,
}

impl Collector {
    pub fn new(config: &Config) -> IpcResult<Self> {
        Ok(Self {
            paths: config.paths.clone(),
            policy: config.policy.clone(),
            extractor: Extractor::from_config(&config.extract)?,
        })
    }

    pub fn paths(&self) -> &PathConfig {
        &self.paths
    }

    pub fn policy(&self) -> &PolicyConfig {
        &self.policy
    }

    /// Metric for one pair, with both failure policies applied.
    pub fn cell(&self, configuration: &str, benchmark: &str) -> IpcResult<Cell> {
        let path = self.paths.result_path(configuration, benchmark);
        match self.extractor.extract_file(&path) {
            Ok(Some(v)) => Ok(Some(v)),
            Ok(None) => match self.policy.on_missing_marker {
                MissingMarkerPolicy::Zero => {
                    debug!("No marker in '{}', using 0.0", path.display());
                    Ok(Some(0.0))
                }
                MissingMarkerPolicy::Error => Err(IpcError::MissingMarker { path }),
            },
            // Fail-fast vs skip-and-continue is decided here and nowhere else.
            Err(IpcError::MissingResult { path }) => match self.policy.on_missing_result {
                MissingResultPolicy::Abort => Err(IpcError::MissingResult { path }),
                MissingResultPolicy::Skip => {
                    warn!("⚠️  Skipping missing result file '{}'", path.display());
                    Ok(None)
                }
            },
            Err(e) => Err(e),
        }
    }

    /// Writes the header, then one flushed row per benchmark. On error the rows
    /// already written remain in `out`.
    pub fn write_table<W: Write>(
        &self,
        benchmarks: &[String],
        configs: &[String],
        mut out: W,
    ) -> IpcResult<IpcTable> {
        let mut header = Vec::with_capacity(configs.len() + 1);
        header.push("Benchmark");
        header.extend(configs.iter().map(String::as_str));
        emit(&mut out, &encode_row(&header)?)?;

        let mut table = IpcTable::new(configs.to_vec());
        for benchmark in benchmarks {
            let cells = configs
                .iter()
                .map(|cfg| self.cell(cfg, benchmark))
                .collect::<IpcResult<Vec<Cell>>>()?;

            let mut record = Vec::with_capacity(cells.len() + 1);
            record.push(benchmark.clone());
            record.extend(cells.iter().map(|c| format_cell(*c)));
            emit(&mut out, &encode_row(&record)?)?;

            debug!("Wrote row '{}'", benchmark);
            table.push(benchmark.clone(), cells);
        }

        Ok(table)
    }

    /// Loads the benchmark list, truncates the output file and fills it.
    pub fn run(&self, configs: &[String]) -> IpcResult<IpcTable> {
        let benchmarks = load_benchmarks(&self.paths.trace_list_path())?;

        let out_path = self.paths.output_path();
        let file = File::create(&out_path).map_err(|e| IpcError::io(&out_path, e))?;
        info!(
            "📝 Writing {} x {} table to '{}'",
            benchmarks.len(),
            configs.len(),
            out_path.display()
        );

        let table = self.write_table(&benchmarks, configs, file)?;
        info!("✅ Wrote {} rows", table.rows.len());
        Ok(table)
    }

    pub fn probe(&self, configuration: &str, benchmark: &str) -> Probe {
        let path = self.paths.result_path(configuration, benchmark);
        match self.extractor.extract_file(&path) {
            Ok(Some(v)) => Probe::Value(v),
            Ok(None) => Probe::NoMarker,
            Err(IpcError::MissingResult { .. }) => Probe::Missing,
            Err(e @ (IpcError::NoNumber { .. } | IpcError::MalformedMetric { .. })) => {
                Probe::Malformed(e.to_string())
            }
            Err(e) => Probe::Unreadable(e.to_string()),
        }
    }

    /// Probes every pair without writing anything.
    pub fn probe_all(&self, configs: &[String]) -> IpcResult<ProbeReport> {
        let benchmarks = load_benchmarks(&self.paths.trace_list_path())?;
        let rows = benchmarks
            .into_iter()
            .map(|b| {
                let probes = configs.iter().map(|c| self.probe(c, &b)).collect();
                (b, probes)
            })
            .collect();

        Ok(ProbeReport {
            configs: configs.to_vec(),
            rows,
        })
    }
}
