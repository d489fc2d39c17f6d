use crate::config::ExtractConfig;
use crate::error::{IpcError, IpcResult};
use crate::lines::split_lines;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use strum::{Display, EnumString};
use tracing::debug;

/// Shape of the number pulled off the marker line.
#[derive(Debug, Clone, Copy, Default, EnumString, Display, PartialEq, Eq, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MetricPattern {
    /// Digit, any single character, digits. Historical behavior.
    #[default]
    Legacy,
    /// Digits, a literal dot, digits.
    Decimal,
}

impl MetricPattern {
    pub fn as_regex(&self) -> &'static str {
        match self {
            Self::Legacy => r"\d.\d+",
            Self::Decimal => r"\d+\.\d+",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Extractor {
    marker: String,
    number: Regex,
}

impl Extractor {
    pub fn new(marker: impl Into<String>, pattern: MetricPattern) -> IpcResult<Self> {
        let marker = marker.into();
        if marker.is_empty() {
            return Err(IpcError::Config("marker must not be empty".to_string()));
        }
        let number = Regex::new(pattern.as_regex())
            .map_err(|e| IpcError::Config(format!("bad metric pattern: {}", e)))?;
        Ok(Self { marker, number })
    }

    pub fn from_config(cfg: &ExtractConfig) -> IpcResult<Self> {
        Self::new(cfg.marker.clone(), cfg.pattern)
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Parses the first numeric token of an already-identified marker line.
    pub fn parse_line(&self, line: &str, line_no: usize, source: &Path) -> IpcResult<f64> {
        let m = self.number.find(line).ok_or_else(|| IpcError::NoNumber {
            path: source.to_path_buf(),
            line_no,
            line: line.to_string(),
        })?;

        m.as_str()
            .parse::<f64>()
            .map_err(|_| IpcError::MalformedMetric {
                path: source.to_path_buf(),
                line_no,
                text: m.as_str().to_string(),
            })
    }

    /// Returns `None` when no line carries the marker. Stops at the first marker line.
    pub fn scan<R: Read>(&self, mut reader: R, source: &Path) -> IpcResult<Option<f64>> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .map_err(|e| IpcError::io(source, e))?;

        for (idx, line) in split_lines(&content).into_iter().enumerate() {
            if line.contains(self.marker.as_str()) {
                let value = self.parse_line(line, idx + 1, source)?;
                debug!("{}:{} -> {}", source.display(), idx + 1, value);
                return Ok(Some(value));
            }
        }
        Ok(None)
    }

    /// Opens, scans and releases one result file.
    pub fn extract_file(&self, path: &Path) -> IpcResult<Option<f64>> {
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => IpcError::MissingResult {
                path: path.to_path_buf(),
            },
            _ => IpcError::io(path, e),
        })?;
        self.scan(file, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::str::FromStr;

    fn legacy() -> Extractor {
        Extractor::new("CPU 0 cumulative IPC", MetricPattern::Legacy).unwrap()
    }

    #[test]
    fn pattern_names_round_trip_through_strum() {
        assert_eq!(MetricPattern::from_str("decimal").unwrap(), MetricPattern::Decimal);
        assert_eq!(MetricPattern::Legacy.to_string(), "legacy");
        assert!(MetricPattern::from_str("fuzzy").is_err());
    }

    #[test]
    fn empty_marker_is_a_config_error() {
        let err = Extractor::new("", MetricPattern::Legacy).unwrap_err();
        assert!(matches!(err, IpcError::Config(_)));
    }

    #[test]
    fn only_first_marker_line_counts() {
        let log = "warmup\nCPU 0 cumulative IPC: 0.5\nCPU 0 cumulative IPC: 9.9\n";
        let v = legacy()
            .scan(Cursor::new(log), Path::new("mem"))
            .unwrap();
        assert_eq!(v, Some(0.5));
    }

    #[test]
    fn legacy_pattern_accepts_any_separator_then_fails_to_parse() {
        let log = "CPU 0 cumulative IPC: 1x5\n";
        let err = legacy()
            .scan(Cursor::new(log), Path::new("mem"))
            .unwrap_err();
        match err {
            IpcError::MalformedMetric { line_no, text, .. } => {
                assert_eq!(line_no, 1);
                assert_eq!(text, "1x5");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn line_numbers_count_every_line_break() {
        let log = "warmup\rstats\x0cCPU 0 cumulative IPC: nan\n";
        match legacy().scan(Cursor::new(log), Path::new("mem")).unwrap_err() {
            IpcError::NoNumber { line_no, line, .. } => {
                assert_eq!(line_no, 3);
                assert_eq!(line, "CPU 0 cumulative IPC: nan");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn decimal_pattern_keeps_multi_digit_integer_part() {
        let line = "CPU 0 cumulative IPC: 12.5 instructions: 100";
        let src = Path::new("mem");
        assert_eq!(legacy().parse_line(line, 1, src).unwrap(), 2.5);
        let strict = Extractor::new("CPU 0 cumulative IPC", MetricPattern::Decimal).unwrap();
        assert_eq!(strict.parse_line(line, 1, src).unwrap(), 12.5);
    }
}
