use crate::error::{IpcError, IpcResult};
use crate::lines::split_lines;
use std::fs;
use std::path::Path;
use tracing::info;

/// One identifier per line; line terminators are stripped, blank lines kept.
pub fn parse_benchmarks(content: &str) -> Vec<String> {
    split_lines(content).into_iter().map(str::to_string).collect()
}

pub fn load_benchmarks(path: &Path) -> IpcResult<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|e| IpcError::io(path, e))?;
    let benchmarks = parse_benchmarks(&content);
    info!(
        "📂 Loaded {} benchmarks from '{}'",
        benchmarks.len(),
        path.display()
    );
    Ok(benchmarks)
}
