/// A cell is `None` only when the pair was skipped under `MissingResultPolicy::Skip`.
pub type Cell = Option<f64>;

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub benchmark: String,
    pub cells: Vec<Cell>,
}

/// Every row that reached the CSV, in write order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IpcTable {
    pub configs: Vec<String>,
    pub rows: Vec<Row>,
}

/// Shortest text that round-trips the value; integral values keep their `.0`.
/// Exponent form (below 1e-4, from 1e16) carries a sign and at least two digits: `1e-05`.
pub fn format_metric(value: f64) -> String {
    let text = format!("{:?}", value);
    match text.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(d) => ('-', d),
                None => ('+', exp),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => text,
    }
}

pub fn format_cell(cell: Cell) -> String {
    cell.map(format_metric).unwrap_or_default()
}

fn geomean<I: IntoIterator<Item = f64>>(values: I) -> Option<f64> {
    let mut log_sum = 0.0;
    let mut n = 0usize;
    for v in values {
        if v > 0.0 {
            log_sum += v.ln();
            n += 1;
        }
    }
    if n == 0 {
        None
    } else {
        Some((log_sum / n as f64).exp())
    }
}

impl IpcTable {
    pub fn new(configs: Vec<String>) -> Self {
        Self {
            configs,
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, benchmark: impl Into<String>, cells: Vec<Cell>) {
        self.rows.push(Row {
            benchmark: benchmark.into(),
            cells,
        });
    }

    pub fn column(&self, idx: usize) -> impl Iterator<Item = Cell> + '_ {
        self.rows
            .iter()
            .map(move |r| r.cells.get(idx).copied().flatten())
    }

    /// Geometric mean over the positive cells of one column.
    pub fn geomean(&self, idx: usize) -> Option<f64> {
        geomean(self.column(idx).flatten())
    }

    /// Per-column geomean of `cell / baseline_cell`, over rows where both are positive.
    pub fn speedup(&self, baseline: usize) -> Vec<Option<f64>> {
        (0..self.configs.len())
            .map(|idx| {
                geomean(self.rows.iter().filter_map(|r| {
                    let v = r.cells.get(idx).copied().flatten();
                    let b = r.cells.get(baseline).copied().flatten();
                    match (v, b) {
                        (Some(v), Some(b)) if v > 0.0 && b > 0.0 => Some(v / b),
                        _ => None,
                    }
                }))
            })
            .collect()
    }
}
