use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use ipcforge::collect::{Probe, ProbeReport};
use ipcforge::config::PolicyConfig;
use ipcforge::table::{format_cell, IpcTable};

fn new_table(configs: &[String]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![Cell::new("Benchmark").add_attribute(Attribute::Bold)];
    header.extend(configs.iter().map(|c| Cell::new(c).fg(Color::Cyan)));
    table.set_header(header);

    for i in 1..=configs.len() {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
    table
}

fn summary_cell(v: Option<f64>) -> Cell {
    match v {
        Some(v) => Cell::new(format!("{:.4}", v)).add_attribute(Attribute::Bold),
        None => Cell::new("-"),
    }
}

pub fn print_ipc_report(ipc: &IpcTable, baseline: Option<usize>) {
    let mut table = new_table(&ipc.configs);

    for row in &ipc.rows {
        let mut cells = vec![Cell::new(&row.benchmark)];
        cells.extend(row.cells.iter().map(|c| match c {
            Some(v) if *v == 0.0 => Cell::new(format_cell(*c)).fg(Color::Yellow),
            Some(_) => Cell::new(format_cell(*c)),
            None => Cell::new("skipped").fg(Color::Red),
        }));
        table.add_row(cells);
    }

    let mut geo = vec![Cell::new("geomean").add_attribute(Attribute::Bold)];
    geo.extend((0..ipc.configs.len()).map(|i| summary_cell(ipc.geomean(i))));
    table.add_row(geo);

    if let Some(base) = baseline {
        let label = format!("speedup vs {}", ipc.configs[base]);
        let mut speedup = vec![Cell::new(label).add_attribute(Attribute::Bold)];
        speedup.extend(ipc.speedup(base).into_iter().map(|s| match s {
            Some(s) if s > 1.0 => summary_cell(Some(s)).fg(Color::Green),
            Some(s) if s < 1.0 => summary_cell(Some(s)).fg(Color::Red),
            other => summary_cell(other),
        }));
        table.add_row(speedup);
    }

    println!("\n{}", table);
}

pub fn print_probe_report(report: &ProbeReport, policy: &PolicyConfig) {
    let mut table = new_table(&report.configs);
    let mut failures = Vec::new();

    for (benchmark, probes) in &report.rows {
        let mut cells = vec![Cell::new(benchmark)];
        for (cfg, probe) in report.configs.iter().zip(probes) {
            let color = match probe {
                Probe::Value(_) => Color::Green,
                _ if probe.would_abort(policy) => Color::Red,
                _ => Color::Yellow,
            };
            if let Probe::Malformed(msg) | Probe::Unreadable(msg) = probe {
                failures.push(format!("{}-{}: {}", cfg, benchmark, msg));
            }
            cells.push(Cell::new(probe.label()).fg(color));
        }
        table.add_row(cells);
    }

    println!("\n{}", table);

    if !failures.is_empty() {
        println!("\nUnreadable results:");
        for f in failures {
            println!("  {}", f);
        }
    }
}
