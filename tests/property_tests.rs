mod common;

use common::ResultsDir;
use ipcforge::collect::Collector;
use ipcforge::table::format_metric;
use proptest::prelude::*;

// --- STRATEGIES ---

prop_compose! {
    fn arb_names(max: usize)(
        names in proptest::collection::hash_set("[a-z][a-z0-9_]{0,7}", 0..max)
    ) -> Vec<String> {
        names.into_iter().collect()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn table_shape_follows_inputs(
        benchmarks in arb_names(6),
        configs in arb_names(4),
        ipc in 0.01..4.0f64,
    ) {
        let bench_refs: Vec<&str> = benchmarks.iter().map(String::as_str).collect();
        let mut fx = ResultsDir::new().benchmarks(&bench_refs);
        for c in &configs {
            for b in &benchmarks {
                fx = fx.result(c, b, &format!("{:.3}", ipc));
            }
        }

        let table = Collector::new(&fx.config()).unwrap().run(&configs).unwrap();
        let out = fx.read_output();
        let lines: Vec<&str> = out.lines().collect();

        prop_assert_eq!(lines.len(), benchmarks.len() + 1);
        prop_assert_eq!(table.rows.len(), benchmarks.len());
        for line in &lines {
            prop_assert_eq!(line.split(',').count(), configs.len() + 1);
        }
        let header: Vec<&str> = lines[0].split(',').skip(1).collect();
        let expected: Vec<&str> = configs.iter().map(String::as_str).collect();
        prop_assert_eq!(header, expected);
        for (line, bench) in lines.iter().skip(1).zip(&benchmarks) {
            prop_assert_eq!(line.split(',').next().unwrap(), bench.as_str());
        }
    }

    #[test]
    fn metric_text_round_trips(v in 0.001..100.0f64) {
        let text = format_metric(v);
        prop_assert_eq!(text.parse::<f64>().unwrap(), v);
        prop_assert!(text.contains('.'));
    }

    #[test]
    fn tiny_metric_text_has_two_digit_exponent(v in 1e-9..1e-4f64) {
        let text = format_metric(v);
        prop_assert_eq!(text.parse::<f64>().unwrap(), v);
        let (_, exp) = text.split_once("e-").unwrap();
        prop_assert_eq!(exp.len(), 2);
    }
}
