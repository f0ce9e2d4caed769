use crate::error::Result;
use crate::figure::{Figure, Panel};
use crate::spec::{Annotation, ChartSpec, LegendPosition, TickFormat, ValueFormat};
use crate::style::{SeriesStyle, BASELINE_GRAYS, SNOWFLAKE_BLUE, SNOWFLAKE_MIDNIGHT};
use crate::table::BenchmarkTable;

const NAN: f64 = f64::NAN;

const BENCHMARKS: [&str; 2] = ["AgenticSQL", "SWE-Bench"];

const BASELINES: [&str; 8] = [
    "Vanilla",
    "Eagle",
    "Eagle 2",
    "Eagle 3",
    "PLD",
    "Token Recycling",
    "SuffixDecoding",
    "SuffixDecoding (Hybrid)",
];

const SUFFIX: usize = 6;
const HYBRID: usize = 7;

// Suffix and Hybrid columns hold the better of the linear and tree variants.
// SWE-Bench has no EAGLE or hybrid runs.
const SPEEDUP: [[f64; 8]; 2] = [
    [1.0, 1.595, 1.864, 1.623, 2.105, 2.710, 5.345, 4.068],
    [1.0, NAN, NAN, NAN, 1.495, 1.358, 2.452, NAN],
];

const MEAN_ACCEPTED: [[f64; 8]; 2] = [
    [1.000, 2.851, 3.572, 3.160, 2.373, 3.169, 6.349, 7.500],
    [1.000, NAN, NAN, NAN, 3.168, 3.054, 7.821, NAN],
];

fn table(data: &[[f64; 8]; 2]) -> BenchmarkTable {
    BENCHMARKS
        .iter()
        .zip(data)
        .fold(BenchmarkTable::new(), |t, (name, row)| t.row(*name, *row))
}

fn styles(star_suffix: bool) -> Vec<SeriesStyle> {
    BASELINES
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let color = match i {
                SUFFIX => SNOWFLAKE_BLUE,
                HYBRID => SNOWFLAKE_MIDNIGHT,
                _ => BASELINE_GRAYS[i],
            };
            let style = SeriesStyle::new(*label, color);
            match i {
                SUFFIX if star_suffix => style.emphasized().with_prefix("★ "),
                SUFFIX | HYBRID => style.emphasized(),
                _ => style,
            }
        })
        .collect()
}

fn spec(title: &str, y_label: &str, y_limit: f64) -> ChartSpec {
    // Eight bars per group, groups one unit apart.
    ChartSpec::new(title, y_label)
        .with_size(2400, 750)
        .with_y_limit(y_limit)
        .with_bars(0.09, 1.0 - 8.0 * 0.09)
        .with_legend(LegendPosition::UpperRight)
}

pub(super) fn figures() -> Result<Vec<(String, Figure)>> {
    let speedup = Panel::new(
        table(&SPEEDUP),
        styles(true),
        spec("Speculative Speedups over Vanilla Decoding", "Speedup", 6.0)
            .with_tick_format(TickFormat::Percent)
            .with_annotation(Annotation::RelativeTo {
                baseline: 0,
                inverse: false,
                format: ValueFormat::times(1),
            }),
    );

    let tokens = Panel::new(
        table(&MEAN_ACCEPTED),
        styles(false),
        spec(
            "Mean Accepted Tokens per Step",
            "Mean Accepted Tokens (tokens/step)",
            9.0,
        )
        .with_annotation(Annotation::Value(ValueFormat::fixed(1))),
    );

    Ok(vec![
        ("speedup_comparison.png".into(), Figure::single(speedup)),
        ("tokens_comparison.png".into(), Figure::single(tokens)),
    ])
}
