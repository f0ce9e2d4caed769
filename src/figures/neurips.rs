//! Slide frames for the NeurIPS talk.
//!
//! Each sequence shares one set of y-limits so bars do not jump between
//! frames; later method groups are laid out but left undrawn until revealed.

use plotters::style::WHITE;

use crate::error::Result;
use crate::figure::{Figure, Panel};
use crate::spec::{Annotation, ChartSpec, Layout, LegendPosition, ValueFormat};
use crate::style::{SeriesStyle, Theme, NEUTRAL_GRAY, TAB10};
use crate::table::BenchmarkTable;

const NAN: f64 = f64::NAN;

// Columns: Vanilla, Eagle, Eagle 2, Eagle 3, PLD, Token Recycling,
// Suffix (linear), Suffix (tree), Hybrid (linear), Hybrid (tree).
const RAW_SPEEDUP: [(&str, [f64; 10]); 3] = [
    ("Spec-Bench", [1.0, 1.8, 1.8, 2.4, 1.4, 2.2, 1.7, 1.7, 2.5, 2.5]),
    ("AgenticSQL", [1.0, 1.6, 1.9, 1.6, 2.1, 2.7, 5.3, 5.2, 3.8, 4.1]),
    ("SWE-Bench", [1.0, NAN, NAN, NAN, 1.5, 1.4, 2.5, 2.4, NAN, NAN]),
];

const RAW_TOKENS: [(&str, [f64; 10]); 3] = [
    ("Spec-Bench", [1.0, 3.1, 3.5, 4.6, 1.6, 2.5, 1.8, 1.8, 4.6, 4.7]),
    ("AgenticSQL", [1.0, 2.9, 3.6, 3.2, 2.4, 3.2, 6.3, 6.2, 7.3, 7.5]),
    ("SWE-Bench", [1.0, NAN, NAN, NAN, 3.2, 3.1, 7.8, 7.6, NAN, NAN]),
];

const BENCH_ORDER: [(&str, &str); 3] = [
    ("AgenticSQL", "AgenticSQL"),
    ("SWE-Bench", "SWE-Bench"),
    ("Spec-Bench", "SpecBench"),
];

/// Method groups and the raw columns each one keeps the best of.
const GROUPS: [(&str, &[usize]); 5] = [
    ("Vanilla", &[0]),
    ("EAGLE-{1,2,3}", &[1, 2, 3]),
    ("Model-free", &[4, 5]),
    ("Suffix", &[6, 7]),
    ("Suffix (hybrid)", &[8, 9]),
];

/// Our own methods, highlighted on the final frame.
const OURS: [usize; 2] = [3, 4];

const HEADROOM: f64 = 1.12;
const PROGRESSIVE_SIZE: (u32, u32) = (2100, 1240);

fn reduced(raw: &[(&str, [f64; 10])]) -> Result<BenchmarkTable> {
    let table = raw
        .iter()
        .fold(BenchmarkTable::new(), |t, (name, row)| t.row(*name, *row));
    let groups: Vec<&[usize]> = GROUPS.iter().map(|(_, indices)| *indices).collect();
    table.reduce_groups(&groups)?.select(&BENCH_ORDER)
}

fn group_styles(highlight: bool) -> Vec<SeriesStyle> {
    let colors = [NEUTRAL_GRAY, TAB10[0], TAB10[1], TAB10[2], TAB10[3]];
    GROUPS
        .iter()
        .zip(colors)
        .enumerate()
        .map(|(i, ((label, _), color))| {
            let style = SeriesStyle::new(*label, color);
            if highlight && OURS.contains(&i) {
                style.emphasized()
            } else {
                style
            }
        })
        .collect()
}

fn slide_spec(title: &str, y_label: &str, y_limit: f64) -> ChartSpec {
    ChartSpec::new(title, y_label)
        .with_x_label("Benchmarks")
        .with_y_limit(y_limit)
        .with_layout(Layout::Leading)
        .with_bars(0.75 / GROUPS.len() as f64, 0.2)
        .with_edge(Some(WHITE))
        .with_legend(LegendPosition::UpperMiddle)
        .with_theme(Theme::poster())
}

pub(super) fn progressive() -> Result<Vec<(String, Figure)>> {
    let speedup = reduced(&RAW_SPEEDUP)?;
    let tokens = reduced(&RAW_TOKENS)?;

    // Limits come from the complete data so every frame shares them.
    let speedup_limit = speedup.max_finite().unwrap_or(1.0) * HEADROOM;
    let tokens_limit = tokens.max_finite().unwrap_or(1.0) * HEADROOM;

    let frames = GROUPS.len();
    (1..=frames)
        .map(|shown| {
            let last = shown == frames;
            let top = Panel::new(
                speedup.clone(),
                group_styles(last),
                slide_spec(
                    "Speculative Speedups over Vanilla Decoding",
                    "Speedup (×)",
                    speedup_limit,
                )
                .with_annotation(Annotation::Value(ValueFormat::times(1)))
                .with_star_maximum(last),
            )
            .revealing(shown);
            let bottom = Panel::new(
                tokens.clone(),
                group_styles(last),
                slide_spec(
                    "Mean Accepted Tokens per Step",
                    "Mean Accepted Tokens (tokens/step)",
                    tokens_limit,
                )
                .with_annotation(Annotation::Value(ValueFormat::fixed(1))),
            )
            .revealing(shown);

            Ok((
                format!("benchmark_progressive_{shown}of{frames}.png"),
                Figure::rows(PROGRESSIVE_SIZE, vec![top, bottom]),
            ))
        })
        .collect()
}

pub(super) fn tokens() -> Result<Vec<(String, Figure)>> {
    let table = BenchmarkTable::new()
        .row("Agentic workload\n(AgenticSQL)", [3.2, 6.3, 7.5])
        .row("Open ended workload\n(SpecBench)", [4.6, 1.8, 4.7]);
    let styles = vec![
        SeriesStyle::new("EAGLE-3", TAB10[0]),
        SeriesStyle::new("Suffix", TAB10[1]),
        SeriesStyle::new("Suffix (hybrid)", TAB10[2]),
    ];
    let y_limit = table.max_finite().unwrap_or(1.0) * 1.15;
    let spec = ChartSpec::new(
        "Mean Accepted Tokens per Step",
        "Mean Accepted Tokens (tokens/step)",
    )
    .with_size(1600, 1000)
    .with_y_limit(y_limit)
    .with_layout(Layout::Leading)
    .with_bars(0.25, 0.3)
    .with_edge(Some(WHITE))
    .with_annotation(Annotation::Value(ValueFormat::fixed(1)))
    .with_theme(Theme::poster());

    // EAGLE-3 and Suffix first, then the hybrid.
    Ok([2, 3]
        .into_iter()
        .enumerate()
        .map(|(i, shown)| {
            let panel = Panel::new(table.clone(), styles.clone(), spec.clone()).revealing(shown);
            (
                format!("simple_tokens_plot_{}of2.png", i + 1),
                Figure::single(panel),
            )
        })
        .collect())
}
