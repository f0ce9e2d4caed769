//! Time-per-output-token charts at spec_len = 32.

use plotters::style::RGBColor;

use crate::error::Result;
use crate::figure::{Figure, Panel};
use crate::spec::{Annotation, ChartSpec, ValueFormat};
use crate::style::{SeriesStyle, SNOWFLAKE_BLUE, SNOWFLAKE_MIDNIGHT, SNOWFLAKE_ORANGE};
use crate::table::BenchmarkTable;

const CONCURRENCY: [&str; 4] = ["1", "4", "16", "64"];

const VANILLA: RGBColor = SNOWFLAKE_ORANGE;
const NGRAM: RGBColor = SNOWFLAKE_MIDNIGHT;
const SUFFIX: RGBColor = SNOWFLAKE_BLUE;

struct Series {
    label: &'static str,
    color: RGBColor,
    tpot_ms: [f64; 4],
}

const fn s(label: &'static str, color: RGBColor, tpot_ms: [f64; 4]) -> Series {
    Series {
        label,
        color,
        tpot_ms,
    }
}

/// One bar chart with groups one unit apart, as in the blog posts.
fn chart(title: &str, y_limit: f64, series: &[Series]) -> Result<Figure> {
    let bar_width = if series.len() == 2 { 0.35 } else { 0.25 };
    let values: Vec<[f64; 4]> = series.iter().map(|s| s.tpot_ms).collect();
    let table = BenchmarkTable::from_series(&CONCURRENCY, &values)?;
    let styles = series
        .iter()
        .map(|s| SeriesStyle::new(s.label, s.color).emphasized())
        .collect();
    let spec = ChartSpec::new(title, "TPOT (ms)")
        .with_x_label("Concurrency Level")
        .with_y_limit(y_limit)
        .with_bars(bar_width, 1.0 - series.len() as f64 * bar_width)
        .with_annotation(Annotation::Value(ValueFormat::fixed(2)));
    Ok(Figure::single(Panel::new(table, styles, spec)))
}

pub(super) fn suffix_vs_ngram() -> Result<Vec<(String, Figure)>> {
    const SUFFIX_55: [f64; 4] = [4.28, 4.73, 6.17, 12.27];
    const NGRAM_55: [f64; 4] = [5.37, 5.73, 6.87, 11.76];
    const SUFFIX_SPEC_BENCH: [f64; 4] = [4.39, 4.63, 5.82, 10.67];
    const NGRAM_SPEC_BENCH: [f64; 4] = [5.18, 5.52, 6.87, 13.37];
    const SUFFIX_BLAZEDIT: [f64; 4] = [1.82, 2.01, 2.88, 5.63];
    const NGRAM_BLAZEDIT: [f64; 4] = [1.86, 2.22, 3.33, 8.13];
    const VANILLA_SPEC_BENCH: [f64; 4] = [5.56, 5.82, 6.72, 10.42];
    const VANILLA_BLAZEDIT: [f64; 4] = [5.65, 6.01, 7.46, 11.14];

    Ok(vec![
        (
            "suffix_vs_ngram_comparison.png".into(),
            chart(
                "Time per Output Token Comparison: Suffix and N-gram",
                14.0,
                &[s("N-gram", NGRAM, NGRAM_55), s("Suffix", SUFFIX, SUFFIX_55)],
            )?,
        ),
        (
            "suffix_vs_ngram35_comparison.png".into(),
            chart(
                "Time per Output Token Comparison: Suffix and N-gram",
                15.0,
                &[
                    s("N-gram", NGRAM, NGRAM_SPEC_BENCH),
                    s("Suffix", SUFFIX, SUFFIX_SPEC_BENCH),
                ],
            )?,
        ),
        (
            "suffix_vs_ngram35_blazedit_comparison.png".into(),
            chart(
                "Time per Output Token Comparison: Suffix and N-gram (blazedit)",
                9.0,
                &[
                    s("N-gram", NGRAM, NGRAM_BLAZEDIT),
                    s("Suffix", SUFFIX, SUFFIX_BLAZEDIT),
                ],
            )?,
        ),
        (
            "suffix_vs_ngram35_vs_vanilla_comparison.png".into(),
            chart(
                "Time per Output Token Comparison: spec-bench",
                15.0,
                &[
                    s("Vanilla", VANILLA, VANILLA_SPEC_BENCH),
                    s("N-gram", NGRAM, NGRAM_SPEC_BENCH),
                    s("Suffix", SUFFIX, SUFFIX_SPEC_BENCH),
                ],
            )?,
        ),
        (
            "suffix_vs_ngram35_vs_vanilla_blazedit_comparison.png".into(),
            chart(
                "Time per Output Token Comparison: blazedit",
                12.0,
                &[
                    s("Vanilla", VANILLA, VANILLA_BLAZEDIT),
                    s("N-gram", NGRAM, NGRAM_BLAZEDIT),
                    s("Suffix", SUFFIX, SUFFIX_BLAZEDIT),
                ],
            )?,
        ),
    ])
}

pub(super) fn ngram_comparison() -> Result<Vec<(String, Figure)>> {
    const OLD_SUFFIX: [f64; 4] = [4.46, 4.78, 6.23, 12.11];
    const OLD_NGRAM: [f64; 4] = [5.37, 5.73, 6.87, 11.76];
    const SUFFIX_SPEC_BENCH: [f64; 4] = [4.43, 4.70, 5.92, 10.96];
    const NGRAM35_SPEC_BENCH: [f64; 4] = [5.21, 5.49, 6.80, 13.14];
    const NGRAM55_SPEC_BENCH: [f64; 4] = [5.63, 5.83, 6.91, 11.57];
    const SUFFIX_BLAZEDIT: [f64; 4] = [1.71, 1.92, 2.86, 6.06];
    const NGRAM35_BLAZEDIT: [f64; 4] = [1.86, 2.16, 3.40, 7.99];
    const NGRAM55_BLAZEDIT: [f64; 4] = [2.17, 2.50, 3.59, 7.42];

    // N-gram [5,5] takes the orange slot here; there is no vanilla series.
    const NGRAM55: RGBColor = SNOWFLAKE_ORANGE;

    Ok(vec![
        (
            "old_suffix_vs_ngram.png".into(),
            chart(
                "TPOT Comparison: Suffix (unoptimized) and N-gram, Spec-Bench dataset",
                14.0,
                &[
                    s("N-gram", NGRAM, OLD_NGRAM),
                    s("Suffix (unoptimized)", SUFFIX, OLD_SUFFIX),
                ],
            )?,
        ),
        (
            "new_suffix_vs_ngram_specbench.png".into(),
            chart(
                "TPOT Comparison: Suffix and N-gram, Spec-Bench dataset",
                15.0,
                &[
                    s("N-gram [3,5]", NGRAM, NGRAM35_SPEC_BENCH),
                    s("N-gram [5,5]", NGRAM55, NGRAM55_SPEC_BENCH),
                    s("Suffix", SUFFIX, SUFFIX_SPEC_BENCH),
                ],
            )?,
        ),
        (
            "new_suffix_vs_ngram_blazedit.png".into(),
            chart(
                "TPOT Comparison: Suffix and N-gram, Blazedit dataset",
                9.0,
                &[
                    s("N-gram [3,5]", NGRAM, NGRAM35_BLAZEDIT),
                    s("N-gram [5,5]", NGRAM55, NGRAM55_BLAZEDIT),
                    s("Suffix", SUFFIX, SUFFIX_BLAZEDIT),
                ],
            )?,
        ),
    ])
}

pub(super) fn vanilla_comparison() -> Result<Vec<(String, Figure)>> {
    const VANILLA_SPEC_BENCH: [f64; 4] = [5.56, 5.82, 6.72, 10.42];
    const SUFFIX_SPEC_BENCH: [f64; 4] = [4.39, 4.63, 5.82, 10.67];
    const NGRAM_SPEC_BENCH: [f64; 4] = [5.18, 5.52, 6.87, 13.37];
    const VANILLA_BLAZEDIT: [f64; 4] = [5.65, 6.01, 7.46, 11.14];
    const SUFFIX_BLAZEDIT: [f64; 4] = [1.82, 2.01, 2.88, 5.63];
    const NGRAM_BLAZEDIT: [f64; 4] = [1.86, 2.22, 3.33, 8.13];

    Ok(vec![
        (
            "suffix_vs_vanilla_comparison.png".into(),
            chart(
                "Time per Output Token Comparison: spec-bench",
                15.0,
                &[
                    s("Vanilla", VANILLA, VANILLA_SPEC_BENCH),
                    s("N-gram", NGRAM, NGRAM_SPEC_BENCH),
                    s("Suffix", SUFFIX, SUFFIX_SPEC_BENCH),
                ],
            )?,
        ),
        (
            "suffix_vs_vanilla_blazedit_comparison.png".into(),
            chart(
                "Time per Output Token Comparison: blazedit",
                12.0,
                &[
                    s("Vanilla", VANILLA, VANILLA_BLAZEDIT),
                    s("N-gram", NGRAM, NGRAM_BLAZEDIT),
                    s("Suffix", SUFFIX, SUFFIX_BLAZEDIT),
                ],
            )?,
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{self, Mark};

    #[test]
    fn groups_sit_one_unit_apart() {
        let figures = suffix_vs_ngram().unwrap();
        for (file, figure) in &figures {
            let panel = &figure.panels[0];
            let plan =
                layout::plan(&panel.table, &panel.styles, &panel.spec, panel.reveal_count).unwrap();
            let centers: Vec<f64> = plan.groups.iter().map(|g| g.center).collect();
            for (i, c) in centers.iter().enumerate() {
                assert!((c - i as f64).abs() < 1e-9, "{file}: group {i} at {c}");
            }
        }
    }

    #[test]
    fn fixed_limits_cover_every_bar() {
        let all = [suffix_vs_ngram(), ngram_comparison(), vanilla_comparison()];
        for figures in all {
            for (file, figure) in figures.unwrap() {
                let panel = &figure.panels[0];
                let limit = panel.spec.y_limit.unwrap();
                assert!(panel.table.max_finite().unwrap() <= limit, "{file} clips");
            }
        }
    }

    #[test]
    fn spec_bench_three_way_annotations() {
        let figures = vanilla_comparison().unwrap();
        let panel = &figures[0].1.panels[0];
        let plan = layout::plan(&panel.table, &panel.styles, &panel.spec, 3).unwrap();
        let texts: Vec<String> = plan.groups[0]
            .marks
            .iter()
            .filter_map(|m| match m {
                Mark::Bar {
                    annotation: Some(a),
                    ..
                } => Some(a.text.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, ["5.56", "5.18", "4.39"]);
    }
}
