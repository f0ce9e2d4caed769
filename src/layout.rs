//! Chart geometry, computed without touching a drawing backend.
//!
//! Slots exist for every series whether revealed or not, so bar positions
//! depend only on the table shape and the spec, never on `reveal_count`.

use std::ops::Range;

use crate::error::{RenderError, Result};
use crate::spec::{ChartSpec, Layout};
use crate::style::SeriesStyle;
use crate::table::BenchmarkTable;

/// Marker height above the baseline, as a share of the y-range.
const MARKER_LIFT: f64 = 0.03;
/// Gap between a bar top and its annotation, as a share of the y-range.
const ANNOTATION_LIFT: f64 = 0.015;
const STAR: &str = "★ ";

#[derive(Debug, Clone, PartialEq)]
pub enum Mark {
    Bar {
        series: usize,
        left: f64,
        right: f64,
        height: f64,
        annotation: Option<Label>,
    },
    Missing {
        series: usize,
        x: f64,
        y: f64,
    },
}

impl Mark {
    pub fn series(&self) -> usize {
        match self {
            Mark::Bar { series, .. } | Mark::Missing { series, .. } => *series,
        }
    }

    /// Horizontal center of the mark.
    pub fn x(&self) -> f64 {
        match self {
            Mark::Bar { left, right, .. } => (left + right) / 2.0,
            Mark::Missing { x, .. } => *x,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub bold: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupPlan {
    pub label: String,
    pub center: f64,
    pub marks: Vec<Mark>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPlan {
    pub groups: Vec<GroupPlan>,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    /// Series indices that get a legend entry, in order.
    pub legend: Vec<usize>,
}

impl ChartPlan {
    pub fn bars(&self) -> impl Iterator<Item = &Mark> {
        self.marks().filter(|m| matches!(m, Mark::Bar { .. }))
    }

    pub fn missing(&self) -> impl Iterator<Item = &Mark> {
        self.marks().filter(|m| matches!(m, Mark::Missing { .. }))
    }

    pub fn marks(&self) -> impl Iterator<Item = &Mark> {
        self.groups.iter().flat_map(|g| g.marks.iter())
    }
}

/// Validates the inputs of one chart.
pub fn validate(
    table: &BenchmarkTable,
    styles: &[SeriesStyle],
    reveal_count: usize,
) -> Result<()> {
    table.check_width(styles.len())?;
    if reveal_count > styles.len() {
        return Err(RenderError::InvalidRange {
            reveal_count,
            series: styles.len(),
        });
    }
    Ok(())
}

/// Center of the bar of `series` in group `group`, out of `series_count`.
pub fn slot_center(spec: &ChartSpec, series_count: usize, group: usize, series: usize) -> f64 {
    let pitch = series_count as f64 * spec.bar_width + spec.group_gap;
    let anchor = group as f64 * pitch;
    match spec.layout {
        Layout::Leading => anchor + series as f64 * spec.bar_width,
        Layout::Centered => {
            anchor + (series as f64 - (series_count as f64 - 1.0) / 2.0) * spec.bar_width
        }
    }
}

pub fn y_range(table: &BenchmarkTable, spec: &ChartSpec) -> Range<f64> {
    let top = spec
        .y_limit
        .unwrap_or_else(|| table.max_finite().map_or(1.0, |m| m * spec.headroom));
    let top = if top.is_finite() && top > 0.0 { top } else { 1.0 };
    0.0..top
}

pub fn plan(
    table: &BenchmarkTable,
    styles: &[SeriesStyle],
    spec: &ChartSpec,
    reveal_count: usize,
) -> Result<ChartPlan> {
    validate(table, styles, reveal_count)?;

    let n = styles.len();
    let y_range = y_range(table, spec);
    let span = y_range.end - y_range.start;
    let baseline = spec.annotation.baseline();

    let starred = if spec.star_maximum {
        largest_revealed(table, reveal_count)
    } else {
        None
    };

    let mut groups = Vec::with_capacity(table.len());
    for (g, row) in table.rows().iter().enumerate() {
        let base_value = baseline.and_then(|b| row.cells.get(b)).and_then(|c| c.value());
        let mut marks = Vec::with_capacity(reveal_count);

        for (i, (cell, style)) in row.cells.iter().zip(styles).enumerate().take(reveal_count) {
            let x = slot_center(spec, n, g, i);
            match cell.value() {
                None => marks.push(Mark::Missing {
                    series: i,
                    x,
                    y: y_range.start + span * MARKER_LIFT,
                }),
                Some(v) => {
                    let annotation = spec.annotation.text(v, base_value).map(|text| {
                        let mut prefix = String::new();
                        if starred == Some((g, i)) {
                            prefix.push_str(STAR);
                        }
                        if let Some(p) = &style.prefix {
                            prefix.push_str(p);
                        }
                        Label {
                            text: prefix + &text,
                            x,
                            y: v + span * ANNOTATION_LIFT,
                            bold: style.emphasis,
                        }
                    });
                    marks.push(Mark::Bar {
                        series: i,
                        left: x - spec.bar_width / 2.0,
                        right: x + spec.bar_width / 2.0,
                        height: v,
                        annotation,
                    });
                }
            }
        }

        let first = slot_center(spec, n, g, 0);
        let last = slot_center(spec, n, g, n.saturating_sub(1));
        groups.push(GroupPlan {
            label: row.benchmark.clone(),
            center: (first + last) / 2.0,
            marks,
        });
    }

    let left = slot_center(spec, n, 0, 0) - spec.bar_width / 2.0 - spec.group_gap / 2.0;
    let right = slot_center(spec, n, table.len().saturating_sub(1), n.saturating_sub(1))
        + spec.bar_width / 2.0
        + spec.group_gap / 2.0;

    Ok(ChartPlan {
        groups,
        x_range: left..right,
        y_range,
        legend: (0..reveal_count).collect(),
    })
}

/// Position of the single largest present value among revealed series.
fn largest_revealed(table: &BenchmarkTable, reveal_count: usize) -> Option<(usize, usize)> {
    let mut best: Option<((usize, usize), f64)> = None;
    for (g, row) in table.rows().iter().enumerate() {
        for (i, cell) in row.cells.iter().enumerate().take(reveal_count) {
            if let Some(v) = cell.value() {
                if best.map_or(true, |(_, b)| v > b) {
                    best = Some(((g, i), v));
                }
            }
        }
    }
    best.map(|(pos, _)| pos)
}
