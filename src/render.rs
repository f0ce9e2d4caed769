//! The grouped bar renderer.
//!
//! [`draw_chart`] draws one chart onto any plotters drawing area, so figures
//! can compose several charts. [`render`] is the single-chart path that owns
//! a PNG backend for the duration of the call.

use std::fs;
use std::path::{Path, PathBuf};

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use tracing::{debug, info, warn};

use crate::error::{RenderError, Result};
use crate::layout::{self, ChartPlan, Mark};
use crate::spec::{ChartSpec, LegendPosition};
use crate::style::{SeriesStyle, Theme, MISSING_MARKER};
use crate::table::BenchmarkTable;

const MARGIN: u32 = 20;
const TICK_PAD: i32 = 10;
const EDGE_WIDTH: u32 = 2;

fn font(theme: &Theme, size: u32, bold: bool) -> FontDesc<'static> {
    let style = if bold {
        FontStyle::Bold
    } else {
        FontStyle::Normal
    };
    (theme.font_family, size).into_font().style(style)
}

/// Draws one grouped bar chart into `area` and returns the plan it drew.
pub fn draw_chart<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    table: &BenchmarkTable,
    styles: &[SeriesStyle],
    spec: &ChartSpec,
    reveal_count: usize,
) -> Result<ChartPlan> {
    let plan = layout::plan(table, styles, spec, reveal_count)?;
    debug!(
        title = %spec.title,
        benchmarks = table.len(),
        series = styles.len(),
        reveal_count,
        "drawing chart"
    );

    if let Some(limit) = spec.y_limit {
        if let Some(Mark::Bar { height, .. }) = plan
            .bars()
            .find(|m| matches!(m, Mark::Bar { height, .. } if *height > limit))
        {
            warn!(title = %spec.title, limit, value = *height, "bar exceeds fixed y-limit and will be clipped");
        }
    }

    let theme = &spec.theme;
    let label_lines = plan
        .groups
        .iter()
        .map(|g| g.label.lines().count())
        .max()
        .unwrap_or(1) as u32;
    let mut x_area = label_lines * (theme.tick_size + 4) + TICK_PAD as u32 * 2;
    if spec.x_label.is_some() {
        x_area += theme.axis_label_size + TICK_PAD as u32;
    }

    let mut builder = ChartBuilder::on(area);
    builder
        .margin(MARGIN)
        .x_label_area_size(x_area)
        .y_label_area_size(theme.tick_size * 3 + theme.axis_label_size);
    // Panels under a figure title leave their own caption empty.
    if !spec.title.is_empty() {
        builder.caption(
            spec.title.as_str(),
            font(theme, theme.title_size, theme.bold_labels),
        );
    }
    let mut chart = builder.build_cartesian_2d(plan.x_range.clone(), plan.y_range.clone())?;

    let no_x_labels = |_: &f64| String::new();
    let y_labels = |v: &f64| spec.format_tick(*v);
    let mut mesh = chart.configure_mesh();
    mesh.disable_x_mesh()
        .x_label_formatter(&no_x_labels)
        .y_labels(8)
        .y_label_formatter(&y_labels)
        .y_desc(spec.y_label.as_str())
        .label_style(font(theme, theme.tick_size, false))
        .axis_desc_style(font(theme, theme.axis_label_size, theme.bold_labels))
        .light_line_style(TRANSPARENT)
        .bold_line_style(BLACK.mix(0.15));
    if let Some(x_label) = &spec.x_label {
        mesh.x_desc(x_label.as_str());
    }
    mesh.draw()?;

    let marker_size = (theme.annotation_size / 2) as i32;
    for mark in plan.marks() {
        match mark {
            Mark::Bar {
                series,
                left,
                right,
                height,
                annotation,
            } => {
                let corners = [(*left, 0.0), (*right, *height)];
                chart.draw_series(std::iter::once(Rectangle::new(
                    corners,
                    styles[*series].color.filled(),
                )))?;
                if let Some(edge) = spec.edge {
                    chart.draw_series(std::iter::once(Rectangle::new(
                        corners,
                        edge.stroke_width(EDGE_WIDTH),
                    )))?;
                }
                if let Some(label) = annotation {
                    let size = if label.bold {
                        theme.annotation_size + 2
                    } else {
                        theme.annotation_size
                    };
                    chart.draw_series(std::iter::once(Text::new(
                        label.text.clone(),
                        (label.x, label.y),
                        font(theme, size, label.bold)
                            .color(&BLACK)
                            .pos(Pos::new(HPos::Center, VPos::Bottom)),
                    )))?;
                }
            }
            Mark::Missing { x, y, .. } => {
                chart.draw_series(std::iter::once(Cross::new(
                    (*x, *y),
                    marker_size,
                    MISSING_MARKER.stroke_width(4),
                )))?;
            }
        }
    }

    // Benchmark names go under the group centers; the mesh only knows
    // evenly spaced ticks.
    let (base_x, base_y) = area.get_base_pixel();
    let tick_style = font(theme, theme.tick_size, theme.bold_labels)
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Top));
    for group in &plan.groups {
        let (px, py) = chart.backend_coord(&(group.center, plan.y_range.start));
        for (line, text) in group.label.lines().enumerate() {
            let dy = TICK_PAD + line as i32 * (theme.tick_size as i32 + 4);
            area.draw(&Text::new(
                text.to_string(),
                (px - base_x, py - base_y + dy),
                tick_style.clone(),
            ))?;
        }
    }

    for &i in &plan.legend {
        let color = styles[i].color;
        chart
            .draw_series(std::iter::empty::<Rectangle<(f64, f64)>>())?
            .label(styles[i].label.as_str())
            .legend(move |(x, y)| Rectangle::new([(x, y - 8), (x + 24, y + 8)], color.filled()));
    }
    if !plan.legend.is_empty() {
        let position = match spec.legend {
            LegendPosition::UpperLeft => SeriesLabelPosition::UpperLeft,
            LegendPosition::UpperRight => SeriesLabelPosition::UpperRight,
            LegendPosition::UpperMiddle => SeriesLabelPosition::UpperMiddle,
        };
        chart
            .configure_series_labels()
            .position(position)
            .background_style(WHITE.mix(0.9))
            .border_style(BLACK)
            .label_font(font(theme, theme.legend_size, false))
            .draw()?;
    }

    Ok(plan)
}

/// Renders a single chart to a PNG at `path` and returns the path.
pub fn render(
    table: &BenchmarkTable,
    styles: &[SeriesStyle],
    spec: &ChartSpec,
    reveal_count: usize,
    path: impl AsRef<Path>,
) -> Result<PathBuf> {
    layout::validate(table, styles, reveal_count)?;
    write_png(path.as_ref(), spec.size, |root| {
        draw_chart(root, table, styles, spec, reveal_count).map(|_| ())
    })
}

/// Owns a bitmap backend for one file. On failure the partial file is
/// removed, so an error never leaves an image behind.
pub(crate) fn write_png<'p, F>(path: &'p Path, size: (u32, u32), draw: F) -> Result<PathBuf>
where
    F: FnOnce(&DrawingArea<BitMapBackend<'p>, Shift>) -> Result<()>,
{
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let outcome = {
        let root = BitMapBackend::new(path, size).into_drawing_area();
        root.fill(&WHITE)
            .map_err(RenderError::from)
            .and_then(|()| draw(&root))
            .and_then(|()| root.present().map_err(RenderError::from))
    };

    match outcome {
        Ok(()) => {
            info!(path = %path.display(), "wrote image");
            Ok(path.to_path_buf())
        }
        Err(err) => {
            if path.is_file() {
                if let Err(cleanup) = fs::remove_file(path) {
                    warn!(path = %path.display(), error = %cleanup, "could not remove partial image");
                }
            }
            Err(err)
        }
    }
}
