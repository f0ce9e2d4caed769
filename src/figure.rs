//! Figures made of several charts sharing one image.

use std::path::{Path, PathBuf};

use plotters::prelude::*;

use crate::error::{RenderError, Result};
use crate::layout;
use crate::render::{draw_chart, write_png};
use crate::spec::ChartSpec;
use crate::style::SeriesStyle;
use crate::table::BenchmarkTable;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arrangement {
    Single,
    /// Equal-height panels stacked top to bottom.
    Rows,
    /// Side-by-side panels; each entry is the relative width of one panel.
    Columns(Vec<u32>),
}

#[derive(Debug, Clone)]
pub struct Panel {
    pub table: BenchmarkTable,
    pub styles: Vec<SeriesStyle>,
    pub spec: ChartSpec,
    pub reveal_count: usize,
}

impl Panel {
    /// A panel with every series revealed.
    pub fn new(table: BenchmarkTable, styles: Vec<SeriesStyle>, spec: ChartSpec) -> Self {
        let reveal_count = styles.len();
        Self {
            table,
            styles,
            spec,
            reveal_count,
        }
    }

    pub fn revealing(mut self, reveal_count: usize) -> Self {
        self.reveal_count = reveal_count;
        self
    }
}

#[derive(Debug, Clone)]
pub struct Figure {
    pub size: (u32, u32),
    pub title: Option<String>,
    pub title_size: u32,
    pub arrangement: Arrangement,
    pub panels: Vec<Panel>,
}

impl Figure {
    pub fn single(panel: Panel) -> Self {
        Self {
            size: panel.spec.size,
            title: None,
            title_size: panel.spec.theme.title_size,
            arrangement: Arrangement::Single,
            panels: vec![panel],
        }
    }

    pub fn rows(size: (u32, u32), panels: Vec<Panel>) -> Self {
        Self {
            size,
            title: None,
            title_size: 0,
            arrangement: Arrangement::Rows,
            panels,
        }
    }

    pub fn columns(size: (u32, u32), ratios: Vec<u32>, panels: Vec<Panel>) -> Self {
        Self {
            size,
            title: None,
            title_size: 0,
            arrangement: Arrangement::Columns(ratios),
            panels,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>, size: u32) -> Self {
        self.title = Some(title.into());
        self.title_size = size;
        self
    }

    fn validate(&self) -> Result<()> {
        let slots = match &self.arrangement {
            Arrangement::Single => 1,
            Arrangement::Rows => self.panels.len().max(1),
            Arrangement::Columns(ratios) => ratios.len(),
        };
        if self.panels.is_empty() || self.panels.len() != slots {
            return Err(RenderError::PanelMismatch {
                panels: self.panels.len(),
                slots,
            });
        }
        if let Arrangement::Columns(ratios) = &self.arrangement {
            if let Some(index) = ratios.iter().position(|r| *r == 0) {
                return Err(RenderError::EmptyColumn { index });
            }
        }
        for panel in &self.panels {
            layout::validate(&panel.table, &panel.styles, panel.reveal_count)?;
        }
        Ok(())
    }
}

/// Pixel offsets where each column after the first starts.
fn column_breaks(width: u32, ratios: &[u32]) -> Vec<i32> {
    let total: u32 = ratios.iter().sum::<u32>().max(1);
    let mut acc = 0;
    ratios
        .iter()
        .take(ratios.len().saturating_sub(1))
        .map(|r| {
            acc += r;
            (u64::from(width) * u64::from(acc) / u64::from(total)) as i32
        })
        .collect()
}

pub fn render_figure(figure: &Figure, path: impl AsRef<Path>) -> Result<PathBuf> {
    figure.validate()?;

    write_png(path.as_ref(), figure.size, |root| {
        let area = match &figure.title {
            Some(title) => root.titled(
                title,
                ("sans-serif", figure.title_size)
                    .into_font()
                    .style(FontStyle::Bold),
            )?,
            None => root.clone(),
        };

        let areas = match &figure.arrangement {
            Arrangement::Single => vec![area],
            Arrangement::Rows => area.split_evenly((figure.panels.len(), 1)),
            Arrangement::Columns(ratios) => {
                let (width, _) = area.dim_in_pixel();
                let no_rows: [i32; 0] = [];
                area.split_by_breakpoints(column_breaks(width, ratios), no_rows)
            }
        };

        for (panel, panel_area) in figure.panels.iter().zip(&areas) {
            draw_chart(
                panel_area,
                &panel.table,
                &panel.styles,
                &panel.spec,
                panel.reveal_count,
            )?;
        }
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{series, SNOWFLAKE_BLUE, SNOWFLAKE_MIDNIGHT};

    fn panel() -> Panel {
        Panel::new(
            BenchmarkTable::new().row("1", [5.37, 4.28]),
            series(&[("N-gram", SNOWFLAKE_MIDNIGHT), ("Suffix", SNOWFLAKE_BLUE)]),
            ChartSpec::new("TPOT", "TPOT (ms)"),
        )
    }

    #[test]
    fn column_breaks_follow_ratios() {
        assert_eq!(column_breaks(1500, &[2, 1]), vec![1000]);
        assert_eq!(column_breaks(900, &[1, 1, 1]), vec![300, 600]);
        assert!(column_breaks(900, &[1]).is_empty());
    }

    #[test]
    fn panel_count_must_match_arrangement() {
        let figure = Figure::columns((800, 400), vec![2, 1], vec![panel()]);
        assert!(matches!(
            figure.validate(),
            Err(RenderError::PanelMismatch {
                panels: 1,
                slots: 2
            })
        ));

        let figure = Figure::rows((800, 400), vec![]);
        assert!(figure.validate().is_err());

        assert!(Figure::rows((800, 800), vec![panel(), panel()])
            .validate()
            .is_ok());
    }

    #[test]
    fn zero_width_column_is_rejected() {
        let figure = Figure::columns((800, 400), vec![0, 1], vec![panel(), panel()]);
        assert!(matches!(
            figure.validate(),
            Err(RenderError::EmptyColumn { index: 0 })
        ));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("columns.png");
        assert!(render_figure(&figure, &path).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn invalid_panel_fails_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.png");
        let figure = Figure::single(panel().revealing(3));
        assert!(matches!(
            render_figure(&figure, &path),
            Err(RenderError::InvalidRange { .. })
        ));
        assert!(!path.exists());
    }
}
