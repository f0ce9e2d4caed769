use plotters::style::RGBColor;

use crate::style::Theme;

/// Where bars sit relative to their group anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// The first bar is centered on the anchor, the rest follow to the right.
    Leading,
    /// The group is centered on the anchor.
    Centered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickFormat {
    Plain,
    /// A value of 1.0 reads as 100%.
    Percent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendPosition {
    UpperLeft,
    UpperRight,
    UpperMiddle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueFormat {
    pub precision: usize,
    pub suffix: &'static str,
}

impl ValueFormat {
    pub const fn fixed(precision: usize) -> Self {
        Self {
            precision,
            suffix: "",
        }
    }

    pub const fn times(precision: usize) -> Self {
        Self {
            precision,
            suffix: "x",
        }
    }

    pub fn format(&self, v: f64) -> String {
        format!("{:.*}{}", self.precision, v, self.suffix)
    }
}

/// How the text above each bar is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Annotation {
    None,
    Value(ValueFormat),
    /// Ratio against the `baseline` series of the same group. With `inverse`
    /// the ratio is baseline / value, i.e. a reduction factor.
    RelativeTo {
        baseline: usize,
        inverse: bool,
        format: ValueFormat,
    },
}

impl Annotation {
    /// Text for `value`, given the baseline cell of its group.
    pub fn text(&self, value: f64, baseline: Option<f64>) -> Option<String> {
        match self {
            Annotation::None => None,
            Annotation::Value(format) => Some(format.format(value)),
            Annotation::RelativeTo {
                inverse, format, ..
            } => {
                let base = baseline.filter(|b| *b != 0.0)?;
                let ratio = if *inverse {
                    if value == 0.0 {
                        return None;
                    }
                    base / value
                } else {
                    value / base
                };
                Some(format.format(ratio))
            }
        }
    }

    pub fn baseline(&self) -> Option<usize> {
        match self {
            Annotation::RelativeTo { baseline, .. } => Some(*baseline),
            _ => None,
        }
    }
}

/// Everything about one chart except its data and series styles.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    /// Output size in pixels when rendered on its own.
    pub size: (u32, u32),
    pub x_label: Option<String>,
    pub y_label: String,
    /// Fixed upper bound of the y-axis. Shared by every chart of a family.
    pub y_limit: Option<f64>,
    /// Multiplier on the largest value when `y_limit` is not set.
    pub headroom: f64,
    pub annotation: Annotation,
    pub bar_width: f64,
    pub group_gap: f64,
    pub layout: Layout,
    pub tick_format: TickFormat,
    pub legend: LegendPosition,
    /// Bar outline; `None` draws borderless bars.
    pub edge: Option<RGBColor>,
    /// Prefix the largest revealed value with a star.
    pub star_maximum: bool,
    pub theme: Theme,
}

impl ChartSpec {
    pub fn new(title: impl Into<String>, y_label: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            size: (1800, 900),
            x_label: None,
            y_label: y_label.into(),
            y_limit: None,
            headroom: 1.12,
            annotation: Annotation::Value(ValueFormat::fixed(2)),
            bar_width: 0.25,
            group_gap: 0.25,
            layout: Layout::Centered,
            tick_format: TickFormat::Plain,
            legend: LegendPosition::UpperLeft,
            edge: Some(RGBColor(0, 0, 0)),
            star_maximum: false,
            theme: Theme::blog(),
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    pub fn with_x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = Some(label.into());
        self
    }

    pub fn with_y_limit(mut self, limit: f64) -> Self {
        self.y_limit = Some(limit);
        self
    }

    pub fn with_headroom(mut self, headroom: f64) -> Self {
        self.headroom = headroom;
        self
    }

    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotation = annotation;
        self
    }

    pub fn with_bars(mut self, bar_width: f64, group_gap: f64) -> Self {
        self.bar_width = bar_width;
        self.group_gap = group_gap;
        self
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_tick_format(mut self, tick_format: TickFormat) -> Self {
        self.tick_format = tick_format;
        self
    }

    pub fn with_legend(mut self, legend: LegendPosition) -> Self {
        self.legend = legend;
        self
    }

    pub fn with_edge(mut self, edge: Option<RGBColor>) -> Self {
        self.edge = edge;
        self
    }

    pub fn with_star_maximum(mut self, star: bool) -> Self {
        self.star_maximum = star;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn format_tick(&self, v: f64) -> String {
        match self.tick_format {
            TickFormat::Plain => {
                if v.fract().abs() < 1e-9 {
                    format!("{v:.0}")
                } else {
                    format!("{v:.1}")
                }
            }
            TickFormat::Percent => format!("{:.0}%", v * 100.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_annotation_uses_precision() {
        let a = Annotation::Value(ValueFormat::fixed(2));
        assert_eq!(a.text(5.56, None).as_deref(), Some("5.56"));
        let a = Annotation::Value(ValueFormat::times(1));
        assert_eq!(a.text(5.345, None).as_deref(), Some("5.3x"));
    }

    #[test]
    fn relative_annotation_against_baseline() {
        let speedup = Annotation::RelativeTo {
            baseline: 0,
            inverse: false,
            format: ValueFormat::times(1),
        };
        assert_eq!(speedup.text(1.0, Some(1.0)).as_deref(), Some("1.0x"));
        assert_eq!(speedup.text(2.452, Some(1.0)).as_deref(), Some("2.5x"));
        assert_eq!(speedup.text(2.452, None), None);
        assert_eq!(speedup.text(2.452, Some(0.0)), None);

        let reduction = Annotation::RelativeTo {
            baseline: 0,
            inverse: true,
            format: ValueFormat::times(1),
        };
        assert_eq!(reduction.text(292.0, Some(671.0)).as_deref(), Some("2.3x"));
        assert_eq!(reduction.text(671.0, Some(671.0)).as_deref(), Some("1.0x"));
    }

    #[test]
    fn percent_ticks() {
        let spec = ChartSpec::new("Speedup", "Speedup").with_tick_format(TickFormat::Percent);
        assert_eq!(spec.format_tick(6.0), "600%");
        assert_eq!(spec.format_tick(0.5), "50%");

        let plain = ChartSpec::new("TPOT", "TPOT (ms)");
        assert_eq!(plain.format_tick(14.0), "14");
        assert_eq!(plain.format_tick(2.5), "2.5");
    }
}
