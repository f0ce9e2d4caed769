use plotters::style::RGBColor;

// Snowflake brand colors used across the blog posts.
pub const SNOWFLAKE_ORANGE: RGBColor = RGBColor(0xFF, 0x9F, 0x36);
pub const SNOWFLAKE_MIDNIGHT: RGBColor = RGBColor(0x11, 0x56, 0x7F);
pub const SNOWFLAKE_BLUE: RGBColor = RGBColor(0x29, 0xB5, 0xE8);
pub const SNOWFLAKE_PURPLE: RGBColor = RGBColor(0x7D, 0x44, 0xCF);

/// Matplotlib's tab10 palette, first five entries.
pub const TAB10: [RGBColor; 5] = [
    RGBColor(0x1F, 0x77, 0xB4),
    RGBColor(0xFF, 0x7F, 0x0E),
    RGBColor(0x2C, 0xA0, 0x2C),
    RGBColor(0xD6, 0x27, 0x28),
    RGBColor(0x94, 0x67, 0xBD),
];

pub const NEUTRAL_GRAY: RGBColor = RGBColor(0x99, 0x99, 0x99);

/// Dark-to-light grays for baselines that should recede behind our results.
pub const BASELINE_GRAYS: [RGBColor; 6] = [
    RGBColor(0x1A, 0x1A, 0x1A),
    RGBColor(0x40, 0x40, 0x40),
    RGBColor(0x66, 0x66, 0x66),
    RGBColor(0x80, 0x80, 0x80),
    RGBColor(0x99, 0x99, 0x99),
    RGBColor(0xB3, 0xB3, 0xB3),
];

pub const MISSING_MARKER: RGBColor = RGBColor(0xD6, 0x27, 0x28);

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesStyle {
    pub label: String,
    pub color: RGBColor,
    /// Bold, slightly larger annotations.
    pub emphasis: bool,
    /// Prepended to every annotation of this series.
    pub prefix: Option<String>,
}

impl SeriesStyle {
    pub fn new(label: impl Into<String>, color: RGBColor) -> Self {
        Self {
            label: label.into(),
            color,
            emphasis: false,
            prefix: None,
        }
    }

    pub fn emphasized(mut self) -> Self {
        self.emphasis = true;
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }
}

/// Builds one style per `(label, color)` pair.
pub fn series(pairs: &[(&str, RGBColor)]) -> Vec<SeriesStyle> {
    pairs
        .iter()
        .map(|(label, color)| SeriesStyle::new(*label, *color))
        .collect()
}

/// Fonts used by a chart. Passed explicitly with every chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub font_family: &'static str,
    pub title_size: u32,
    pub axis_label_size: u32,
    pub tick_size: u32,
    pub annotation_size: u32,
    pub legend_size: u32,
    pub bold_labels: bool,
}

impl Theme {
    /// Large bold type for blog figures (12x6in at 150dpi).
    pub fn blog() -> Self {
        Self {
            font_family: "sans-serif",
            title_size: 38,
            axis_label_size: 33,
            tick_size: 29,
            annotation_size: 27,
            legend_size: 29,
            bold_labels: true,
        }
    }

    /// Smaller, regular-weight type for the poster and slide frames.
    pub fn poster() -> Self {
        Self {
            font_family: "sans-serif",
            title_size: 30,
            axis_label_size: 25,
            tick_size: 25,
            annotation_size: 23,
            legend_size: 23,
            bold_labels: false,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::blog()
    }
}
