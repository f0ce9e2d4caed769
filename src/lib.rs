//! Grouped bar charts for the suffix decoding blog posts and slides.
//!
//! [`render`] draws one table as a grouped, annotated bar chart and writes a
//! PNG. [`figure`] composes several charts into one image, and [`figures`]
//! holds the published datasets.

pub mod error;
pub mod figure;
pub mod figures;
pub mod layout;
pub mod render;
pub mod spec;
pub mod style;
pub mod table;

pub use error::{RenderError, Result};
pub use figure::{render_figure, Arrangement, Figure, Panel};
pub use figures::Family;
pub use render::{draw_chart, render};
pub use spec::{Annotation, ChartSpec, Layout, LegendPosition, TickFormat, ValueFormat};
pub use style::{SeriesStyle, Theme};
pub use table::{BenchmarkTable, Cell};
