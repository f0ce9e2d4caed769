use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

/// Everything that can stop a chart from being written.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A row does not have one cell per declared series.
    #[error("benchmark '{benchmark}' has {found} values but {expected} series are declared")]
    ShapeMismatch {
        benchmark: String,
        expected: usize,
        found: usize,
    },

    #[error("reveal count {reveal_count} is outside 0..={series}")]
    InvalidRange { reveal_count: usize, series: usize },

    #[error("benchmark table has no rows")]
    EmptyTable,

    #[error("figure has {panels} panels but its arrangement holds {slots}")]
    PanelMismatch { panels: usize, slots: usize },

    #[error("column {index} of the figure has zero width")]
    EmptyColumn { index: usize },

    #[error("unknown benchmark '{0}'")]
    UnknownBenchmark(String),

    /// Drawing or image encoding failed inside plotters.
    #[error("render backend failure: {0}")]
    Backend(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl<E> From<DrawingAreaErrorKind<E>> for RenderError
where
    E: std::error::Error + Send + Sync,
{
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        RenderError::Backend(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RenderError>;
