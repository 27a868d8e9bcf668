use thiserror::Error;

pub type PlotResult<T> = Result<T, PlotError>;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("invalid plot area: width={width}, height={height}")]
    InvalidPlotArea { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid tick step: {0} (step must be finite and > 0)")]
    InvalidTickStep(f64),

    #[error("series `{series}` has no {role} axis assigned; call ensure_axes before render")]
    AxisNotAssigned { series: String, role: &'static str },

    #[error("no axis found for key `{0}`")]
    UnknownAxisKey(String),

    #[error("pop_clip called on an empty clip stack")]
    ClipStackUnderflow,

    #[error("render backend failure: {0}")]
    Backend(String),
}
