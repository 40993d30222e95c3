use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorParseError {
    #[error("empty color input")]
    Empty,

    #[error("unsupported color format: `{0}`")]
    UnsupportedFormat(String),

    #[error("malformed {format} color: `{input}`")]
    Malformed { format: &'static str, input: String },

    #[error("color `{0}` has non-finite components")]
    NonFinite(String),
}
