use crate::document::DocumentFormat;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid taxonomy JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid taxonomy JSON5: {message}")]
    Json5 { message: String },

    #[error("Invalid taxonomy YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unknown document format: {format}")]
    UnknownFormat { format: String },

    #[error("{format} document must be an array of nodes or an object with `children`")]
    UnexpectedShape { format: DocumentFormat },

    #[error("Invalid config override `{raw}`: expected `key=value`")]
    InvalidOverride { raw: String },
}
