use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unresolved relation target: {app}.{model}.{field} -> {target_app}.{target}")]
    UnresolvedTarget {
        app: String,
        model: String,
        field: String,
        target_app: String,
        target: String,
    },
}
