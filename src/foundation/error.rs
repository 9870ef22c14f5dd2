use std::path::PathBuf;

pub type GoldfishResult<T> = Result<T, GoldfishError>;

#[derive(thiserror::Error, Debug)]
pub enum GoldfishError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("asset not found: {}", join_paths(.0))]
    AssetNotFound(Vec<PathBuf>),

    #[error("image error: {0}")]
    Image(String),

    #[error("io error at '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GoldfishError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn asset_not_found(path: impl Into<PathBuf>) -> Self {
        Self::AssetNotFound(vec![path.into()])
    }

    pub fn image(msg: impl Into<String>) -> Self {
        Self::Image(msg.into())
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
