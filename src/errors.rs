#[derive(thiserror::Error, Debug)]
pub enum AppErrors {
    #[error(transparent)]
    RayParseError(#[from] RayParseError),
    #[error("io: {0}")]
    Io(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RayParseError {
    #[error("empty ray")]
    Empty,
    #[error("negative ray")]
    Negative,
    #[error("malformed ray integer")]
    Malformed,
}

pub type AppResult<T> = Result<T, AppErrors>;
