use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("Render error: {0}")]
    Render(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AdvisorError>;
