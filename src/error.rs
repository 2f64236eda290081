use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The consumer dropped its receiver before the walk finished.
    #[error("receiver hung up after {sent} values")]
    Disconnected { sent: usize },

    #[error("walker thread panicked")]
    WalkerPanicked,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
