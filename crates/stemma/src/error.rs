#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Graph(#[from] stemma_graph::Error),

    #[error("malformed graph: {reason}")]
    MalformedGraph { reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
