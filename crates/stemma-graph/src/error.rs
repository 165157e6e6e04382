#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("cannot build a graph from an empty link list")]
    MissingLinks,

    #[error("node {id} not found")]
    UnresolvedNode { id: String },
}

pub type Result<T> = std::result::Result<T, Error>;
