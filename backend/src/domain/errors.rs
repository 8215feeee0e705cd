use thiserror::Error;

/// Error taxonomy for the domain layer.
///
/// `Validation` and `NotFound` are always reported to the caller; the
/// interface layer is responsible for surfacing them to the user. A failed
/// save leaves the in-memory collection authoritative for the rest of the
/// session.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A required field is missing or empty; nothing was written.
    #[error("{0}")]
    Validation(String),

    /// The operation referenced a trip/day/item id that does not exist.
    #[error("{0}")]
    NotFound(String),

    /// No import parser recognized the file content; nothing was imported.
    #[error("file content did not match any supported itinerary format")]
    ImportFormat,

    /// The persisted store rejected the write. The in-memory state already
    /// carries the mutation.
    #[error("failed to save changes")]
    SaveFailed(#[source] anyhow::Error),

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

pub type DomainResult<T> = Result<T, DomainError>;
