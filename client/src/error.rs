use normalization::NormalizationError;
use thiserror::Error;
use transport::TransportError;
use types::VersionError;

/// Errors returned by [`Api`](crate::Api) and the resource wrappers.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The transport failed or the server reported an error; passed through as is.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The result could not be turned into records, or a mutation result
    /// reported the wrong number of identifiers.
    #[error(transparent)]
    Normalization(#[from] NormalizationError),

    /// A single-record lookup matched this many records instead of one.
    #[error("expected exactly one result, got {0}")]
    ExpectedOneResult(usize),

    /// `apiinfo.version` answered something that is not a version.
    #[error(transparent)]
    Version(#[from] VersionError),
}

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;
