/// Error enumeration shared by the repository seams.
///
/// Fetches return `Result<Option<_>, RepositoryError>`; services convert an
/// absent record into `NotFound` so callers see a business failure instead of
/// a crash.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
