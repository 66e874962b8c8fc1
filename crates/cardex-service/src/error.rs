use thiserror::Error;

/// Export failures surfaced to the user as notices.
///
/// Neither variant is fatal; no output file is produced in either case.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ServiceError {
    #[error("No data found (need at least headers + 1 contact).")]
    NoInputRows,

    #[error("No valid contact data found.")]
    EmptyResult,
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
