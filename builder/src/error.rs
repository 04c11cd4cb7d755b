use {failure::Fail, replica_memory::StagingError};

/// Error that may occur while building a capture.
#[derive(Clone, Copy, Debug, Fail, PartialEq, Eq)]
pub enum CaptureError {
    /// Data could not be staged.
    #[fail(display = "Failed to stage capture data")]
    Staging(#[cause] StagingError),
}

impl From<StagingError> for CaptureError {
    fn from(error: StagingError) -> Self {
        CaptureError::Staging(error)
    }
}
