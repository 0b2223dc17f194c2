//! GitHub repository contents port definition.

use crate::domain::{AppError, RepositoryReference};

/// Metadata of a file that already exists in the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteFile {
    /// Blob SHA; required by the API to update the file.
    pub sha: String,
}

/// A create-or-update commit of a single file.
#[derive(Debug, Clone)]
pub struct ContentWrite<'a> {
    pub message: &'a str,
    pub content: &'a [u8],
    /// `Some` updates the existing blob, `None` creates the file.
    pub sha: Option<&'a str>,
}

/// Port for reading and writing repository files through the forge API.
pub trait ForgeContents {
    /// Fetch metadata for `path`. `Ok(None)` means the file does not exist.
    fn get_content(
        &self,
        repo: &RepositoryReference,
        path: &str,
    ) -> Result<Option<RemoteFile>, AppError>;

    /// Create or update `path` in a single commit.
    fn put_content(
        &self,
        repo: &RepositoryReference,
        path: &str,
        write: ContentWrite<'_>,
    ) -> Result<(), AppError>;
}
