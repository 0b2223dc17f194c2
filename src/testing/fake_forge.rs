use std::cell::RefCell;

use crate::domain::{AppError, RepositoryReference};
use crate::ports::{ContentWrite, ForgeContents, RemoteFile};

/// A `put_content` call captured by [`FakeForge`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedWrite {
    pub repository: String,
    pub path: String,
    pub message: String,
    pub content: Vec<u8>,
    pub sha: Option<String>,
}

/// In-memory contents API.
pub struct FakeForge {
    existing_sha: Option<String>,
    lookup_error: Option<(u16, String)>,
    write_error: Option<(u16, String)>,
    writes: RefCell<Vec<RecordedWrite>>,
}

impl FakeForge {
    pub fn empty() -> Self {
        Self { existing_sha: None, lookup_error: None, write_error: None, writes: RefCell::default() }
    }

    pub fn with_existing(sha: &str) -> Self {
        Self { existing_sha: Some(sha.to_string()), ..Self::empty() }
    }

    pub fn failing_lookup(status: u16, message: &str) -> Self {
        Self { lookup_error: Some((status, message.to_string())), ..Self::empty() }
    }

    pub fn failing_write(status: u16, message: &str) -> Self {
        Self { write_error: Some((status, message.to_string())), ..Self::empty() }
    }

    pub fn writes(&self) -> Vec<RecordedWrite> {
        self.writes.borrow().clone()
    }
}

fn api_error((status, message): &(u16, String)) -> AppError {
    AppError::ForgeApi { message: message.clone(), status: Some(*status) }
}

impl ForgeContents for FakeForge {
    fn get_content(
        &self,
        _repo: &RepositoryReference,
        _path: &str,
    ) -> Result<Option<RemoteFile>, AppError> {
        if let Some(error) = &self.lookup_error {
            return Err(api_error(error));
        }
        Ok(self.existing_sha.clone().map(|sha| RemoteFile { sha }))
    }

    fn put_content(
        &self,
        repo: &RepositoryReference,
        path: &str,
        write: ContentWrite<'_>,
    ) -> Result<(), AppError> {
        if let Some(error) = &self.write_error {
            return Err(api_error(error));
        }
        self.writes.borrow_mut().push(RecordedWrite {
            repository: repo.to_string(),
            path: path.to_string(),
            message: write.message.to_string(),
            content: write.content.to_vec(),
            sha: write.sha.map(str::to_string),
        });
        Ok(())
    }
}
