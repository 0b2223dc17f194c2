use crate::domain::AppError;
use crate::ports::RemoteLister;

/// Remote listing with fixed output, or a listing that always fails.
pub struct FakeRemotes {
    listing: Option<String>,
}

impl FakeRemotes {
    pub fn with_listing(listing: &str) -> Self {
        Self { listing: Some(listing.to_string()) }
    }

    pub fn failing() -> Self {
        Self { listing: None }
    }
}

impl RemoteLister for FakeRemotes {
    fn list_remotes(&self) -> Result<String, AppError> {
        self.listing
            .clone()
            .ok_or_else(|| AppError::RemoteListing("not a git repository".to_string()))
    }
}
