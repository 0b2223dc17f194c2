use crate::domain::AppError;

pub trait RemoteLister {
    /// Return the raw `git remote -v` listing of the current repository.
    fn list_remotes(&self) -> Result<String, AppError>;
}
