//! Direct installation of the workflow into the mirror through the contents API.

use crate::domain::{AppError, RepositoryReference};
use crate::ports::{ContentWrite, ForgeContents};

/// Repository path the installed workflow is committed to.
pub const INSTALL_PATH: &str = ".github/workflows/sync-mirror.yml";

const CREATE_MESSAGE: &str = "Add repository sync workflow";
const UPDATE_MESSAGE: &str = "Update repository sync workflow";

/// Whether installation created the file or replaced an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    Created,
    Updated,
}

/// Create or update [`INSTALL_PATH`] in `repo` with `document`.
pub fn install(
    repo: &RepositoryReference,
    document: &str,
    forge: &(impl ForgeContents + ?Sized),
) -> Result<InstallOutcome, AppError> {
    install_at(repo, INSTALL_PATH, document, forge).map_err(|source| AppError::InstallFailed {
        path: INSTALL_PATH.to_string(),
        source: Box::new(source),
    })
}

fn install_at(
    repo: &RepositoryReference,
    path: &str,
    document: &str,
    forge: &(impl ForgeContents + ?Sized),
) -> Result<InstallOutcome, AppError> {
    let existing = forge.get_content(repo, path)?;

    let (message, sha, outcome) = match &existing {
        Some(file) => {
            tracing::debug!(repository = %repo, path, "Workflow exists, updating");
            (UPDATE_MESSAGE, Some(file.sha.as_str()), InstallOutcome::Updated)
        }
        None => {
            tracing::debug!(repository = %repo, path, "Workflow absent, creating");
            (CREATE_MESSAGE, None, InstallOutcome::Created)
        }
    };

    forge.put_content(repo, path, ContentWrite { message, content: document.as_bytes(), sha })?;
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::resolve;
    use crate::testing::FakeForge;

    fn repo() -> RepositoryReference {
        resolve("https://github.com/user/repo").unwrap()
    }

    #[test]
    fn creates_when_absent() {
        let forge = FakeForge::empty();
        let outcome = install(&repo(), "name: sync\n", &forge).unwrap();

        assert_eq!(outcome, InstallOutcome::Created);
        let writes = forge.writes();
        assert_eq!(writes.len(), 1);
        assert_eq!(writes[0].repository, "user/repo");
        assert_eq!(writes[0].path, INSTALL_PATH);
        assert_eq!(writes[0].message, CREATE_MESSAGE);
        assert_eq!(writes[0].sha, None);
        assert_eq!(writes[0].content, b"name: sync\n");
    }

    #[test]
    fn updates_with_existing_sha() {
        let forge = FakeForge::with_existing("abc123");
        let outcome = install(&repo(), "name: sync\n", &forge).unwrap();

        assert_eq!(outcome, InstallOutcome::Updated);
        let writes = forge.writes();
        assert_eq!(writes[0].message, UPDATE_MESSAGE);
        assert_eq!(writes[0].sha.as_deref(), Some("abc123"));
    }

    #[test]
    fn lookup_failure_is_wrapped_and_nothing_is_written() {
        let forge = FakeForge::failing_lookup(500, "Server Error");
        let err = install(&repo(), "name: sync\n", &forge).unwrap_err();

        assert!(matches!(err, AppError::InstallFailed { .. }));
        assert!(matches!(err.root(), AppError::ForgeApi { status: Some(500), .. }));
        assert!(forge.writes().is_empty());
    }

    #[test]
    fn write_failure_is_wrapped() {
        let forge = FakeForge::failing_write(403, "Resource not accessible by integration");
        let err = install(&repo(), "name: sync\n", &forge).unwrap_err();

        assert!(err.to_string().contains(INSTALL_PATH));
        assert!(err.to_string().contains("Resource not accessible by integration"));
    }
}
