//! Repository location parsing and owner/name resolution.

use std::fmt;

use url::Url;

use crate::domain::AppError;

/// Substring that marks a location as hosted on GitHub.
pub const FORGE_HOST: &str = "github.com";

const GIT_SUFFIX: &str = ".git";

/// Owner/name pair of a GitHub-hosted repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryReference {
    owner: String,
    name: String,
}

impl RepositoryReference {
    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for RepositoryReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Syntactic family of a repository location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationKind {
    /// `http://` or `https://`.
    Http,
    /// `git@host:owner/name` or `ssh://host/owner/name`.
    Ssh,
}

impl LocationKind {
    pub fn classify(location: &str) -> Result<Self, AppError> {
        let location = location.trim();
        if location.starts_with("https://") || location.starts_with("http://") {
            Ok(LocationKind::Http)
        } else if location.starts_with("git@") || location.starts_with("ssh://") {
            Ok(LocationKind::Ssh)
        } else {
            Err(AppError::UnsupportedReferenceFormat(location.to_string()))
        }
    }
}

/// Resolve a repository location into its owner and name.
///
/// Accepts `https://host/owner/name[.git]`, `git@host:owner/name[.git]`
/// and `ssh://[user@]host/owner/name[.git]`.
pub fn resolve(location: &str) -> Result<RepositoryReference, AppError> {
    let location = location.trim();

    match LocationKind::classify(location)? {
        LocationKind::Http => {
            let url = parse_url(location)?;
            from_path_segments(location, url.path_segments().into_iter().flatten())
        }
        LocationKind::Ssh if location.starts_with("ssh://") => {
            let url = parse_url(location)?;
            from_path_segments(location, url.path_segments().into_iter().flatten())
        }
        LocationKind::Ssh => {
            let rest = &location["git@".len()..];
            let (host, path) =
                rest.split_once(':').ok_or_else(|| invalid(location, "missing ':' after host"))?;
            if host.is_empty() {
                return Err(invalid(location, "missing host"));
            }
            from_path_segments(location, path.split('/'))
        }
    }
}

/// The mirror must live on GitHub for the workflow and installer to apply.
pub fn validate_mirror_is_forge_hosted(location: &str) -> Result<(), AppError> {
    if location.contains(FORGE_HOST) {
        Ok(())
    } else {
        Err(AppError::NotAForgeRepository(location.to_string()))
    }
}

/// Append `.git` unless already present.
pub fn ensure_git_suffix(location: &str) -> String {
    if location.ends_with(GIT_SUFFIX) {
        location.to_string()
    } else {
        format!("{location}{GIT_SUFFIX}")
    }
}

fn from_path_segments<'a>(
    location: &str,
    segments: impl Iterator<Item = &'a str>,
) -> Result<RepositoryReference, AppError> {
    let mut segments = segments.filter(|segment| !segment.is_empty());

    let (Some(owner), Some(name)) = (segments.next(), segments.next()) else {
        return Err(invalid(location, "expected an owner/name path"));
    };

    let name = name.strip_suffix(GIT_SUFFIX).unwrap_or(name);
    if name.is_empty() {
        return Err(invalid(location, "repository name is empty"));
    }

    Ok(RepositoryReference { owner: owner.to_string(), name: name.to_string() })
}

fn parse_url(location: &str) -> Result<Url, AppError> {
    Url::parse(location).map_err(|e| invalid(location, &e.to_string()))
}

fn invalid(location: &str, reason: &str) -> AppError {
    AppError::InvalidReferenceFormat { location: location.to_string(), reason: reason.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn owner_name(location: &str) -> (String, String) {
        let reference = resolve(location).unwrap();
        (reference.owner().to_string(), reference.name().to_string())
    }

    #[test]
    fn resolves_https_with_and_without_suffix() {
        assert_eq!(owner_name("https://github.com/user/repo"), ("user".into(), "repo".into()));
        assert_eq!(owner_name("https://github.com/user/repo.git"), ("user".into(), "repo".into()));
        assert_eq!(owner_name("https://github.com/user/repo/"), ("user".into(), "repo".into()));
    }

    #[test]
    fn resolves_scp_like_ssh() {
        assert_eq!(owner_name("git@github.com:user/repo.git"), ("user".into(), "repo".into()));
        assert_eq!(owner_name("git@github.com:user/repo"), ("user".into(), "repo".into()));
    }

    #[test]
    fn resolves_ssh_scheme() {
        assert_eq!(
            owner_name("ssh://git@github.com/user/repo.git"),
            ("user".into(), "repo".into())
        );
    }

    #[test]
    fn rejects_single_segment_path() {
        for location in ["https://host/onlyname", "git@github.com:onlyname", "https://github.com/"] {
            let err = resolve(location).unwrap_err();
            assert!(
                matches!(err, AppError::InvalidReferenceFormat { .. }),
                "{location} should be invalid, got {err:?}"
            );
        }
    }

    #[test]
    fn rejects_bare_git_suffix_as_name() {
        let err = resolve("https://github.com/user/.git").unwrap_err();
        assert!(matches!(err, AppError::InvalidReferenceFormat { .. }));
    }

    #[test]
    fn rejects_unsupported_schemes() {
        for location in ["ftp://github.com/user/repo", "/srv/git/repo.git", "github.com/user/repo"] {
            let err = resolve(location).unwrap_err();
            assert!(matches!(err, AppError::UnsupportedReferenceFormat(_)), "{location}");
        }
    }

    #[test]
    fn display_joins_owner_and_name() {
        assert_eq!(resolve("https://github.com/user/repo").unwrap().to_string(), "user/repo");
    }

    #[test]
    fn forge_marker_check() {
        assert!(validate_mirror_is_forge_hosted("https://github.com/user/repo").is_ok());
        assert!(validate_mirror_is_forge_hosted("git@github.com:user/repo.git").is_ok());
        assert!(matches!(
            validate_mirror_is_forge_hosted("https://gitlab.com/user/repo"),
            Err(AppError::NotAForgeRepository(_))
        ));
    }

    #[test]
    fn git_suffix_is_added_once() {
        assert_eq!(ensure_git_suffix("https://example.org/repo"), "https://example.org/repo.git");
        assert_eq!(ensure_git_suffix("https://example.org/repo.git"), "https://example.org/repo.git");
    }

    proptest! {
        #[test]
        fn https_forms_resolve_identically(owner in "[a-zA-Z0-9][a-zA-Z0-9-]{0,15}", name in "[a-zA-Z0-9_-]{1,20}") {
            let plain = resolve(&format!("https://github.com/{owner}/{name}")).unwrap();
            let suffixed = resolve(&format!("https://github.com/{owner}/{name}.git")).unwrap();
            prop_assert_eq!(&plain, &suffixed);
            prop_assert_eq!(plain.owner(), owner.as_str());
            prop_assert_eq!(plain.name(), name.as_str());
        }

        #[test]
        fn ssh_forms_resolve_identically(owner in "[a-zA-Z0-9][a-zA-Z0-9-]{0,15}", name in "[a-zA-Z0-9_-]{1,20}") {
            let plain = resolve(&format!("git@github.com:{owner}/{name}")).unwrap();
            let suffixed = resolve(&format!("git@github.com:{owner}/{name}.git")).unwrap();
            prop_assert_eq!(&plain, &suffixed);
            prop_assert_eq!(plain.owner(), owner.as_str());
            prop_assert_eq!(plain.name(), name.as_str());
        }
    }
}
