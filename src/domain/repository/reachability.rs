//! Precondition checks that a repository location can be fetched from.

use std::time::Duration;

use url::Url;

use crate::domain::AppError;
use crate::ports::HttpProbe;

use super::reference::{FORGE_HOST, LocationKind, ensure_git_suffix};

/// Upper bound for a single reachability probe.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// What a reachability check will do for a given location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeTarget {
    /// Issue a HEAD request against this URL.
    Http(Url),
    /// SSH locations are only checked for syntax.
    SyntaxOnly,
}

/// Decide how to probe `location`.
///
/// GitHub locations are probed through the smart-HTTP `info/refs` endpoint;
/// other HTTP(S) locations are probed at the URL as given.
pub fn probe_target(location: &str) -> Result<ProbeTarget, AppError> {
    let location = location.trim();

    match LocationKind::classify(location)? {
        LocationKind::Http => {
            let base = location.trim_end_matches('/');
            let target = if base.contains(FORGE_HOST) {
                format!("{}/info/refs?service=git-upload-pack", ensure_git_suffix(base))
            } else {
                location.to_string()
            };
            let url = Url::parse(&target).map_err(|e| AppError::InvalidReferenceFormat {
                location: location.to_string(),
                reason: e.to_string(),
            })?;
            Ok(ProbeTarget::Http(url))
        }
        LocationKind::Ssh => {
            if location.contains(':') && location.contains('/') {
                Ok(ProbeTarget::SyntaxOnly)
            } else {
                Err(AppError::InvalidReferenceFormat {
                    location: location.to_string(),
                    reason: "SSH location must contain both ':' and '/'".to_string(),
                })
            }
        }
    }
}

/// Check that `location` exists and answers.
///
/// A status of 400 or above, or any transport failure, makes the location
/// unreachable. SSH locations are accepted on syntax alone.
pub fn validate_reachable(location: &str, probe: &(impl HttpProbe + ?Sized)) -> Result<(), AppError> {
    match probe_target(location)? {
        ProbeTarget::SyntaxOnly => {
            tracing::debug!(location, "SSH location provided, skipping reachability probe");
            Ok(())
        }
        ProbeTarget::Http(url) => {
            tracing::debug!(location, probe_url = %url, "Probing repository");
            let status = probe.head(&url).map_err(|e| AppError::RepositoryUnreachable {
                location: location.to_string(),
                reason: e.to_string(),
            })?;

            if status >= 400 {
                return Err(AppError::RepositoryUnreachable {
                    location: location.to_string(),
                    reason: format!("server responded with status {status}"),
                });
            }
            Ok(())
        }
    }
}
