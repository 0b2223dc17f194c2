//! Best-effort mirror detection from locally configured git remotes.

use crate::ports::RemoteLister;

use super::reference::FORGE_HOST;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteDirection {
    Fetch,
    Push,
}

/// One line of `git remote -v`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteEntry {
    pub name: String,
    pub url: String,
    pub direction: RemoteDirection,
}

/// Parse `name<TAB>url (fetch|push)` lines. Malformed lines are skipped.
pub fn parse_remote_listing(listing: &str) -> Vec<RemoteEntry> {
    listing
        .lines()
        .filter_map(|line| {
            let mut fields = line.split_whitespace();
            let name = fields.next()?;
            let url = fields.next()?;
            let direction = match fields.next()? {
                "(fetch)" => RemoteDirection::Fetch,
                "(push)" => RemoteDirection::Push,
                _ => return None,
            };
            Some(RemoteEntry { name: name.to_string(), url: url.to_string(), direction })
        })
        .collect()
}

/// Pick the first GitHub push remote and normalize it to an HTTPS location without `.git`.
pub fn detect_from_remotes(entries: &[RemoteEntry]) -> Option<String> {
    entries
        .iter()
        .find(|entry| entry.direction == RemoteDirection::Push && entry.url.contains(FORGE_HOST))
        .map(|entry| normalize_to_https(&entry.url))
}

/// Detect the mirror location from the current repository's remotes.
///
/// Any failure to list remotes is treated as "nothing detected".
pub fn detect_from_local_remotes(lister: &(impl RemoteLister + ?Sized)) -> Option<String> {
    match lister.list_remotes() {
        Ok(listing) => detect_from_remotes(&parse_remote_listing(&listing)),
        Err(err) => {
            tracing::debug!(error = %err, "Failed to auto-detect GitHub remote");
            None
        }
    }
}

fn normalize_to_https(url: &str) -> String {
    let url = match url.strip_prefix("git@").and_then(|rest| rest.split_once(':')) {
        Some((host, path)) => format!("https://{host}/{path}"),
        None => url.to_string(),
    };
    url.strip_suffix(".git").map(str::to_string).unwrap_or(url)
}
