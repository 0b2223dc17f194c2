use std::fmt;

use crate::domain::AppError;

pub const DEFAULT_BRANCH: &str = "main";

/// Characters git forbids in ref names.
const REF_FORBIDDEN: &[char] = &['~', '^', ':', '?', '*', '[', '\\'];

/// Characters that would change the meaning of the generated shell script.
const SHELL_FORBIDDEN: &[char] =
    &[';', '&', '|', '$', '`', '\'', '"', '<', '>', '(', ')', '{', '}', '!', '#'];

/// A branch name safe to embed in both a git refspec and the sync script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchName(String);

impl BranchName {
    /// Validate and create a new instance.
    ///
    /// Checks:
    /// - Non-empty
    /// - No whitespace, control characters, shell metacharacters, or ref-forbidden characters
    /// - No `..`, no leading `-` or `/`, no trailing `/`, `.` or `.lock`
    pub fn new(name: &str) -> Result<Self, AppError> {
        let reject = |reason: &str| AppError::InvalidBranchName {
            branch: name.to_string(),
            reason: reason.to_string(),
        };

        if name.is_empty() {
            return Err(reject("branch name is empty"));
        }
        if name.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(reject("contains whitespace or control characters"));
        }
        if let Some(c) = name.chars().find(|c| REF_FORBIDDEN.contains(c) || SHELL_FORBIDDEN.contains(c))
        {
            return Err(reject(&format!("contains forbidden character '{c}'")));
        }
        if name.contains("..") || name.contains("//") || name.contains("@{") {
            return Err(reject("contains an invalid sequence"));
        }
        if name.starts_with('-') || name.starts_with('/') {
            return Err(reject("must not start with '-' or '/'"));
        }
        if name.ends_with('/') || name.ends_with('.') || name.ends_with(".lock") {
            return Err(reject("must not end with '/', '.' or '.lock'"));
        }

        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for BranchName {
    fn default() -> Self {
        Self(DEFAULT_BRANCH.to_string())
    }
}

impl fmt::Display for BranchName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
