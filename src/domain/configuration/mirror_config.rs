use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::AppError;

use super::{BranchName, SyncInterval};

/// Environment variables searched for the GitHub token, in order.
pub const TOKEN_ENV_VARS: [&str; 2] = ["GH_TOKEN", "GITHUB_TOKEN"];

/// Output path used when none is given.
pub const DEFAULT_OUTPUT_FILE: &str = ".github/workflows/sync.yaml";

/// GitHub access token. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken([REDACTED])")
    }
}

impl AccessToken {
    /// Returns `None` for blank values.
    pub fn new<S: Into<String>>(value: S) -> Option<Self> {
        let value = value.into();
        if value.trim().is_empty() { None } else { Some(Self(value)) }
    }

    /// Read the token from `GH_TOKEN`, falling back to `GITHUB_TOKEN`.
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        TOKEN_ENV_VARS.iter().find_map(|key| lookup(key).and_then(Self::new))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

/// Where the generated workflow goes when it is not installed remotely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// An empty value or `-` selects standard output.
    pub fn from_setting(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value == "-" {
            OutputTarget::Stdout
        } else {
            OutputTarget::File(PathBuf::from(value))
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            OutputTarget::Stdout => None,
            OutputTarget::File(path) => Some(path),
        }
    }
}

impl Default for OutputTarget {
    fn default() -> Self {
        OutputTarget::File(PathBuf::from(DEFAULT_OUTPUT_FILE))
    }
}

/// Raw, unvalidated user intent as collected by a front end.
///
/// Every field is optional so that several sources (flags, settings file)
/// can be layered with [`MirrorConfigInput::or`] before validation.
#[derive(Debug, Clone, Default)]
pub struct MirrorConfigInput {
    pub primary_repo: Option<String>,
    pub mirror_repo: Option<String>,
    pub primary_branch: Option<String>,
    pub mirror_branch: Option<String>,
    pub sync_interval: Option<String>,
    pub force_sync: Option<bool>,
    pub output_file: Option<String>,
    pub setup_workflow: bool,
    pub access_token: Option<AccessToken>,
}

impl MirrorConfigInput {
    /// Fill every unset value from a lower-precedence source.
    pub fn or(self, fallback: MirrorConfigInput) -> Self {
        Self {
            primary_repo: self.primary_repo.or(fallback.primary_repo),
            mirror_repo: self.mirror_repo.or(fallback.mirror_repo),
            primary_branch: self.primary_branch.or(fallback.primary_branch),
            mirror_branch: self.mirror_branch.or(fallback.mirror_branch),
            sync_interval: self.sync_interval.or(fallback.sync_interval),
            force_sync: self.force_sync.or(fallback.force_sync),
            output_file: self.output_file.or(fallback.output_file),
            setup_workflow: self.setup_workflow || fallback.setup_workflow,
            access_token: self.access_token.or(fallback.access_token),
        }
    }

    /// True when no mirror location has been supplied by any source yet.
    pub fn lacks_mirror(&self) -> bool {
        non_blank(self.mirror_repo.as_deref()).is_none()
    }
}

/// Validated configuration. Immutable once built.
#[derive(Debug, Clone)]
pub struct MirrorConfig {
    primary_repo: String,
    mirror_repo: String,
    primary_branch: BranchName,
    mirror_branch: BranchName,
    sync_interval: SyncInterval,
    force_sync: bool,
    output: OutputTarget,
    setup_workflow: bool,
    access_token: Option<AccessToken>,
}

impl MirrorConfig {
    /// Validate raw input into a configuration.
    ///
    /// Fails on the first violated invariant; never touches the network.
    pub fn from_input(input: MirrorConfigInput) -> Result<Self, AppError> {
        let primary_repo = non_blank(input.primary_repo.as_deref())
            .ok_or_else(|| AppError::missing_field("primary repository URL (--primary)"))?
            .to_string();
        let mirror_repo = non_blank(input.mirror_repo.as_deref())
            .ok_or_else(|| AppError::missing_field("mirror repository URL (--mirror)"))?
            .to_string();

        let sync_interval = match input.sync_interval.as_deref() {
            Some(value) => value.parse()?,
            None => SyncInterval::default(),
        };

        let primary_branch = match input.primary_branch.as_deref() {
            Some(value) => BranchName::new(value)?,
            None => BranchName::default(),
        };
        let mirror_branch = match input.mirror_branch.as_deref() {
            Some(value) => BranchName::new(value)?,
            None => BranchName::default(),
        };

        if input.setup_workflow && input.access_token.is_none() {
            return Err(AppError::MissingAccessToken);
        }

        let output = match input.output_file.as_deref() {
            Some(value) => OutputTarget::from_setting(value),
            None => OutputTarget::default(),
        };

        Ok(Self {
            primary_repo,
            mirror_repo,
            primary_branch,
            mirror_branch,
            sync_interval,
            force_sync: input.force_sync.unwrap_or(true),
            output,
            setup_workflow: input.setup_workflow,
            access_token: input.access_token,
        })
    }

    pub fn primary_repo(&self) -> &str {
        &self.primary_repo
    }

    pub fn mirror_repo(&self) -> &str {
        &self.mirror_repo
    }

    pub fn primary_branch(&self) -> &BranchName {
        &self.primary_branch
    }

    pub fn mirror_branch(&self) -> &BranchName {
        &self.mirror_branch
    }

    pub fn sync_interval(&self) -> SyncInterval {
        self.sync_interval
    }

    pub fn force_sync(&self) -> bool {
        self.force_sync
    }

    pub fn output(&self) -> &OutputTarget {
        &self.output
    }

    pub fn setup_workflow(&self) -> bool {
        self.setup_workflow
    }

    pub fn access_token(&self) -> Option<&AccessToken> {
        self.access_token.as_ref()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
