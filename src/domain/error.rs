use std::io;

use thiserror::Error;

/// Library-wide error type for gh-mirror operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A required configuration value was not supplied.
    #[error("Missing required value: {field}")]
    MissingRequiredField { field: String },

    /// Sync interval is not one of the supported cadences.
    #[error("Invalid sync interval '{0}': must be one of hourly, daily, weekly")]
    InvalidIntervalValue(String),

    /// Branch name cannot be used as a git ref or a shell word.
    #[error("Invalid branch name '{branch}': {reason}")]
    InvalidBranchName { branch: String, reason: String },

    /// Repository location has a supported scheme but a malformed path.
    #[error("Invalid repository location '{location}': {reason}")]
    InvalidReferenceFormat { location: String, reason: String },

    /// Repository location uses neither the HTTP(S) nor the SSH form.
    #[error("Unsupported repository location '{0}': expected https://host/owner/name or git@host:owner/name")]
    UnsupportedReferenceFormat(String),

    /// Mirror location does not point at GitHub.
    #[error("Mirror repository '{0}' is not a GitHub repository URL")]
    NotAForgeRepository(String),

    /// Reachability probe failed.
    #[error("Repository '{location}' is unreachable: {reason}")]
    RepositoryUnreachable { location: String, reason: String },

    /// Direct installation requested without a token.
    #[error(
        "GitHub token not found in environment (GH_TOKEN or GITHUB_TOKEN) but required for --setup"
    )]
    MissingAccessToken,

    /// Creating or updating the workflow file through the API failed.
    #[error("Failed to install workflow at {path}: {source}")]
    InstallFailed {
        path: String,
        #[source]
        source: Box<AppError>,
    },

    /// Workflow document could not be serialized.
    #[error("Failed to serialize workflow document: {0}")]
    SerializationFailed(String),

    /// Sync script template failed to render.
    #[error("Failed to render sync script: {0}")]
    ScriptRender(String),

    /// Settings file missing or malformed.
    #[error("Settings file {path}: {details}")]
    SettingsFile { path: String, details: String },

    /// GitHub API returned an error response.
    #[error("GitHub API error{}: {message}", status_suffix(.status))]
    ForgeApi { message: String, status: Option<u16> },

    /// HTTP transport failure.
    #[error("HTTP request to {url} failed: {details}")]
    Http { url: String, details: String },

    /// Local remotes could not be listed.
    #[error("Failed to list git remotes: {0}")]
    RemoteListing(String),

    /// A pipeline stage failed.
    #[error("{stage} failed: {source}")]
    Stage {
        stage: &'static str,
        #[source]
        source: Box<AppError>,
    },
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|code| format!(" (status {code})")).unwrap_or_default()
}

impl AppError {
    pub fn missing_field<S: Into<String>>(field: S) -> Self {
        AppError::MissingRequiredField { field: field.into() }
    }

    /// Wrap an error with the name of the stage that produced it.
    pub fn in_stage(self, stage: &'static str) -> Self {
        AppError::Stage { stage, source: Box::new(self) }
    }

    /// The innermost error, looking through stage and install wrappers.
    pub fn root(&self) -> &AppError {
        match self {
            AppError::Stage { source, .. } | AppError::InstallFailed { source, .. } => {
                source.root()
            }
            other => other,
        }
    }
}
