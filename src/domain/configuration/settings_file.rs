use std::path::Path;

use serde::Deserialize;
use url::Url;

use crate::domain::AppError;

use super::MirrorConfigInput;

/// On-disk settings, every key optional.
///
/// ```toml
/// primary = "https://git.example.org/project.git"
/// mirror = "https://github.com/example/project"
/// interval = "daily"
/// force = false
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsFileDto {
    pub primary: Option<String>,
    pub mirror: Option<String>,
    pub primary_branch: Option<String>,
    pub mirror_branch: Option<String>,
    pub interval: Option<String>,
    pub force: Option<bool>,
    pub output: Option<String>,
    pub api_url: Option<Url>,
}

impl SettingsFileDto {
    /// Read and parse the settings file at `path`.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path).map_err(|e| AppError::SettingsFile {
            path: path.display().to_string(),
            details: e.to_string(),
        })?;
        Self::parse(&content, &path.display().to_string())
    }

    /// Parse settings from string content. `origin` names the source in errors.
    pub fn parse(content: &str, origin: &str) -> Result<Self, AppError> {
        toml::from_str(content).map_err(|e| AppError::SettingsFile {
            path: origin.to_string(),
            details: e.message().to_string(),
        })
    }
}

impl From<SettingsFileDto> for MirrorConfigInput {
    fn from(dto: SettingsFileDto) -> Self {
        MirrorConfigInput {
            primary_repo: dto.primary,
            mirror_repo: dto.mirror,
            primary_branch: dto.primary_branch,
            mirror_branch: dto.mirror_branch,
            sync_interval: dto.interval,
            force_sync: dto.force,
            output_file: dto.output,
            setup_workflow: false,
            access_token: None,
        }
    }
}
