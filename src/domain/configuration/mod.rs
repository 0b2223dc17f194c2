mod branch_name;
mod forge_api;
mod mirror_config;
mod settings_file;
mod sync_interval;

pub use branch_name::{BranchName, DEFAULT_BRANCH};
pub use forge_api::{DEFAULT_API_URL, ForgeApiConfig};
pub use mirror_config::{
    AccessToken, DEFAULT_OUTPUT_FILE, MirrorConfig, MirrorConfigInput, OutputTarget,
    TOKEN_ENV_VARS,
};
pub use settings_file::SettingsFileDto;
pub use sync_interval::SyncInterval;
