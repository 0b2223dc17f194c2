pub mod configuration;
pub mod error;
pub mod installer;
pub mod repository;
pub mod schedule;
pub mod workflow;

pub use configuration::{
    AccessToken, BranchName, DEFAULT_API_URL, DEFAULT_BRANCH, DEFAULT_OUTPUT_FILE,
    ForgeApiConfig, MirrorConfig, MirrorConfigInput, OutputTarget, SettingsFileDto,
    SyncInterval, TOKEN_ENV_VARS,
};
pub use error::AppError;
pub use installer::{INSTALL_PATH, InstallOutcome, install};
pub use repository::{
    FORGE_HOST, LocationKind, PROBE_TIMEOUT, ProbeTarget, RemoteDirection, RemoteEntry,
    RepositoryReference, detect_from_local_remotes, detect_from_remotes, parse_remote_listing,
    probe_target, resolve, validate_mirror_is_forge_hosted, validate_reachable,
};
pub use schedule::{CronExpression, to_cron};
pub use workflow::{WorkflowDocument, build as build_workflow, generate as generate_workflow};
