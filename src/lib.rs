//! gh-mirror: generate and install a GitHub Actions workflow that keeps a GitHub
//! mirror in sync with an external primary repository.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use adapters::{GitHubContentsClient, ReqwestProbe};
use ports::ForgeContents;

pub use app::RunOutcome;
pub use domain::{
    AppError, ForgeApiConfig, InstallOutcome, MirrorConfig, MirrorConfigInput, OutputTarget,
    RepositoryReference, SyncInterval, resolve, to_cron,
};

/// Render the complete workflow text for `cfg` without touching the network.
pub fn generate_workflow(cfg: &MirrorConfig) -> Result<String, AppError> {
    domain::generate_workflow(cfg)
}

/// Validate, generate and deliver the workflow using the HTTP adapters.
///
/// Output destined for standard output goes to the process stdout.
pub fn execute(cfg: &MirrorConfig, api: &ForgeApiConfig) -> Result<RunOutcome, AppError> {
    let probe = ReqwestProbe::new().map_err(|e| e.in_stage("validation"))?;
    let forge = match (cfg.setup_workflow(), cfg.access_token()) {
        (true, Some(token)) => Some(
            GitHubContentsClient::new(token.clone(), api)
                .map_err(|e| e.in_stage("installation"))?,
        ),
        _ => None,
    };

    let mut stdout = std::io::stdout().lock();
    app::execute(cfg, &probe, forge.as_ref().map(|client| client as &dyn ForgeContents), &mut stdout)
}
