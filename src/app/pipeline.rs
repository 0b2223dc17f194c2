//! The generate-and-deliver run: validation, generation, then installation or output.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::domain::workflow;
use crate::domain::{
    AppError, InstallOutcome, MirrorConfig, OutputTarget, RepositoryReference, install, resolve,
    validate_mirror_is_forge_hosted, validate_reachable,
};
use crate::ports::{ForgeContents, HttpProbe};

/// Where the generated workflow ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Printed,
    Written(PathBuf),
    Installed { repository: RepositoryReference, outcome: InstallOutcome },
}

/// Run every stage for `cfg`.
///
/// `forge` is only consulted when the configuration asks for direct
/// installation. Otherwise the document goes to the configured output, with
/// `stdout` standing in for standard output.
pub fn execute(
    cfg: &MirrorConfig,
    probe: &dyn HttpProbe,
    forge: Option<&dyn ForgeContents>,
    stdout: &mut dyn Write,
) -> Result<RunOutcome, AppError> {
    let repository = validate(cfg, probe).map_err(|e| e.in_stage("validation"))?;
    tracing::info!("Repositories validated");

    let document = workflow::generate(cfg).map_err(|e| e.in_stage("generation"))?;
    tracing::info!(sync_interval = %cfg.sync_interval(), "Workflow generated");

    if cfg.setup_workflow() {
        let forge = forge.ok_or_else(|| AppError::MissingAccessToken.in_stage("installation"))?;
        let outcome =
            install(&repository, &document, forge).map_err(|e| e.in_stage("installation"))?;
        tracing::info!(%repository, ?outcome, "Workflow installed");
        return Ok(RunOutcome::Installed { repository, outcome });
    }

    write_output(cfg.output(), &document, stdout).map_err(|e| e.in_stage("output"))
}

fn validate(cfg: &MirrorConfig, probe: &dyn HttpProbe) -> Result<RepositoryReference, AppError> {
    validate_reachable(cfg.primary_repo(), probe)?;
    validate_mirror_is_forge_hosted(cfg.mirror_repo())?;
    resolve(cfg.mirror_repo())
}

fn write_output(
    target: &OutputTarget,
    document: &str,
    stdout: &mut dyn Write,
) -> Result<RunOutcome, AppError> {
    match target {
        OutputTarget::Stdout => {
            stdout.write_all(document.as_bytes())?;
            stdout.flush()?;
            Ok(RunOutcome::Printed)
        }
        OutputTarget::File(path) => {
            write_file(path, document)?;
            tracing::info!(path = %path.display(), "Workflow written to file");
            Ok(RunOutcome::Written(path.clone()))
        }
    }
}

fn write_file(path: &Path, document: &str) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, document)?;
    Ok(())
}
