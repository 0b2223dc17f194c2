//! Shell script run by the sync step of the generated workflow.

use minijinja::{Environment, context};

use crate::domain::{AppError, MirrorConfig};

const SYNC_SCRIPT_TEMPLATE: &str = include_str!("sync_script.sh.j2");
const SYNC_SCRIPT_NAME: &str = "sync_script.sh";

/// Render the fetch, branch, reset-or-merge, push script for `cfg`.
pub fn synthesize(cfg: &MirrorConfig) -> Result<String, AppError> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.add_filter("sh", shell_quote);
    env.add_template(SYNC_SCRIPT_NAME, SYNC_SCRIPT_TEMPLATE)
        .map_err(|e| AppError::ScriptRender(e.to_string()))?;

    let template =
        env.get_template(SYNC_SCRIPT_NAME).map_err(|e| AppError::ScriptRender(e.to_string()))?;

    template
        .render(context! {
            primary_repo => cfg.primary_repo(),
            primary_branch => cfg.primary_branch().as_str(),
            mirror_branch => cfg.mirror_branch().as_str(),
            force_sync => cfg.force_sync(),
        })
        .map_err(|e| AppError::ScriptRender(e.to_string()))
}

/// Quote `value` as a single shell word; safe words are left as they are.
fn shell_quote(value: String) -> String {
    let is_safe = !value.is_empty()
        && value.chars().all(|c| c.is_ascii_alphanumeric() || "@%+=:,./_-".contains(c));
    if is_safe { value } else { format!("'{}'", value.replace('\'', r"'\''")) }
}
