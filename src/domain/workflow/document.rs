//! GitHub Actions workflow document model and rendering.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::schedule::{CronExpression, to_cron};
use crate::domain::{AppError, MirrorConfig};

use super::script::synthesize;

pub const WORKFLOW_NAME: &str = "Sync Primary Repository to GitHub Mirror";
pub const RUNNER_IMAGE: &str = "ubuntu-latest";
pub const CHECKOUT_ACTION: &str = "actions/checkout@v4";

pub const COMMIT_AUTHOR_NAME: &str = "GitHub Actions";
pub const COMMIT_AUTHOR_EMAIL: &str = "actions@github.com";

const ENVIRONMENT_GUARD: &str = "if [ \"$GITHUB_ACTIONS\" != \"true\" ]; then echo 'This script must be run in a GitHub Actions environment.'; exit 1; fi";

const HEADER: &str = "\
# GitHub Actions workflow file to sync an external repository to this GitHub mirror.
# This file was automatically generated by gh-mirror.
#
# The workflow does the following:
# - Runs on every push, on a schedule, and on manual dispatch
# - Clones the GitHub mirror repository with full history
# - Fetches changes from the primary external repository
# - Applies those changes to the mirror repository
# - Pushes the updated content back to the GitHub mirror
#
# Authentication is handled by the GITHUB_TOKEN secret provided by GitHub Actions.

";

/// Complete workflow. Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkflowDocument {
    pub name: String,
    pub on: Triggers,
    pub jobs: Jobs,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Triggers {
    pub push: BTreeMap<String, String>,
    pub schedule: Vec<ScheduleTrigger>,
    pub workflow_dispatch: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleTrigger {
    pub cron: CronExpression,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Jobs {
    pub sync: Job,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Job {
    #[serde(rename = "runs-on")]
    pub runs_on: String,
    pub permissions: BTreeMap<String, String>,
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Step {
    Action(ActionStep),
    Run(RunStep),
}

/// A step that invokes a published action.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionStep {
    pub name: String,
    pub uses: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub with: BTreeMap<String, serde_yaml::Value>,
}

/// A named shell command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunStep {
    pub name: String,
    pub run: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub env: BTreeMap<String, String>,
}

impl Step {
    pub fn name(&self) -> &str {
        match self {
            Step::Action(step) => &step.name,
            Step::Run(step) => &step.name,
        }
    }
}

fn gha_expr(expr: &str) -> String {
    format!("${{{{ {} }}}}", expr)
}

/// Assemble the workflow for `cfg`.
///
/// Steps: environment guard, full-history checkout, git identity, sync script.
pub fn build(cfg: &MirrorConfig) -> Result<WorkflowDocument, AppError> {
    let cron = to_cron(cfg.sync_interval());
    tracing::debug!(schedule = %cron, "Using cron schedule");

    let steps = vec![
        Step::Run(RunStep {
            name: "Validate GitHub Actions Environment".to_string(),
            run: ENVIRONMENT_GUARD.to_string(),
            env: BTreeMap::new(),
        }),
        Step::Action(ActionStep {
            name: "Checkout GitHub Mirror".to_string(),
            uses: CHECKOUT_ACTION.to_string(),
            with: BTreeMap::from([("fetch-depth".to_string(), serde_yaml::Value::from(0))]),
        }),
        Step::Run(RunStep {
            name: "Configure Git".to_string(),
            run: format!(
                "git config user.name '{COMMIT_AUTHOR_NAME}'\ngit config user.email '{COMMIT_AUTHOR_EMAIL}'"
            ),
            env: BTreeMap::new(),
        }),
        Step::Run(RunStep {
            name: "Sync Primary Repository".to_string(),
            run: synthesize(cfg)?,
            env: BTreeMap::from([("GITHUB_TOKEN".to_string(), gha_expr("secrets.GITHUB_TOKEN"))]),
        }),
    ];

    Ok(WorkflowDocument {
        name: WORKFLOW_NAME.to_string(),
        on: Triggers {
            push: BTreeMap::new(),
            schedule: vec![ScheduleTrigger { cron }],
            workflow_dispatch: BTreeMap::new(),
        },
        jobs: Jobs {
            sync: Job {
                runs_on: RUNNER_IMAGE.to_string(),
                permissions: BTreeMap::from([("contents".to_string(), "write".to_string())]),
                steps,
            },
        },
    })
}

/// Serialize `document` to YAML behind the explanatory comment header.
pub fn render(document: &WorkflowDocument) -> Result<String, AppError> {
    let yaml = serde_yaml::to_string(document)
        .map_err(|e| AppError::SerializationFailed(e.to_string()))?;
    Ok(format!("{HEADER}{yaml}"))
}

/// Build and render in one call.
pub fn generate(cfg: &MirrorConfig) -> Result<String, AppError> {
    render(&build(cfg)?)
}
