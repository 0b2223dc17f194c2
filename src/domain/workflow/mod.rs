//! Generated GitHub Actions workflow.

mod document;
mod script;

pub use document::{
    ActionStep, CHECKOUT_ACTION, Job, Jobs, RUNNER_IMAGE, RunStep, ScheduleTrigger, Step, Triggers,
    WORKFLOW_NAME, WorkflowDocument, build, generate, render,
};
pub use script::synthesize;
