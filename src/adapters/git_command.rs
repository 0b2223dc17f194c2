use std::path::PathBuf;
use std::process::Command;

use crate::domain::AppError;
use crate::ports::RemoteLister;

/// Lists remotes by running the `git` executable in a working directory.
#[derive(Debug, Clone)]
pub struct GitCommandAdapter {
    root: PathBuf,
}

impl GitCommandAdapter {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Adapter rooted at the process working directory.
    pub fn current() -> Result<Self, AppError> {
        Ok(Self::new(std::env::current_dir()?))
    }

    fn run(&self, args: &[&str]) -> Result<String, AppError> {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.root)
            .output()
            .map_err(|e| AppError::RemoteListing(format!("git {}: {}", args.join(" "), e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::RemoteListing(format!(
                "git {}: {}",
                args.join(" "),
                if stderr.is_empty() { "Unknown error".to_string() } else { stderr }
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl RemoteLister for GitCommandAdapter {
    fn list_remotes(&self) -> Result<String, AppError> {
        self.run(&["remote", "-v"])
    }
}
