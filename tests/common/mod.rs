//! Shared testing utilities for gh-mirror CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Primary location that is only syntax-checked, so runs need no network.
pub const SSH_PRIMARY: &str = "git@git.example.org:team/project.git";
pub const MIRROR: &str = "https://github.com/user/repo";

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub fn home(&self) -> &Path {
        self.root.path()
    }

    /// Path to the directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `gh-mirror` binary.
    ///
    /// Token and API variables from the outer environment are cleared.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("gh-mirror").expect("Failed to locate gh-mirror binary");
        cmd.current_dir(&self.work_dir)
            .env("HOME", self.home())
            .env("GIT_CEILING_DIRECTORIES", self.home())
            .env_remove("GH_TOKEN")
            .env_remove("GITHUB_TOKEN")
            .env_remove("GITHUB_API_URL")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Write a file relative to the work directory and return its path.
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    pub fn read_file(&self, relative: &str) -> String {
        fs::read_to_string(self.work_dir.join(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    /// Turn the work directory into a git repository with one remote.
    pub fn git_init_with_remote(&self, name: &str, url: &str) {
        self.git(&["init", "--initial-branch=main"]);
        self.git(&["remote", "add", name, url]);
    }

    fn git(&self, args: &[&str]) {
        let output = std::process::Command::new("git")
            .args(args)
            .current_dir(&self.work_dir)
            .env("GIT_CEILING_DIRECTORIES", self.home())
            .output()
            .expect("Failed to run git");
        assert!(
            output.status.success(),
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr)
        );
    }
}

/// Parse generated workflow text; the comment header is ignored by the parser.
#[allow(dead_code)]
pub fn parse_workflow(text: &str) -> serde_yaml::Value {
    serde_yaml::from_str(text).expect("generated workflow should be valid YAML")
}
