//! Subprocess invocation of the external git executable

use std::ffi::{OsStr, OsString};
use std::path::Path;
use std::process::Command;

use super::GitClient;
use crate::{Error, Result};

/// Transfer buffer option applied to every invocation, sized for large repos
const POST_BUFFER_OPT: &str = "http.postBuffer=524288000";

/// Runs git subcommands against a configurable executable path
#[derive(Debug, Clone)]
pub struct GitRunner {
    git_path: String,
}

impl GitRunner {
    /// Create a runner for the given git executable
    pub fn new(git_path: impl Into<String>) -> Self {
        Self {
            git_path: git_path.into(),
        }
    }

    /// Run a git subcommand, optionally inside `cwd`, returning trimmed stdout
    ///
    /// Arguments are passed as an explicit vector; nothing is ever handed to
    /// a shell. A non-zero exit maps to [`Error::Command`] with the captured
    /// standard error.
    pub fn run<I, S>(&self, args: I, cwd: Option<&Path>) -> Result<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let args: Vec<OsString> = args.into_iter().map(|a| a.as_ref().to_os_string()).collect();

        let mut cmd = Command::new(&self.git_path);
        cmd.arg("-c").arg(POST_BUFFER_OPT).args(&args);
        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }

        let output = cmd.output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Git executable not found at '{}'. Is git installed?",
                    self.git_path
                ))
            } else {
                Error::Io(e)
            }
        })?;

        if !output.status.success() {
            let shown = args
                .iter()
                .map(|a| a.to_string_lossy())
                .collect::<Vec<_>>()
                .join(" ");
            return Err(Error::Command {
                args: shown,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl Default for GitRunner {
    fn default() -> Self {
        Self::new("git")
    }
}

impl GitClient for GitRunner {
    fn remote_url(&self, repo_dir: &Path) -> Result<String> {
        self.run(["config", "--get", "remote.origin.url"], Some(repo_dir))
    }

    fn remote_branches(&self, repo_dir: &Path) -> Result<Vec<String>> {
        let raw = self.run(["branch", "-r"], Some(repo_dir))?;
        Ok(raw
            .lines()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect())
    }

    fn checkout(&self, repo_dir: &Path, branch: &str) -> Result<()> {
        self.run(["checkout", branch], Some(repo_dir)).map(|_| ())
    }

    fn clone_into(&self, url: &str, target: &Path) -> Result<()> {
        self.run(
            [OsStr::new("clone"), OsStr::new(url), target.as_os_str()],
            None,
        )
        .map(|_| ())
    }
}
