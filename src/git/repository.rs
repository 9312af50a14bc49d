use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use crate::error::{CommitGptError, Result};
use crate::git::GitOperations;

/// Git 仓库（基于 `git` 命令行）
///
/// 每个操作都启动一个独立的 `git` 子进程，在 `workdir` 中执行。
pub struct GitRepository {
    workdir: PathBuf,
}

impl GitRepository {
    /// 打开 git 仓库
    ///
    /// # Arguments
    /// * `workdir` - 工作目录，None 则使用当前目录
    ///
    /// Opening never fails; use [`GitOperations::check_repository`] to verify
    /// the directory is inside a working tree.
    pub fn open(workdir: Option<&Path>) -> Self {
        Self {
            workdir: workdir
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from(".")),
        }
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    fn run_git(&self, args: &[&str]) -> std::io::Result<Output> {
        tracing::debug!("Running git {}", args.join(" "));
        Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .output()
    }

    /// 执行 git 命令并返回 stdout，失败时映射为 `GitCommand`
    fn git_stdout(&self, args: &[&str]) -> Result<String> {
        let output = self
            .run_git(args)
            .map_err(|e| CommitGptError::GitCommand(format!("git {}: {}", args.join(" "), e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(CommitGptError::GitCommand(format!(
                "git {}: {}",
                args.join(" "),
                stderr
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl GitOperations for GitRepository {
    fn check_repository(&self) -> Result<()> {
        if which::which("git").is_err() {
            tracing::debug!("git executable not found in PATH");
            return Err(CommitGptError::NotARepository);
        }

        match self.run_git(&["rev-parse", "--git-dir"]) {
            Ok(output) if output.status.success() => Ok(()),
            Ok(output) => {
                tracing::debug!(
                    "git rev-parse failed: {}",
                    String::from_utf8_lossy(&output.stderr).trim()
                );
                Err(CommitGptError::NotARepository)
            }
            Err(e) => {
                tracing::debug!("Failed to spawn git: {}", e);
                Err(CommitGptError::NotARepository)
            }
        }
    }

    fn staged_file_names(&self) -> Result<Vec<String>> {
        let stdout = self.git_stdout(&["diff", "--cached", "--name-only"])?;
        Ok(stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    fn staged_diff(&self) -> Result<String> {
        self.git_stdout(&["diff", "--cached"])
    }

    fn commit(&self, message: &str) -> Result<()> {
        crate::git::commit::commit_changes(&self.workdir, message)
    }
}
