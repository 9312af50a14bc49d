pub mod commit;
pub mod diff;
pub mod repository;

use crate::error::Result;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Git 操作的统一接口
///
/// 该 trait 抽象了 pipeline 需要的全部 Git 操作，便于测试和替换实现。
/// 主要实现：[`GitRepository`](repository::GitRepository)，通过 `git` 命令行执行。
///
/// # 示例
/// ```no_run
/// use commit_gpt::git::{GitOperations, repository::GitRepository};
///
/// # fn main() -> anyhow::Result<()> {
/// let repo = GitRepository::open(None);
/// repo.check_repository()?;
/// let diff = repo.staged_diff()?;
/// println!("Staged changes:\n{}", diff);
/// # Ok(())
/// # }
/// ```
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait GitOperations {
    /// 检查当前目录是否位于 git 仓库中
    ///
    /// 等价于 `git rev-parse --git-dir`。
    ///
    /// # 错误
    /// - [`CommitGptError::NotARepository`] - 任何失败（非零退出、找不到 git 等）
    ///
    /// [`CommitGptError::NotARepository`]: crate::error::CommitGptError::NotARepository
    fn check_repository(&self) -> Result<()>;

    /// 获取 staged 文件名列表
    ///
    /// 等价于 `git diff --cached --name-only`。
    fn staged_file_names(&self) -> Result<Vec<String>>;

    /// 获取 staged changes 的 diff
    ///
    /// 等价于 `git diff --cached`。
    ///
    /// # 返回
    /// - `Ok(diff)` - diff 内容（可能为空字符串）
    /// - `Err(_)` - [`CommitGptError::GitCommand`](crate::error::CommitGptError::GitCommand)
    fn staged_diff(&self) -> Result<String>;

    /// 执行 git commit
    ///
    /// `message` 作为唯一的 `-m` 参数传入，不拆分 subject/body。
    /// 会触发 pre-commit 和 commit-msg hooks。
    ///
    /// # 错误
    /// - [`CommitGptError::CommitFailed`] - hook 拒绝、无 staged changes 等
    ///
    /// [`CommitGptError::CommitFailed`]: crate::error::CommitGptError::CommitFailed
    fn commit(&self, message: &str) -> Result<()>;
}

/// 检查是否有 staged changes
///
/// Any failure of the underlying probe is absorbed and reported as `false`.
pub fn has_staged_changes(repo: &dyn GitOperations) -> bool {
    match repo.staged_file_names() {
        Ok(files) => !files.is_empty(),
        Err(e) => {
            tracing::debug!("Staged-change probe failed, assuming none: {}", e);
            false
        }
    }
}
