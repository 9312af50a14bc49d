use crate::commands::pipeline_state::{PipelineEvent, PipelineOutcome, PipelineState};
use crate::config::AppConfig;
use crate::error::{CommitGptError, Result};
use crate::git::{GitOperations, has_staged_changes, repository::GitRepository};
use crate::llm::{LLMProvider, provider::create_provider};
use crate::ui::{self, Spinner};

/// Options for a single generate run
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    /// Run `git commit -m` with the generated message
    pub commit: bool,
}

/// 执行生成命令
///
/// Operates on the repository containing the current working directory.
pub async fn run(options: &GenerateOptions, config: &AppConfig) -> Result<PipelineOutcome> {
    let repo = GitRepository::open(None);

    run_with_deps(options, config, &repo as &dyn GitOperations, || {
        create_provider(config)
    })
    .await
}

/// 执行生成命令（可测试版本，接受 trait 对象）
///
/// `make_provider` runs only after the staged-change check passes.
pub async fn run_with_deps<F>(
    options: &GenerateOptions,
    config: &AppConfig,
    repo: &dyn GitOperations,
    make_provider: F,
) -> Result<PipelineOutcome>
where
    F: FnOnce() -> Result<Box<dyn LLMProvider>>,
{
    let colored = config.ui.colored;
    let mut state = PipelineState::Start;

    // 1. 仓库检查
    let spinner = Spinner::new("Checking git repository...", colored);
    if let Err(e) = repo.check_repository() {
        spinner.fail("Not a git repository");
        return Err(e);
    }
    spinner.succeed("Git repository found");
    state = state.transition(PipelineEvent::RepositoryFound)?;

    // 2. staged changes
    let spinner = Spinner::new("Checking staged changes...", colored);
    let has_staged = has_staged_changes(repo);
    if has_staged {
        spinner.succeed("Staged changes found");
    } else {
        spinner.fail("No staged changes found");
    }
    state = state.transition(PipelineEvent::StagedChecked(has_staged))?;

    // 3. 生成 message
    let spinner = Spinner::new("Generating commit message...", colored);
    let message = match generate_message(config, repo, make_provider).await {
        Ok(message) => message,
        Err(e) => {
            spinner.fail("Failed to generate commit message");
            return Err(e);
        }
    };
    spinner.succeed("Commit message generated");
    state = state.transition(PipelineEvent::MessageGenerated(message.clone()))?;

    println!();
    ui::heading("Generated commit message:", colored);
    println!("{}", ui::format_message(&message, colored));
    println!();

    // 4. 提交或输出命令
    let event = if options.commit {
        let spinner = Spinner::new("Auto-committing...", colored);
        if let Err(e) = repo.commit(&message) {
            spinner.fail("Commit failed");
            return Err(e);
        }
        spinner.succeed("Changes committed successfully!");
        PipelineEvent::CommitDone
    } else {
        ui::heading("To commit with this message, run:", colored);
        ui::command(&ui::commit_command(&message), colored);
        println!();
        ui::dim("Or use --commit flag to auto-commit next time", colored);
        PipelineEvent::Printed
    };

    state
        .transition(event)?
        .into_outcome()
        .ok_or_else(|| CommitGptError::InvalidInput("pipeline did not finish".to_string()))
}

async fn generate_message<F>(
    config: &AppConfig,
    repo: &dyn GitOperations,
    make_provider: F,
) -> Result<String>
where
    F: FnOnce() -> Result<Box<dyn LLMProvider>>,
{
    let provider = make_provider()?;
    let diff = repo.staged_diff()?;

    tracing::debug!(
        "Sending {} chars of diff to {} (limit {})",
        diff.chars().count(),
        provider.name(),
        config.llm.max_diff_chars
    );

    provider
        .generate_commit_message(&diff, config.llm.max_diff_chars)
        .await
}
