//! # commit-gpt
//!
//! 基于 staged changes 生成 Conventional Commits 风格的 commit message。
//!
//! ## 流程
//! 1. `git rev-parse --git-dir` 确认当前目录位于仓库中
//! 2. `git diff --cached --name-only` 确认存在 staged changes
//! 3. `git diff --cached` 获取 diff（超过 8000 字符时截断）
//! 4. 向 OpenAI chat completions 发送一次请求
//! 5. 输出 message，或在 `--commit` 时直接 `git commit -m`
//!
//! ## 快速开始
//! ```bash
//! export OPENAI_API_KEY=sk-...
//! git add .
//! commit-gpt            # 只输出 message
//! commit-gpt --commit   # 生成并提交
//! ```
//!
//! ## 作为库使用
//! ```no_run
//! use commit_gpt::config::{LLMConfig, NetworkConfig};
//! use commit_gpt::git::{GitOperations, repository::GitRepository};
//! use commit_gpt::llm::LLMProvider;
//! use commit_gpt::llm::provider::openai::OpenAIProvider;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let repo = GitRepository::open(None);
//! repo.check_repository()?;
//! let diff = repo.staged_diff()?;
//!
//! let llm = LLMConfig {
//!     api_key: Some("sk-...".to_string()),
//!     ..Default::default()
//! };
//! let provider = OpenAIProvider::new(&llm, &NetworkConfig::default())?;
//! let message = provider
//!     .generate_commit_message(&diff, llm.max_diff_chars)
//!     .await?;
//! println!("Generated: {}", message);
//! # Ok(())
//! # }
//! ```
//!
//! ## 核心模块
//! - [`git`] - Git 操作抽象
//! - [`llm`] - LLM provider 接口和 OpenAI 实现
//! - [`commands`] - pipeline 与状态机
//! - [`config`] - 配置管理
//! - [`error`] - 统一错误类型
//! - [`ui`] - 终端输出工具
//!
//! ## 配置
//! 可选配置文件 `config.toml`：
//! - Linux: `~/.config/commit-gpt/config.toml`
//! - macOS: `~/Library/Application Support/commit-gpt/config.toml`
//! - Windows: `%APPDATA%\commit-gpt\config\config.toml`
//!
//! ```toml
//! [llm]
//! model = "gpt-4o-mini"
//! max_tokens = 100
//! temperature = 0.7
//!
//! [ui]
//! colored = true
//! ```
//!
//! API key 只从 `OPENAI_API_KEY` 环境变量读取。

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod git;
pub mod llm;
pub mod ui;
