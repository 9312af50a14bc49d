// 配置加载逻辑
//
// 此文件负责从文件和环境变量加载配置。

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use directories::ProjectDirs;

use super::structs::AppConfig;
use crate::constants::llm::API_KEY_ENV;
use crate::error::Result;

/// 加载应用配置
///
/// 配置加载优先级（从高到低）：
/// 1. 环境变量（COMMIT_GPT__* 前缀，双下划线表示嵌套）
///    - 例如：`COMMIT_GPT__LLM__MODEL=gpt-4o`
///    - 例如：`COMMIT_GPT__UI__COLORED=false`
/// 2. 配置文件（~/.config/commit-gpt/config.toml）
/// 3. 默认值（来自 structs 的 Default trait 和 serde(default) 属性）
pub fn load_config() -> Result<AppConfig> {
    load_config_from(get_config_path().as_deref())
}

/// Loads configuration using an explicit config file path.
///
/// A missing file is not an error; defaults and environment variables still apply.
pub fn load_config_from(config_path: Option<&Path>) -> Result<AppConfig> {
    let mut builder = Config::builder();

    if let Some(path) = config_path
        && path.exists()
    {
        tracing::debug!("Loading config file: {}", path.display());
        builder = builder.add_source(File::from(path.to_path_buf()));
    }

    // 使用双下划线作为嵌套层级分隔符，避免与字段名中的单下划线冲突
    // 例如：COMMIT_GPT__LLM__MAX_DIFF_CHARS -> llm.max_diff_chars
    builder = builder.add_source(
        Environment::with_prefix("COMMIT_GPT")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;
    let mut app_config: AppConfig = config.try_deserialize()?;

    app_config.llm.api_key = read_api_key();
    app_config.validate()?;

    tracing::debug!("Loaded config: {:?}", app_config);

    Ok(app_config)
}

/// Reads the credential from the environment; blank values count as absent.
fn read_api_key() -> Option<String> {
    std::env::var(API_KEY_ENV)
        .ok()
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty())
}

/// 获取配置文件路径
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.toml"))
}

/// 获取配置目录路径
pub fn get_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "commit-gpt").map(|dirs| dirs.config_dir().to_path_buf())
}
