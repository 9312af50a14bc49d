// Re-export all library modules
use commit_gpt::*;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use commands::generate::GenerateOptions;
use error::CommitGptError;

fn main() -> Result<()> {
    human_panic::setup_panic!();

    // reqwest 使用 rustls-no-provider，需显式安装 ring
    let _ = rustls::crypto::ring::default_provider().install_default();

    let cli = Cli::parse();

    // 根据 verbose 标志设置日志级别
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    // 日志写到 stderr，stdout 只留给结果输出
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(log_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match config::load_config() {
        Ok(config) => config,
        Err(e) => {
            ui::error(&e.to_string(), true);
            std::process::exit(1);
        }
    };

    let options = GenerateOptions { commit: cli.commit };

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    if let Err(e) = rt.block_on(commands::generate::run(&options, &config)) {
        let colored = config.ui.colored;
        // NoStagedChanges 已由 spinner 输出
        if !matches!(e, CommitGptError::NoStagedChanges) {
            ui::error(&e.to_string(), colored);
        }
        if let Some(suggestion) = e.suggestion() {
            println!();
            println!("{}", ui::info(suggestion, colored));
        }
        std::process::exit(1);
    }

    Ok(())
}
