use clap::{Parser, builder::styling};

const STYLES: styling::Styles = styling::Styles::styled()
    .header(styling::AnsiColor::Green.on_default().bold())
    .usage(styling::AnsiColor::Green.on_default().bold())
    .literal(styling::AnsiColor::Cyan.on_default().bold())
    .placeholder(styling::AnsiColor::Cyan.on_default());

const AFTER_HELP: &str = "\
Examples:
  git add .
  commit-gpt            Generate a message and print the commit command
  commit-gpt --commit   Generate a message and commit with it

Requirements:
  - Run inside a git repository with staged changes
  - OPENAI_API_KEY must be set in the environment";

/// Generate commit messages for staged changes with OpenAI
#[derive(Parser, Debug)]
#[command(name = "commit-gpt")]
#[command(author, version, long_about = None)]
#[command(styles = STYLES)]
#[command(after_help = AFTER_HELP)]
pub struct Cli {
    /// Commit the staged changes with the generated message
    #[arg(short, long)]
    pub commit: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
