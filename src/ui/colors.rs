use colored::Colorize;

/// 显示成功消息（绿色 ✓）
pub fn success(msg: &str, colored: bool) {
    if colored {
        println!("{} {}", "✓".green().bold(), msg.green());
    } else {
        println!("✓ {}", msg);
    }
}

/// 显示错误消息（红色 ✗）
pub fn error(msg: &str, colored: bool) {
    if colored {
        eprintln!("{} {}", "✗ Error:".red().bold(), msg.red());
    } else {
        eprintln!("✗ Error: {}", msg);
    }
}

/// 显示信息消息（蓝色 ℹ）
pub fn info(msg: &str, colored: bool) -> String {
    if colored {
        format!("{} {}", "ℹ".blue().bold(), msg.blue())
    } else {
        format!("ℹ {}", msg)
    }
}

/// Section heading (bold)
pub fn heading(msg: &str, colored: bool) {
    if colored {
        println!("{}", msg.bold());
    } else {
        println!("{}", msg);
    }
}

/// Command the user can copy-paste (bold)
pub fn command(cmd: &str, colored: bool) {
    if colored {
        println!("  {}", cmd.bold());
    } else {
        println!("  {}", cmd);
    }
}

/// 显示次要提示（灰色）
pub fn dim(msg: &str, colored: bool) {
    if colored {
        println!("{}", msg.dimmed());
    } else {
        println!("{}", msg);
    }
}

/// Renders the generated message in quotes (green)
pub fn format_message(message: &str, colored: bool) -> String {
    let quoted = format!("\"{}\"", message);
    if colored {
        quoted.green().to_string()
    } else {
        quoted
    }
}

/// Builds the copy-pasteable commit command for a message.
///
/// Embedded double quotes, backslashes, backticks and `$` are escaped so the
/// command reproduces the exact message in a POSIX shell.
pub fn commit_command(message: &str) -> String {
    let mut escaped = String::with_capacity(message.len());
    for c in message.chars() {
        if matches!(c, '"' | '\\' | '`' | '$') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    format!("git commit -m \"{}\"", escaped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_commit_command_plain() {
        assert_eq!(
            commit_command("feat(api): add user endpoint"),
            "git commit -m \"feat(api): add user endpoint\""
        );
    }

    #[test]
    fn test_commit_command_escapes_shell_chars() {
        assert_eq!(
            commit_command(r#"fix: handle "$HOME" path"#),
            r#"git commit -m "fix: handle \"\$HOME\" path""#
        );
    }

    #[test]
    fn test_format_message_uncolored() {
        assert_eq!(format_message("docs: update", false), "\"docs: update\"");
    }

    #[test]
    fn test_info_uncolored() {
        assert_eq!(info("hint", false), "ℹ hint");
    }
}
