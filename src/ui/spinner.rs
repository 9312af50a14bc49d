use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

/// 进度指示器（旋转动画）
///
/// 每个 pipeline 阶段创建一个 spinner，结束时以
/// [`succeed`](Spinner::succeed) 或 [`fail`](Spinner::fail) 收尾。
pub struct Spinner {
    pb: ProgressBar,
    colored: bool,
}

impl Spinner {
    /// 创建新的 spinner 并开始旋转
    pub fn new(message: &str, colored: bool) -> Self {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(style);
        }
        pb.set_message(message.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(80));
        Self { pb, colored }
    }

    /// 阶段成功（绿色 ✓）
    pub fn succeed(self, message: &str) {
        self.pb.finish_and_clear();
        super::success(message, self.colored);
    }

    /// 阶段失败（红色 ✗）
    pub fn fail(self, message: &str) {
        self.pb.finish_and_clear();
        if self.colored {
            eprintln!("{} {}", "✗".red().bold(), message.red());
        } else {
            eprintln!("✗ {}", message);
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.pb.finish_and_clear();
    }
}
