//! # 终端输出工具
//!
//! 统一的带标签状态行，是本工具的日志出口：
//! 信息和结果写标准输出，错误写标准错误。
//!
//! ## 依赖关系
//! - 被 `main.rs`, `job/parse.rs` 和所有 `commands/` 模块使用
//! - 使用 `job::ExitStatus`
//! - 使用 `colored` crate

use crate::job::ExitStatus;
use colored::Colorize;

/// 打印成功消息
pub fn print_success(msg: &str) {
    println!("{} {}", "[OK]".green().bold(), msg);
}

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    println!("{} {}", "[*]".blue().bold(), msg);
}

/// 打印完成消息
pub fn print_done(msg: &str) {
    println!("{} {}", "[DONE]".green().bold(), msg);
}

/// 打印计算终止状态
pub fn print_exit_status(status: &ExitStatus) {
    eprintln!(
        "{} {} {}",
        format!("[{}]", status.code()).red().bold(),
        status.name().red(),
        status.message()
    );
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(60);
    println!("\n{}", line.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", line.dimmed());
}

/// 打印分隔线
pub fn print_separator() {
    println!("{}", "─".repeat(60).dimmed());
}
