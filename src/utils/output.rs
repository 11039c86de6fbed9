//! # 美化输出工具
//!
//! 提供统一的终端输出样式。
//!
//! ## 依赖关系
//! - 被 `batch/`, `commands/`, `menu/` 使用
//! - 使用 `colored` crate

use colored::Colorize;

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印单个文件转换失败
pub fn print_failure(msg: &str) {
    eprintln!("  {} {}", "FAILED".red().bold(), msg);
}

/// 打印外部命令的附加输出（逐行缩进）
pub fn print_detail(text: &str) {
    for line in text.lines() {
        eprintln!("    {}", line.dimmed());
    }
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

/// 打印转换消息
pub fn print_conversion(tag: &str, from: &str, to: &str) {
    println!("{} {} {} {}", tag.cyan().bold(), from.dimmed(), "->".cyan(), to);
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
