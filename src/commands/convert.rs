//! # 批量转换命令实现
//!
//! 运行一次批量转换并汇报结果。
//!
//! ## 功能
//! - 使用 `ScriptHelper` 调用转换脚本
//! - 汇总成功/失败数量
//! - 失败文件以表格列出
//!
//! ## 依赖关系
//! - 被 `commands/mod.rs` 调用（批量模式与菜单共用）
//! - 使用 `batch/`, `models/`, `utils/output.rs`

use crate::batch::{BatchRunner, ScriptHelper};
use crate::error::Result;
use crate::models::{Config, RunReport};
use crate::utils::output;

use std::path::PathBuf;
use tabled::Table;

/// 执行批量转换并打印汇总
pub fn run_and_report(config: Config) -> Result<RunReport> {
    let root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let mut runner =
        BatchRunner::new(ScriptHelper::new(config.interpreter.clone())).with_search_root(root);
    let report = runner.run(config)?;
    print_summary(&report);
    Ok(report)
}

/// 打印运行汇总
pub fn print_summary(report: &RunReport) {
    output::print_separator();

    if report.is_success() {
        output::print_done(&format!("Success! Processed {} files.", report.processed));
        return;
    }

    println!("{}", Table::new(&report.failures));
    output::print_error(&format!(
        "Completed with {} failures out of {} files. Processed: {}",
        report.failed(),
        report.total(),
        report.processed
    ));
}
