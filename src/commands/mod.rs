//! # 命令执行模块
//!
//! 根据命令行选择批量模式或交互式菜单，并给出进程退出码。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `menu/`, `utils/`
//! - 子模块: convert

pub mod convert;

use crate::cli::Cli;
use crate::error::Result;
use crate::menu;
use crate::utils::output;

/// 执行命令，返回进程退出码
///
/// `has_args` 为假（命令行没有任何参数）时进入交互式菜单。
pub fn run(cli: Cli, has_args: bool) -> Result<i32> {
    let config = cli.config();

    if cli.interactive || !has_args {
        menu::run(config, |cfg| {
            if let Err(e) = convert::run_and_report(cfg) {
                output::print_error(&e.to_string());
                if e.is_config_error() {
                    output::print_warning("Use [S]et Folders to pick an existing input folder");
                }
            }
        })?;
        return Ok(0);
    }

    let report = convert::run_and_report(config)?;
    Ok(report.exit_code())
}
