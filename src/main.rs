//! # rrm-runner - RRM <-> OBJ 批量转换前端
//!
//! 在输入目录中按扩展名查找文件，对每个文件调用一次外部脚本
//! `rrm_converter.py`，并汇总成功/失败数量。
//!
//! ## 运行方式
//! - 无参数：交互式菜单
//! - `--mode --input --output`：批量转换
//!
//! ## 退出码
//! - 0: 全部成功
//! - 1: 输入目录无效、找不到转换脚本、任一文件转换失败或参数错误
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/   (文件收集、脚本调用、批量调度)
//!   │     ├── menu/    (交互式菜单)
//!   │     └── models/  (配置与运行结果)
//!   ├── utils/      (输出、进度条、日志)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod menu;
mod models;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    // 参数错误统一以退出码 1 结束；--help / --version 正常退出
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            std::process::exit(1);
        }
        Err(e) => e.exit(),
    };

    utils::logger::init_cli_logger(cli.verbose);

    let has_args = std::env::args_os().len() > 1;
    match commands::run(cli, has_args) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            let mut msg = e.to_string();
            if let Some(source) = std::error::Error::source(&e) {
                msg.push_str(&format!(": {}", source));
            }
            utils::output::print_error(&msg);
            std::process::exit(1);
        }
    }
}
