//! # 批量处理模块
//!
//! 扫描输入目录并逐个调用外部转换脚本。
//!
//! ## 功能
//! - 按扩展名收集输入文件
//! - 定位并调用 `rrm_converter.py`
//! - 顺序执行，失败计数但不中断
//!
//! ## 依赖关系
//! - 被 `commands/` 和 `menu/` 使用
//! - 使用 `walkdir` 遍历目录
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod helper;
pub mod runner;

pub use helper::ScriptHelper;
pub use runner::BatchRunner;
