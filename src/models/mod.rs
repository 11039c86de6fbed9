//! # 数据模型模块
//!
//! 定义转换方向、运行配置与批量运行结果。
//!
//! ## 依赖关系
//! - 被 `cli/`, `batch/`, `menu/`, `commands/` 使用
//! - 子模块: config, report

pub mod config;
pub mod report;

pub use config::{Config, Mode};
pub use report::RunReport;
