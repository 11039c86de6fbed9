//! # 工具函数模块
//!
//! 提供美化输出、进度条与日志初始化。
//!
//! ## 依赖关系
//! - 被 `batch/`, `commands/`, `menu/` 使用
//! - 子模块: logger, output, progress

pub mod logger;
pub mod output;
pub mod progress;
