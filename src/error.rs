//! # 统一错误处理模块
//!
//! 定义 rrm-runner 的所有错误类型，使用 `thiserror` 派生。
//!
//! 只有配置错误与依赖缺失会中断一次批量运行；
//! `ConversionFailure` 只记录在 `RunReport` 中，最后以计数形式汇报。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// rrm-runner 统一错误类型
#[derive(Error, Debug)]
pub enum RunnerError {
    // ─────────────────────────────────────────────────────────────
    // 配置错误
    // ─────────────────────────────────────────────────────────────
    #[error("Input directory does not exist: {path}")]
    InputNotFound { path: String },

    #[error("Input path is not a directory: {path}")]
    NotADirectory { path: String },

    // ─────────────────────────────────────────────────────────────
    // 外部依赖
    // ─────────────────────────────────────────────────────────────
    #[error("Missing converter script ({name}); searched: {searched}")]
    MissingDependency { name: String, searched: String },

    #[error("Conversion failed for {file} ({})", describe_code(.code))]
    ConversionFailure { file: String, code: Option<i32> },

    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to create directory: {path}")]
    DirectoryCreateError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read directory: {path}")]
    DirectoryReadError {
        path: String,
        #[source]
        source: walkdir::Error,
    },

    #[error("Terminal I/O failed")]
    TerminalError(#[from] std::io::Error),
}

impl RunnerError {
    /// 是否属于配置错误（输入目录缺失或不是目录）
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            RunnerError::InputNotFound { .. } | RunnerError::NotADirectory { .. }
        )
    }
}

/// 退出码描述，信号终止时没有退出码
pub fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(rc) => format!("rc={}", rc),
        None => "could not run".to_string(),
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, RunnerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_failure_message() {
        let err = RunnerError::ConversionFailure {
            file: "b.rrm".to_string(),
            code: Some(3),
        };
        assert_eq!(err.to_string(), "Conversion failed for b.rrm (rc=3)");

        let err = RunnerError::ConversionFailure {
            file: "b.rrm".to_string(),
            code: None,
        };
        assert!(err.to_string().contains("could not run"));
    }

    #[test]
    fn test_config_error_kinds() {
        assert!(RunnerError::InputNotFound { path: "x".into() }.is_config_error());
        assert!(RunnerError::NotADirectory { path: "x".into() }.is_config_error());
        assert!(!RunnerError::MissingDependency {
            name: "rrm_converter.py".into(),
            searched: String::new(),
        }
        .is_config_error());
    }
}
