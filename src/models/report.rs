//! # 批量运行结果
//!
//! 每次调度新建一个 `RunReport`，汇报后即丢弃。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs`, `commands/` 使用
//! - 使用 `error.rs` 的退出码描述

use crate::error::describe_code;

use tabled::Tabled;

/// 转换失败的文件
#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct FailedFile {
    #[tabled(rename = "File")]
    pub file: String,
    #[tabled(rename = "Exit")]
    #[tabled(display_with = "display_code")]
    pub code: Option<i32>,
}

fn display_code(code: &Option<i32>) -> String {
    describe_code(code)
}

/// 批量运行结果统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// 成功数量
    pub processed: usize,
    /// 失败详情
    pub failures: Vec<FailedFile>,
}

impl RunReport {
    pub fn record_success(&mut self) {
        self.processed += 1;
    }

    pub fn record_failure(&mut self, file: String, code: Option<i32>) {
        self.failures.push(FailedFile { file, code });
    }

    /// 失败数量
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.processed + self.failed()
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// 进程退出码：全部成功为 0，否则为 1
    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            0
        } else {
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_counts() {
        let mut report = RunReport::default();
        assert!(report.is_success());
        assert_eq!(report.exit_code(), 0);

        report.record_success();
        report.record_failure("b.rrm".to_string(), Some(2));

        assert_eq!(report.processed, 1);
        assert_eq!(report.failed(), 1);
        assert_eq!(report.total(), 2);
        assert!(!report.is_success());
        assert_eq!(report.exit_code(), 1);
    }

    #[test]
    fn test_failure_table_renders_exit_code() {
        let rows = vec![FailedFile {
            file: "b.rrm".to_string(),
            code: Some(2),
        }];
        let table = tabled::Table::new(&rows).to_string();
        assert!(table.contains("b.rrm"));
        assert!(table.contains("rc=2"));
    }
}
