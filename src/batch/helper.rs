//! # 外部转换脚本
//!
//! 定位 `rrm_converter.py` 并以子进程方式调用。
//!
//! 调用约定固定为：`<解释器> <脚本> <关键字> <输入文件> <输出文件>`，
//! 关键字为 `autoextract` (RRM -> OBJ) 或 `obj2rrm` (OBJ -> RRM)。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 调用
//! - 无外部模块依赖

use crate::error::{RunnerError, Result};

use std::path::{Path, PathBuf};
use std::process::Command;

/// 转换脚本文件名
pub const HELPER_NAME: &str = "rrm_converter.py";

/// 相对搜索根目录的候选位置（按顺序探测）
pub fn candidate_paths(root: &Path) -> Vec<PathBuf> {
    vec![
        root.join("tools").join(HELPER_NAME),
        root.join("..").join(HELPER_NAME),
        root.join(HELPER_NAME),
    ]
}

/// 定位转换脚本
///
/// 显式指定路径时只检查该路径，否则按候选列表顺序返回第一个存在的文件。
pub fn locate_helper(explicit: Option<&Path>, root: &Path) -> Result<PathBuf> {
    let candidates = match explicit {
        Some(path) => vec![path.to_path_buf()],
        None => candidate_paths(root),
    };

    for path in &candidates {
        tracing::debug!("probing helper at {}", path.display());
        if path.exists() {
            return Ok(path.clone());
        }
    }

    Err(RunnerError::MissingDependency {
        name: HELPER_NAME.to_string(),
        searched: candidates
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", "),
    })
}

/// 单次调用结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelperOutcome {
    /// 退出码；被信号终止或无法启动时为 None
    pub code: Option<i32>,
    pub success: bool,
    /// 失败时展示给用户的标准错误输出
    pub stderr: String,
}

impl HelperOutcome {
    pub fn ok() -> Self {
        Self {
            code: Some(0),
            success: true,
            stderr: String::new(),
        }
    }

    pub fn failed(code: Option<i32>, stderr: impl Into<String>) -> Self {
        Self {
            code,
            success: false,
            stderr: stderr.into(),
        }
    }
}

/// 转换脚本调用接口
pub trait Invoke {
    fn invoke(
        &mut self,
        helper: &Path,
        keyword: &str,
        source: &Path,
        target: &Path,
    ) -> HelperOutcome;
}

/// 通过解释器运行转换脚本
pub struct ScriptHelper {
    interpreter: String,
}

impl ScriptHelper {
    pub fn new(interpreter: impl Into<String>) -> Self {
        Self {
            interpreter: interpreter.into(),
        }
    }
}

impl Invoke for ScriptHelper {
    fn invoke(
        &mut self,
        helper: &Path,
        keyword: &str,
        source: &Path,
        target: &Path,
    ) -> HelperOutcome {
        tracing::debug!(
            "running {} {} {} {} {}",
            self.interpreter,
            helper.display(),
            keyword,
            source.display(),
            target.display()
        );

        let result = Command::new(&self.interpreter)
            .arg(helper)
            .arg(keyword)
            .arg(source)
            .arg(target)
            .output();

        match result {
            Ok(output) if output.status.success() => {
                let stdout = String::from_utf8_lossy(&output.stdout);
                if !stdout.trim().is_empty() {
                    tracing::debug!("helper output: {}", stdout.trim());
                }
                HelperOutcome::ok()
            }
            Ok(output) => HelperOutcome::failed(
                output.status.code(),
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ),
            Err(e) => HelperOutcome::failed(
                None,
                format!("failed to start '{}': {}", self.interpreter, e),
            ),
        }
    }
}
