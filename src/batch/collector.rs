//! # 文件收集器
//!
//! 在输入目录（仅第一层）中收集指定扩展名的文件。
//!
//! ## 功能
//! - 只匹配普通文件（跟随符号链接）
//! - 扩展名精确匹配，区分大小写
//! - 结果排序，保证输出稳定
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 调用
//! - 使用 `walkdir` 遍历目录

use crate::error::{RunnerError, Result};

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 文件收集器
pub struct FileCollector {
    /// 输入目录
    input: PathBuf,
    /// 目标扩展名（不含点）
    extension: String,
}

impl FileCollector {
    /// 创建新的文件收集器
    pub fn new(input: impl Into<PathBuf>, extension: &str) -> Self {
        Self {
            input: input.into(),
            extension: extension.trim_start_matches('.').to_string(),
        }
    }

    /// 收集所有匹配的文件
    pub fn collect(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        let walker = WalkDir::new(&self.input)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true);

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                // 输入目录本身不可读
                Err(e) if e.path().map_or(true, |p| p == self.input) => {
                    return Err(RunnerError::DirectoryReadError {
                        path: self.input.display().to_string(),
                        source: e,
                    });
                }
                Err(e) => {
                    tracing::warn!("skipping unreadable entry: {}", e);
                    continue;
                }
            };

            if entry.file_type().is_file() && self.matches(entry.path()) {
                files.push(entry.into_path());
            }
        }

        files.sort();
        Ok(files)
    }

    fn matches(&self, path: &Path) -> bool {
        path.extension() == Some(OsStr::new(&self.extension))
    }
}
