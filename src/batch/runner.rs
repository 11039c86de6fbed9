//! # 批量调度器
//!
//! 对输入目录中的每个匹配文件依次调用一次转换脚本。
//!
//! ## 流程
//! 1. 校验输入目录（不存在则不创建输出目录、不调用脚本）
//! 2. 创建输出目录
//! 3. 定位转换脚本（找不到则不扫描输入目录）
//! 4. 逐个文件同步调用，失败只计数，不中断批处理
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs`, `menu/` 调用
//! - 使用 `batch/collector.rs`, `batch/helper.rs`
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use crate::batch::collector::FileCollector;
use crate::batch::helper::{locate_helper, Invoke};
use crate::error::{RunnerError, Result};
use crate::models::{Config, RunReport};
use crate::utils::{output, progress};

use std::fs;
use std::path::PathBuf;

/// 批量调度器
pub struct BatchRunner<I> {
    /// 转换脚本调用者
    invoker: I,
    /// 搜索转换脚本的根目录
    search_root: PathBuf,
}

impl<I: Invoke> BatchRunner<I> {
    /// 在当前工作目录下搜索转换脚本
    pub fn new(invoker: I) -> Self {
        Self {
            invoker,
            search_root: PathBuf::from("."),
        }
    }

    pub fn with_search_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.search_root = root.into();
        self
    }

    #[cfg(test)]
    pub fn invoker(&self) -> &I {
        &self.invoker
    }

    /// 执行一次批量转换
    pub fn run(&mut self, config: Config) -> Result<RunReport> {
        if !config.input.exists() {
            return Err(RunnerError::InputNotFound {
                path: config.input.display().to_string(),
            });
        }
        if !config.input.is_dir() {
            return Err(RunnerError::NotADirectory {
                path: config.input.display().to_string(),
            });
        }

        fs::create_dir_all(&config.output).map_err(|e| RunnerError::DirectoryCreateError {
            path: config.output.display().to_string(),
            source: e,
        })?;

        let helper = locate_helper(config.helper.as_deref(), &self.search_root)?;
        tracing::debug!("using helper {}", helper.display());

        output::print_header(&format!("Starting conversion: {}", config.mode));
        output::print_info(&format!("Input: {}", config.input.display()));
        output::print_info(&format!("Output: {}", config.output.display()));

        let files = FileCollector::new(&config.input, config.mode.source_ext()).collect()?;
        if files.is_empty() {
            output::print_warning(&format!(
                "No .{} files found in {}",
                config.mode.source_ext(),
                config.input.display()
            ));
        }

        let pb = progress::create_progress_bar(files.len() as u64, config.mode.label());
        let mut report = RunReport::default();

        for source in &files {
            let target = config.mode.target_path(source, &config.output);
            let name = file_name(source);

            pb.suspend(|| {
                output::print_conversion(
                    &format!("[{}]", config.mode.label()),
                    &name,
                    &file_name(&target),
                )
            });

            let outcome = self
                .invoker
                .invoke(&helper, config.mode.keyword(), source, &target);

            if outcome.success {
                report.record_success();
            } else {
                let failure = RunnerError::ConversionFailure {
                    file: name.clone(),
                    code: outcome.code,
                };
                tracing::debug!("{}", failure);
                pb.suspend(|| {
                    output::print_failure(&failure.to_string());
                    if !outcome.stderr.is_empty() {
                        output::print_detail(&outcome.stderr);
                    }
                });
                report.record_failure(name, outcome.code);
            }
            pb.inc(1);
        }

        pb.finish_and_clear();
        Ok(report)
    }
}

fn file_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
