//! # 运行配置数据模型
//!
//! 转换方向 `Mode` 以及一次运行所需的全部配置 `Config`。
//! 配置只在运行开始前可变，按值传入调度器。
//!
//! ## 依赖关系
//! - 被 `cli/`, `batch/runner.rs`, `menu/` 使用
//! - 无外部模块依赖

use clap::ValueEnum;
use std::path::{Path, PathBuf};

/// 默认输入目录
pub const DEFAULT_INPUT: &str = "Input";
/// 默认输出目录
pub const DEFAULT_OUTPUT: &str = "Output";
/// 默认脚本解释器
pub const DEFAULT_INTERPRETER: &str = "python";

/// 转换方向
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum Mode {
    /// Convert .rrm files to .obj
    #[default]
    ToObj,
    /// Convert .obj files to .rrm
    ToRrm,
}

impl Mode {
    /// 输入文件扩展名（不含点）
    pub fn source_ext(self) -> &'static str {
        match self {
            Mode::ToObj => "rrm",
            Mode::ToRrm => "obj",
        }
    }

    /// 输出文件扩展名（不含点）
    pub fn target_ext(self) -> &'static str {
        match self {
            Mode::ToObj => "obj",
            Mode::ToRrm => "rrm",
        }
    }

    /// 传给转换脚本的操作关键字
    pub fn keyword(self) -> &'static str {
        match self {
            Mode::ToObj => "autoextract",
            Mode::ToRrm => "obj2rrm",
        }
    }

    /// 菜单与日志使用的方向标签
    pub fn label(self) -> &'static str {
        match self {
            Mode::ToObj => "RRM -> OBJ",
            Mode::ToRrm => "OBJ -> RRM",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Mode::ToObj => Mode::ToRrm,
            Mode::ToRrm => Mode::ToObj,
        }
    }

    /// 根据输入文件构造输出路径：保留文件名主干，替换扩展名
    pub fn target_path(self, source: &Path, output_dir: &Path) -> PathBuf {
        let mut name = source.file_stem().unwrap_or_default().to_os_string();
        name.push(".");
        name.push(self.target_ext());
        output_dir.join(name)
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::ToObj => write!(f, "to-obj"),
            Mode::ToRrm => write!(f, "to-rrm"),
        }
    }
}

/// 一次运行的配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// 转换方向
    pub mode: Mode,
    /// 输入目录
    pub input: PathBuf,
    /// 输出目录
    pub output: PathBuf,
    /// 显式指定的转换脚本路径（为空时按候选列表搜索）
    pub helper: Option<PathBuf>,
    /// 运行转换脚本的解释器
    pub interpreter: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            mode: Mode::default(),
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            helper: None,
            interpreter: DEFAULT_INTERPRETER.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_is_identity() {
        for mode in [Mode::ToObj, Mode::ToRrm] {
            assert_ne!(mode.toggle(), mode);
            assert_eq!(mode.toggle().toggle(), mode);
        }
    }

    #[test]
    fn test_mode_extensions_and_keywords() {
        assert_eq!(Mode::ToObj.source_ext(), "rrm");
        assert_eq!(Mode::ToObj.target_ext(), "obj");
        assert_eq!(Mode::ToObj.keyword(), "autoextract");
        assert_eq!(Mode::ToRrm.source_ext(), "obj");
        assert_eq!(Mode::ToRrm.target_ext(), "rrm");
        assert_eq!(Mode::ToRrm.keyword(), "obj2rrm");
        assert_eq!(Mode::ToObj.to_string(), "to-obj");
        assert_eq!(Mode::ToRrm.to_string(), "to-rrm");
    }

    #[test]
    fn test_target_path_keeps_stem() {
        let out = Path::new("out");
        assert_eq!(
            Mode::ToObj.target_path(Path::new("in/ship.hull.rrm"), out),
            out.join("ship.hull.obj")
        );
        assert_eq!(
            Mode::ToRrm.target_path(Path::new("in/crate.obj"), out),
            out.join("crate.rrm")
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_target_path_keeps_non_utf8_stem() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let out = Path::new("out");
        let first = Mode::ToObj.target_path(Path::new(OsStr::from_bytes(b"in/caf\xff.rrm")), out);
        let second =
            Mode::ToObj.target_path(Path::new(OsStr::from_bytes(b"in/caf\xfe.rrm")), out);

        assert_eq!(first, out.join(OsStr::from_bytes(b"caf\xff.obj")));
        assert_eq!(first.file_stem().unwrap().as_bytes(), b"caf\xff");
        assert_ne!(first, second);
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.mode, Mode::ToObj);
        assert_eq!(config.input, PathBuf::from("Input"));
        assert_eq!(config.output, PathBuf::from("Output"));
        assert_eq!(config.helper, None);
        assert_eq!(config.interpreter, "python");
    }
}
