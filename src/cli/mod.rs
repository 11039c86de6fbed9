//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。
//!
//! ## 运行方式
//! - 无参数：进入交互式菜单
//! - `--mode <to-obj|to-rrm> --input <dir> --output <dir>`：批量转换
//! - `--interactive`：以给定参数为初始值进入菜单
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 使用 `models/config.rs`

use crate::models::config::{Config, Mode, DEFAULT_INPUT, DEFAULT_INTERPRETER, DEFAULT_OUTPUT};

use clap::Parser;
use std::path::PathBuf;

/// rrm-runner - RRM <-> OBJ 批量转换前端
#[derive(Parser, Debug)]
#[command(name = "rrm-runner")]
#[command(version)]
#[command(
    about = "Batch front-end for rrm_converter.py (RRM <-> OBJ)",
    long_about = "Converts every matching file in the input directory by invoking \
                  rrm_converter.py once per file. Run without arguments for the \
                  interactive menu."
)]
pub struct Cli {
    /// Conversion direction
    #[arg(short, long, value_enum, default_value_t = Mode::ToObj)]
    pub mode: Mode,

    /// Input directory containing .rrm or .obj files
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Output directory for converted files (created if missing)
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Path to rrm_converter.py (skips the built-in search locations)
    #[arg(long, env = "RRM_HELPER")]
    pub helper: Option<PathBuf>,

    /// Interpreter used to run the converter script
    #[arg(long, env = "RRM_PYTHON", default_value = DEFAULT_INTERPRETER)]
    pub python: String,

    /// Open the interactive menu seeded with the given options
    #[arg(long, default_value_t = false)]
    pub interactive: bool,

    /// Enable debug logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Cli {
    /// 由命令行参数构造运行配置
    pub fn config(&self) -> Config {
        Config {
            mode: self.mode,
            input: self.input.clone(),
            output: self.output.clone(),
            helper: self.helper.clone(),
            interpreter: self.python.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_arguments() {
        let cli = Cli::try_parse_from([
            "rrm-runner",
            "--mode",
            "to-rrm",
            "--input",
            "meshes",
            "--output",
            "packed",
        ])
        .unwrap();
        let config = cli.config();

        assert_eq!(config.mode, Mode::ToRrm);
        assert_eq!(config.input, PathBuf::from("meshes"));
        assert_eq!(config.output, PathBuf::from("packed"));
        assert!(!cli.interactive);
    }

    #[test]
    fn test_defaults_match_config_defaults() {
        let cli = Cli::try_parse_from(["rrm-runner", "--helper", "x.py", "--python", "python3"])
            .unwrap();
        let config = cli.config();

        assert_eq!(config.mode, Mode::ToObj);
        assert_eq!(config.input, PathBuf::from("Input"));
        assert_eq!(config.output, PathBuf::from("Output"));
        assert_eq!(config.helper, Some(PathBuf::from("x.py")));
        assert_eq!(config.interpreter, "python3");
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        let err = Cli::try_parse_from(["rrm-runner", "--bogus"]).unwrap_err();
        assert!(err.use_stderr());
    }

    #[test]
    fn test_invalid_mode_is_rejected() {
        assert!(Cli::try_parse_from(["rrm-runner", "--mode", "to-fbx"]).is_err());
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
