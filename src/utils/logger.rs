//! # 日志初始化
//!
//! 基于 `tracing-subscriber` 的诊断日志，输出到 stderr。
//! `RUST_LOG` 优先；否则默认 `info`，`--verbose` 时为 `debug`。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init_cli_logger(verbose: bool) {
    let default_filter = if verbose {
        "rrm_runner=debug"
    } else {
        "rrm_runner=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // 重复初始化（如测试中）时忽略
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time()
                .compact(),
        )
        .try_init();
}
