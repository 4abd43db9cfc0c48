//! 日志初始化
//!
//! `RUST_LOG` 优先；未设置时按 `verbose` 选择 debug 或 info

use tracing_subscriber::EnvFilter;

/// 以默认级别（info）初始化日志
pub fn init() {
    init_with_verbose(false);
}

/// 初始化全局日志订阅器，重复调用时忽略
pub fn init_with_verbose(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
