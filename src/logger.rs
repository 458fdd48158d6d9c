//! 日志初始化
//!
//! 日志写到标准错误，标准输出只留给报告

use tracing_subscriber::EnvFilter;

/// 安装全局 tracing 订阅者，`RUST_LOG` 未设置时默认 `info`
///
/// 重复调用不会 panic
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
