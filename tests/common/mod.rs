use tracing_subscriber::EnvFilter;

/// 安装测试日志订阅者（`RUST_LOG=dwgraph=debug cargo test` 查看日志）
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
