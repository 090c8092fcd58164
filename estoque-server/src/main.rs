use estoque_server::{Config, Server, ServerState, print_banner, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 设置环境 (dotenv, 日志)
    setup_environment()?;

    // 打印横幅
    print_banner();

    tracing::info!("📦 Estoque server starting...");

    // 2. 加载配置
    let config = Config::from_env();
    tracing::info!(
        work_dir = %config.work_dir,
        seed = %config.seed_path,
        environment = %config.environment,
        "Configuration loaded"
    );

    // 3. 初始化服务器状态 (打开存储，加载数据；种子加载失败直接退出)
    let state = ServerState::initialize(&config).await?;

    // 4. 启动 HTTP 服务器
    let server = Server::new(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
