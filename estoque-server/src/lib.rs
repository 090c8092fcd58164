//! Estoque Server - 单用户库存管理
//!
//! # 架构概述
//!
//! 整个记录集是一个 JSON 文档，保存在本地 redb 数据库的固定 key 下。
//! 每个页面在服务端渲染；表单提交后通过 303 重定向完成"导航"。
//!
//! # 模块结构
//!
//! ```text
//! estoque-server/src/
//! ├── core/          # 配置、状态、错误、HTTP 服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── inventory/     # 规范化、派生视图、变更操作
//! ├── storage/       # 单槽位 JSON 文档持久化 (redb)
//! ├── views/         # 纯函数页面渲染
//! ├── seed.rs        # 种子数据加载 (文件 / URL)
//! ├── routing.rs     # 封闭路由枚举
//! ├── flash.rs       # 提示消息
//! └── utils/         # 格式化、金额、日志
//! ```

pub mod api;
pub mod core;
pub mod flash;
pub mod inventory;
pub mod routing;
pub mod seed;
pub mod storage;
pub mod utils;
pub mod views;

// Re-export 公共类型
pub use core::{Config, Server, ServerError, ServerState};
pub use inventory::{Inventory, InventoryError, InventorySummary};
pub use routing::Route;
pub use storage::{KvStore, Persistence, RedbStore};

// Re-export unified error types from shared
pub use shared::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

/// 设置运行环境: 加载 .env，初始化日志
pub fn setup_environment() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    ______     __
   / ____/____/ /_____  ____ ___  _____
  / __/ / ___/ __/ __ \/ __ `/ / / / _ \
 / /___(__  ) /_/ /_/ / /_/ / /_/ /  __/
/_____/____/\__/\____/\__, /\__,_/\___/
                        /_/
    "#
    );
}
