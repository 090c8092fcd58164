use thiserror::Error;

use crate::inventory::InventoryError;
use crate::storage::StorageError;

/// 启动 / 运行期错误 (处理器错误使用 [`shared::AppError`])
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("无法创建工作目录 {path}: {source}")]
    WorkDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("存储错误: {0}")]
    Storage(#[from] StorageError),

    #[error("库存初始化失败: {0}")]
    Inventory(#[from] InventoryError),

    #[error("无法监听端口 {port}: {source}")]
    Bind {
        port: u16,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP 服务错误: {0}")]
    Serve(#[source] std::io::Error),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;
