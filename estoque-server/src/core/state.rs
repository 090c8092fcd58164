use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Instant;

use crate::core::{Config, Result, ServerError};
use crate::flash::FlashQueue;
use crate::inventory::{Inventory, InventorySummary};
use crate::seed::{SeedLoader, SeedSource};
use crate::storage::{KvStore, Persistence, RedbStore};

/// 服务器状态 - 持有所有共享组件
///
/// 使用 Arc 实现浅拷贝，每个请求处理器拿到的都是同一份库存。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | inventory | Arc<Mutex<Inventory>> | 记录集 + 持久化 (唯一写入者) |
/// | seed | SeedLoader | 种子数据加载器 (重置时使用) |
/// | flashes | FlashQueue | 待显示的提示消息 |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 库存 (同步锁，临界区内不得 await)
    pub inventory: Arc<Mutex<Inventory>>,
    /// 种子数据加载器
    pub seed: SeedLoader,
    /// 提示消息队列
    pub flashes: FlashQueue,
    started_at: Instant,
}

impl ServerState {
    pub fn new(config: Config, inventory: Inventory, seed: SeedLoader) -> Self {
        Self {
            config,
            inventory: Arc::new(Mutex::new(inventory)),
            seed,
            flashes: FlashQueue::new(),
            started_at: Instant::now(),
        }
    }

    /// 初始化服务器状态
    ///
    /// 1. 创建工作目录
    /// 2. 打开 `<work_dir>/estoque.redb`
    /// 3. 加载持久化数据或种子数据
    pub async fn initialize(config: &Config) -> Result<Self> {
        std::fs::create_dir_all(&config.work_dir).map_err(|source| ServerError::WorkDir {
            path: config.work_dir.clone(),
            source,
        })?;

        let db_path = config.db_path();
        let store = RedbStore::open(&db_path)?;
        tracing::info!(path = %db_path.display(), "Storage opened");

        Self::from_store(config.clone(), Arc::new(store)).await
    }

    /// Boot against an already opened store (tests use the in-memory backend)
    pub async fn from_store(config: Config, store: Arc<dyn KvStore>) -> Result<Self> {
        let seed = SeedLoader::new(SeedSource::parse(&config.seed_path));
        let inventory = Inventory::boot(Persistence::new(store), &seed)
            .await
            .inspect_err(|e| tracing::error!(error = ?e, "Failed to initialize inventory"))?;

        tracing::info!(products = inventory.products().len(), "Inventory ready");
        Ok(Self::new(config, inventory, seed))
    }

    /// Snapshot of the derived view model
    pub fn summary(&self) -> InventorySummary {
        self.inventory.lock().summary()
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
