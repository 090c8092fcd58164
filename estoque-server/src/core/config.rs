use std::path::PathBuf;

/// 服务器配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | ./data | 工作目录 (redb 数据文件) |
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | SEED_PATH | <crate>/assets/data/seed.json | 种子数据 (文件路径或 http(s) URL) |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (未设置) | 日志目录，存在时启用按天滚动文件日志 |
/// | ENVIRONMENT | development | 运行环境 |
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/tmp/estoque HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录，存放 `estoque.redb`
    pub work_dir: String,
    /// HTTP 服务端口
    pub http_port: u16,
    /// 种子数据位置
    pub seed_path: String,
    /// 日志级别
    pub log_level: String,
    /// 日志目录
    pub log_dir: Option<String>,
    /// 运行环境: development | staging | production
    pub environment: String,
}

impl Config {
    /// 数据库文件名
    pub const DB_FILE: &'static str = "estoque.redb";

    /// 随 crate 分发的种子数据
    pub const DEFAULT_SEED_PATH: &'static str =
        concat!(env!("CARGO_MANIFEST_DIR"), "/assets/data/seed.json");

    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            seed_path: std::env::var("SEED_PATH")
                .unwrap_or_else(|_| Self::DEFAULT_SEED_PATH.into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.trim().is_empty()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(
        work_dir: impl Into<String>,
        http_port: u16,
        seed_path: impl Into<String>,
    ) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config.seed_path = seed_path.into();
        config
    }

    /// `<work_dir>/estoque.redb`
    pub fn db_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join(Self::DB_FILE)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_and_db_path() {
        let config = Config::with_overrides("/tmp/estoque", 8080, "seed.json");
        assert_eq!(config.http_port, 8080);
        assert_eq!(config.seed_path, "seed.json");
        assert_eq!(config.db_path(), PathBuf::from("/tmp/estoque/estoque.redb"));
    }
}
