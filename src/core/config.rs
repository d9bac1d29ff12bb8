use std::path::PathBuf;

/// 服务器配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | /var/lib/thali | 工作目录 (数据库、日志) |
/// | HTTP_PORT | 5000 | HTTP 服务端口 |
/// | LOG_LEVEL | info | 日志级别 |
/// | ENVIRONMENT | development | 运行环境 |
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录，存储数据库和日志文件
    pub work_dir: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 日志级别: trace | debug | info | warn | error
    pub log_level: String,
    /// 运行环境: development | production
    pub environment: String,
}

impl Config {
    /// 从环境变量加载配置，未设置时使用默认值
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/thali".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// 数据库目录 (work_dir/database)
    pub fn database_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("database")
    }

    /// 日志目录 (work_dir/logs)
    pub fn log_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("logs")
    }

    /// 确保工作目录结构存在
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.database_dir())?;
        std::fs::create_dir_all(self.log_dir())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(work_dir: &str) -> Config {
        Config {
            work_dir: work_dir.to_string(),
            http_port: 5000,
            log_level: "debug".to_string(),
            environment: "development".to_string(),
        }
    }

    #[test]
    fn work_dir_owns_database_and_log_dirs() {
        let c = config("/var/lib/thali");
        assert_eq!(c.database_dir(), PathBuf::from("/var/lib/thali/database"));
        assert_eq!(c.log_dir(), PathBuf::from("/var/lib/thali/logs"));
    }

    #[test]
    fn ensure_work_dir_structure_creates_both_dirs() {
        let tmp = tempfile::tempdir().unwrap();
        let c = config(&tmp.path().join("work").to_string_lossy());

        c.ensure_work_dir_structure().unwrap();

        assert!(c.database_dir().is_dir());
        assert!(c.log_dir().is_dir());
    }
}
