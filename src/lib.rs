//! Thali Server - 餐厅点餐后端
//!
//! Table-side ordering backend: diners scan a table QR code, browse the
//! menu, and place orders that accumulate into one open tab per table.
//! Kitchen and floor staff poll the read projections and move each item
//! through its status lifecycle.
//!
//! # 模块结构
//!
//! ```text
//! src/
//! ├── core/      # 配置、状态、HTTP 服务器
//! ├── db/        # 嵌入式 SurrealDB 存储层 (models + repository)
//! ├── orders/    # 点餐聚合、读投影、状态流转 (核心业务)
//! ├── api/       # HTTP 路由和处理器
//! └── utils/     # 错误类型、日志
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod orders;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, Server, ServerState};
pub use db::DbService;
pub use utils::{AppError, AppResult};
pub use utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
  ________          ___
 /_  __/ /_  ____ _/ (_)
  / / / __ \/ __ `/ / /
 / / / / / / /_/ / / /
/_/ /_/ /_/\__,_/_/_/
    "#
    );
}
