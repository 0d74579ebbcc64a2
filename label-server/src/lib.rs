//! Label Server - thrift store label designer backend
//!
//! - **Templates** (`api/templates`): saved label payloads in SQLite
//! - **Print queue** (`api/print_queue`): session queue driving the
//!   `label-printer` core, composed as JSON or as a print document
//! - **Health** (`api/health`)
//!
//! ```text
//! label-server/src/
//! ├── core/     # config, state, server, errors
//! ├── api/      # HTTP routes and handlers
//! ├── db/       # pool, migrations, repositories
//! └── utils/    # error mapping, logging, validation
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod utils;

pub use crate::core::{Config, Server, ServerState, build_router};
pub use utils::{AppError, AppResult};
pub use utils::{ApiResponse, ErrorCategory, ErrorCode};
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env` and initialise logging from `LOG_LEVEL` / `LOG_DIR`
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());
    Ok(())
}
