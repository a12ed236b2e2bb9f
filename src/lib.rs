pub mod api;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod export;
pub mod translator;

pub use api::{create_router, create_router_with_cors, router_from_config, ApiError, AppState};
pub use config::{CorsOrigins, ServerConfig};
pub use dictionary::{LoadStats, SlangDictionary, SlangEntry};
pub use error::{Result, SlangError};
pub use export::{export_js, render_js};
pub use translator::{clean_token, translate, Translation};
