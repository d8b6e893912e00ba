pub mod api;
pub mod config;
pub mod http;
pub mod store;

pub use self::config::Config;
