pub mod mistake_log;
pub mod schema;
pub mod toml_store;
