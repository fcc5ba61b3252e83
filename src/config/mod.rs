/// Database configuration and connection management
pub mod database;

/// Category catalog loading from config.toml
pub mod categories;
