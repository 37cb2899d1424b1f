/// Database configuration and connection management
pub mod database;

/// Business identity (who the console is acting for) from environment variables
pub mod business;

/// Application settings loaded from salon.toml
pub mod settings;
