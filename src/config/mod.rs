/// Database configuration and connection management
pub mod database;

/// HTTP server and feed-fetch settings from environment variables
pub mod server;
