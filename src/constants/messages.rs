//! Success message constants used throughout the application.

pub const MSG_HEALTH_STATUS: &str = "OK";
pub const MSG_SERVER_RUNNING: &str = "Server is running";
