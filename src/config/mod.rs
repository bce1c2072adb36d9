use std::env;

use lazy_static::lazy_static;

lazy_static! {
    pub static ref CONFIG: Config = Config::from_env();
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub mongodb_uri: String,
    pub database_name: String,
    pub rate_limit_seconds_per_request: u64,
    pub rate_limit_burst_size: u32,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        Self {
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "4000".to_string())
                .parse()
                .expect("SERVER_PORT must be a valid number"),
            // MONGO_URI is the name older deployments use
            mongodb_uri: env::var("MONGODB_URI")
                .or_else(|_| env::var("MONGO_URI"))
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            database_name: env::var("DATABASE_NAME")
                .unwrap_or_else(|_| "carrier_directory".to_string()),
            rate_limit_seconds_per_request: env::var("RATE_LIMIT_SECONDS_PER_REQUEST")
                .unwrap_or_else(|_| "1".to_string())
                .parse()
                .expect("RATE_LIMIT_SECONDS_PER_REQUEST must be a valid number"),
            rate_limit_burst_size: env::var("RATE_LIMIT_BURST_SIZE")
                .unwrap_or_else(|_| "60".to_string())
                .parse()
                .expect("RATE_LIMIT_BURST_SIZE must be a valid number"),
        }
    }
}
