mod client;
mod config;
mod models;
mod state_repo;

pub use client::PostgresClient;
pub use config::PostgresConfig;
pub use models::DeviceStateRow;
pub use state_repo::PostgresDeviceStateRepository;
