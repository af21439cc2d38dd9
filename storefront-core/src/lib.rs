pub mod args;
pub mod error;
pub mod models;
pub mod product;
pub mod user;
pub mod utils;

pub const APP_NAME: &str = "storefront";

/// Number of records seeded for each entity at startup
pub const SEED_COUNT: u32 = 10;
/// Default bind address, same as rocket's
pub const DEFAULT_APP_ADDRESS: &str = "127.0.0.1";
/// Default app port, same as rocket's
pub const DEFAULT_APP_PORT: u16 = 8000;
