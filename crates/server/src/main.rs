//! codebin server binary.
//!
//! Reads configuration from the environment (fatal when incomplete),
//! then serves until killed.

use cbn_core::Config;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    let config = Config::from_env();
    cbn_server::run(config).await
}
