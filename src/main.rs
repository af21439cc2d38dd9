use log::{
    error,
    info,
};
use storefront_core::{
    error::StorefrontError,
    utils,
    APP_NAME,
};

// The only changes in here should be startup wiring, routes are mounted in lib.rs
#[rocket::main]
async fn main() -> Result<(), StorefrontError> {
    env_logger::init();
    let args = utils::get_args();
    let config = utils::rocket_config(&args)?;
    utils::start_up();
    if let Err(e) = storefront::build(config).launch().await {
        error!("{} failed to launch: {}", APP_NAME, e);
        return Err(StorefrontError::Launch(e.to_string()));
    }
    info!("{} has shut down", APP_NAME);
    Ok(())
}
