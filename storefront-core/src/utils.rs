//! Startup helpers and config lookups
use crate::{
    args,
    error::StorefrontError,
    product,
    user,
};
use clap::Parser;
use log::info;
use rocket::config::Ident;
use std::net::IpAddr;

/// Parse the process command line
pub fn get_args() -> args::Args {
    args::Args::parse()
}

/// app bind address
pub fn get_app_address(args: &args::Args) -> Result<IpAddr, StorefrontError> {
    args.address
        .parse::<IpAddr>()
        .map_err(|_| StorefrontError::InvalidAddress(String::from(&args.address)))
}

/// app port
pub fn get_app_port(args: &args::Args) -> u16 {
    args.port
}

/// Rocket's debug config with our bind address and port
pub fn rocket_config(args: &args::Args) -> Result<rocket::Config, StorefrontError> {
    Ok(rocket::Config {
        ident: Ident::none(),
        address: get_app_address(args)?,
        port: get_app_port(args),
        ..rocket::Config::debug_default()
    })
}

/// Put all app pre-checks here
pub fn start_up() {
    info!("{} is starting up", crate::APP_NAME);
    product::init();
    user::init();
    info!("{} is online", crate::APP_NAME);
}

// Tests
//-------------------------------------------------------------------------------
