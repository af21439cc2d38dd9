use log::debug;
use rocket::{
    get,
    http::Status,
    response::status::Custom,
    serde::json::Json,
};

use storefront_core::*;

// JSON APIs

/// Get all products
///
/// Protected: false
#[get("/get-all-products")]
pub async fn get_all_products() -> Custom<Json<&'static [models::Product]>> {
    debug!("GET /get-all-products");
    Custom(Status::Ok, Json(product::find_all()))
}

/// Get all users
///
/// Protected: false
#[get("/get-all-users")]
pub async fn get_all_users() -> Custom<Json<&'static [models::User]>> {
    debug!("GET /get-all-users");
    Custom(Status::Ok, Json(user::find_all()))
}

// Tests
//-------------------------------------------------------------------------------
