pub mod controller;

use rocket::{
    routes,
    Build,
    Rocket,
};

/// Assemble the server. Routes are registered here and nowhere else.
pub fn build(config: rocket::Config) -> Rocket<Build> {
    rocket::custom(&config).mount(
        "/",
        routes![controller::get_all_products, controller::get_all_users],
    )
}
