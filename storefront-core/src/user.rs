use crate::models::*;
use lazy_static::lazy_static;
use log::{
    debug,
    info,
};

lazy_static! {
    /// seed users, read-only once built
    static ref USERS: Vec<User> = (1..=crate::SEED_COUNT)
        .map(|i| User::new(format!("User{}", i), format!("user{}@example.com", i)))
        .collect();
}

/// Build the seed users up front
pub fn init() {
    lazy_static::initialize(&USERS);
    info!("seeded {} users", USERS.len());
}

/// User lookup for all.
///
/// Hands out a view of the seed data in creation order, never a copy.
pub fn find_all() -> &'static [User] {
    debug!("find all users");
    &USERS
}

// Tests
//-------------------------------------------------------------------------------
