//! Seed data records served as json

use rocket::serde::{
    Deserialize,
    Serialize,
};

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct Product {
    pub name: String,
    pub price: f64,
}

impl Product {
    pub fn new(name: String, price: f64) -> Product {
        Product { name, price }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct User {
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(name: String, email: String) -> User {
        User { name, email }
    }
}

// Tests
//-------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn product_json_shape_test() {
        let product = Product::new(String::from("Product3"), 30.0);
        let actual = serde_json::to_value(&product).unwrap();
        let expected = json!({ "name": "Product3", "price": 30.0 });
        assert_eq!(expected, actual);
    }

    #[test]
    fn user_json_shape_test() {
        let user = User::new(String::from("User3"), String::from("user3@example.com"));
        let actual = serde_json::to_string(&user).unwrap();
        let expected = r#"{"name":"User3","email":"user3@example.com"}"#;
        assert_eq!(expected, actual);
    }

    #[test]
    fn product_round_trip_test() {
        let raw = r#"{"name":"Product7","price":70.0}"#;
        let actual: Product = serde_json::from_str(raw).unwrap();
        assert_eq!(Product::new(String::from("Product7"), 70.0), actual);
    }
}
