// Product repo/service layer
use crate::models::*;
use lazy_static::lazy_static;
use log::{
    debug,
    info,
};

/// Price increment between consecutive seed products
const PRICE_STEP: f64 = 10.0;

// global variable
lazy_static! {
    /// seed products, read-only once built
    static ref PRODUCTS: Vec<Product> = (1..=crate::SEED_COUNT)
        .map(|i| Product::new(format!("Product{}", i), f64::from(i) * PRICE_STEP))
        .collect();
}

/// Build the seed products up front so the first request doesn't pay for it
pub fn init() {
    lazy_static::initialize(&PRODUCTS);
    info!("seeded {} products", PRODUCTS.len());
}

/// Product lookup for all.
///
/// Hands out a view of the seed data in creation order, never a copy.
pub fn find_all() -> &'static [Product] {
    debug!("find all products");
    &PRODUCTS
}

// Tests
//-------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_all_test() {
        init();
        let products = find_all();
        assert_eq!(crate::SEED_COUNT as usize, products.len());
        for (n, p) in products.iter().enumerate() {
            let i = n + 1;
            assert_eq!(format!("Product{}", i), p.name);
            assert_eq!(i as f64 * 10.0, p.price);
        }
    }

    #[test]
    fn first_and_last_test() {
        let products = find_all();
        let expected_first = Product::new(String::from("Product1"), 10.0);
        let expected_last = Product::new(String::from("Product10"), 100.0);
        assert_eq!(Some(&expected_first), products.first());
        assert_eq!(Some(&expected_last), products.last());
    }

    #[test]
    fn find_all_is_same_view_test() {
        let first = find_all();
        let second = find_all();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first, second);
    }
}
