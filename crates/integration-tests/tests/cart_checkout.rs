//! Cart totals against the real merchandise catalog.

#![allow(clippy::unwrap_used)]

use afroman_cart::Cart;
use afroman_core::MerchItemId;
use rust_decimal_macros::dec;

fn item(id: &str) -> afroman_core::MerchItem {
    afroman_catalog::merch_by_id(&MerchItemId::new(id))
        .unwrap()
        .clone()
}

#[test]
fn catalog_cart_totals_are_exact() {
    let mut cart = Cart::new();

    // Two black tees (L) and a white hoodie (2XL).
    cart.add(item("tshirt-black"), "L");
    cart.add(item("tshirt-black"), "L");
    cart.add(item("hoodie-white"), "2XL");

    assert_eq!(cart.len(), 2);
    assert_eq!(cart.total_items(), 3);
    assert_eq!(cart.total_price(), dec!(129.97));
}

#[test]
fn size_validation_happens_before_the_cart() {
    let tee = item("tshirt-white");
    assert!(tee.offers_size("3XL"));
    assert!(!tee.offers_size("XS"));

    // The cart itself takes the caller's word for the size.
    let mut cart = Cart::new();
    cart.add(tee, "XS");
    assert_eq!(cart.total_items(), 1);
}

#[test]
fn cart_state_round_trips_through_json() {
    let mut cart = Cart::new();
    cart.add(item("hoodie-black"), "M");
    cart.set_quantity(&MerchItemId::new("hoodie-black"), "M", 4);

    let json = serde_json::to_string(&cart).unwrap();
    let restored: Cart = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, cart);
    assert_eq!(restored.total_price(), dec!(199.96));
}
