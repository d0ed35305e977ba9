//! Cart commands.
//!
//! The cart is persisted as JSON under the state directory so a shopping
//! session spans invocations. Size validation against the catalog happens
//! here, before the cart is touched - the cart itself accepts any size.

use std::fs;
use std::path::{Path, PathBuf};

use afroman_cart::Cart;
use afroman_core::MerchItemId;

use super::CliError;

const CART_FILE: &str = "cart.json";

fn cart_path(state_dir: &Path) -> PathBuf {
    state_dir.join(CART_FILE)
}

fn load_cart(state_dir: &Path) -> Result<Cart, CliError> {
    let path = cart_path(state_dir);
    if path.exists() {
        Ok(serde_json::from_str(&fs::read_to_string(path)?)?)
    } else {
        Ok(Cart::new())
    }
}

fn save_cart(state_dir: &Path, cart: &Cart) -> Result<(), CliError> {
    fs::create_dir_all(state_dir)?;
    fs::write(cart_path(state_dir), serde_json::to_string_pretty(cart)?)?;
    Ok(())
}

/// Resolve an item ID against the catalog and check the size is offered.
fn resolve(item: &str, size: &str) -> Result<&'static afroman_core::MerchItem, CliError> {
    let id = MerchItemId::new(item);
    let item = afroman_catalog::merch_by_id(&id)
        .ok_or_else(|| CliError::UnknownItem(id.to_string()))?;
    if !item.offers_size(size) {
        return Err(CliError::SizeNotOffered {
            item: item.id.to_string(),
            size: size.to_owned(),
        });
    }
    Ok(item)
}

#[allow(clippy::print_stdout)]
pub fn add(state_dir: &Path, item: &str, size: &str) -> Result<(), CliError> {
    let merch = resolve(item, size)?;
    let mut cart = load_cart(state_dir)?;
    cart.add(merch.clone(), size);
    save_cart(state_dir, &cart)?;
    println!("added {} ({size}) - {} items in cart", merch.name, cart.total_items());
    Ok(())
}

#[allow(clippy::print_stdout)]
pub fn remove(state_dir: &Path, item: &str, size: &str) -> Result<(), CliError> {
    let mut cart = load_cart(state_dir)?;
    cart.remove(&MerchItemId::new(item), size);
    save_cart(state_dir, &cart)?;
    println!("removed {item} ({size})");
    Ok(())
}

#[allow(clippy::print_stdout)]
pub fn set_quantity(state_dir: &Path, item: &str, size: &str, quantity: u32) -> Result<(), CliError> {
    let mut cart = load_cart(state_dir)?;
    cart.set_quantity(&MerchItemId::new(item), size, quantity);
    save_cart(state_dir, &cart)?;
    println!("{item} ({size}) set to {quantity}");
    Ok(())
}

#[allow(clippy::print_stdout)]
pub fn clear(state_dir: &Path) -> Result<(), CliError> {
    let mut cart = load_cart(state_dir)?;
    cart.clear();
    save_cart(state_dir, &cart)?;
    println!("cart cleared");
    Ok(())
}

#[allow(clippy::print_stdout)]
pub fn show(state_dir: &Path) -> Result<(), CliError> {
    let cart = load_cart(state_dir)?;

    if cart.is_empty() {
        println!("cart is empty");
        return Ok(());
    }

    for line in cart.lines() {
        println!(
            "{} ({}) x{} - ${:.2}",
            line.item.name,
            line.size,
            line.quantity,
            line.subtotal()
        );
    }
    println!("total: ${:.2} ({} items)", cart.total_price(), cart.total_items());
    Ok(())
}
