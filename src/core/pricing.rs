use crate::domain::model::InventoryItem;

/// Exchanges the unit prices of two items in place. Self-inverse.
pub fn swap_prices(a: &mut InventoryItem, b: &mut InventoryItem) {
    std::mem::swap(&mut a.unit_price, &mut b.unit_price);
}
