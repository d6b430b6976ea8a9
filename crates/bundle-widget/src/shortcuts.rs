//! Digit-key shortcuts.
//!
//! Keys `1`..`9` map to the first nine catalog positions.

use bundle_commerce::catalog::Catalog;
use bundle_commerce::ProductId;

const MAX_SHORTCUTS: usize = 9;

/// Digit key bound to a catalog position, if any.
pub fn shortcut_for_position(position: usize) -> Option<char> {
    if position >= MAX_SHORTCUTS {
        return None;
    }
    char::from_digit(position as u32 + 1, 10)
}

/// Product toggled by a key press, if the key is bound.
pub fn product_for_key(catalog: &Catalog, key: char) -> Option<ProductId> {
    let digit = key.to_digit(10)? as usize;
    if digit == 0 {
        return None;
    }
    catalog.at(digit - 1).map(|product| product.id)
}
