//! Persisted cart format.
//!
//! Two shapes are understood: the original bare array of items and a
//! versioned envelope. Reads accept both; writes use whichever the
//! [`PersistFormat`] asks for.

use crate::cart::{Cart, CartItem, Sanitized};
use crate::config::PersistFormat;
use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

/// Schema version written by [`PersistFormat::Versioned`].
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Serialize)]
struct Envelope<'a> {
    version: u32,
    items: &'a [CartItem],
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Stored {
    Legacy(Vec<CartItem>),
    Versioned { version: u32, items: Vec<CartItem> },
}

/// Serialize a cart for storage.
pub fn encode(cart: &Cart, format: PersistFormat) -> Result<String, CommerceError> {
    let raw = match format {
        PersistFormat::Legacy => serde_json::to_string(cart.items())?,
        PersistFormat::Versioned => serde_json::to_string(&Envelope {
            version: SCHEMA_VERSION,
            items: cart.items(),
        })?,
    };
    Ok(raw)
}

/// Parse a stored cart.
///
/// The result always satisfies the cart invariants; see [`Cart::from_items`].
pub fn decode(raw: &str) -> Result<Cart, CommerceError> {
    decode_with_report(raw).map(|(cart, _)| cart)
}

/// Parse a stored cart, also reporting the fix-ups applied to it.
pub fn decode_with_report(raw: &str) -> Result<(Cart, Sanitized), CommerceError> {
    let items = match serde_json::from_str::<Stored>(raw)? {
        Stored::Legacy(items) => items,
        Stored::Versioned { version, items } if version == SCHEMA_VERSION => items,
        Stored::Versioned { version, .. } => {
            return Err(CommerceError::UnsupportedVersion(version));
        }
    };
    Ok(Cart::from_items_with_report(items))
}
