//! Theme roles
//!
//! Every brand theme exposes the same fixed roles, so components written
//! against role names work under every brand:
//! - Colors (primary, header/footer chrome, text, links, buttons)
//! - Font families (primary, secondary, display)
//! - Spacing multiplier
//! - Border radii

mod color;
mod font;
mod radius;
mod spacing;

pub use color::*;
pub use font::*;
pub use radius::*;
pub use spacing::*;
