pub(crate) mod tile;

// Re-exports to keep crate::ui::{fn} paths short
pub(crate) use tile::tile;
