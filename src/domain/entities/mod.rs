//! Domain Entities
//!
//! - `MenuRecord` - One parsed line of the indented item list
//! - `MenuTree` - Arena owning every `Menu` and `Item`

mod menu;
mod record;

pub use menu::{Ancestors, Item, ItemId, Menu, MenuId, MenuTree};
pub use record::MenuRecord;
