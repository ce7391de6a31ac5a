//! Display Port
//!
//! One surface per menu, created lazily by the implementation on first map.

use crate::domain::entities::{MenuId, MenuTree};
use crate::error::PieResult;

/// The windowing side of a pie-menu session
pub trait MenuDisplay {
    /// Show the surface of `menu` at its computed position
    fn map(&mut self, tree: &MenuTree, menu: MenuId) -> PieResult<()>;

    /// Hide the surface of `menu`
    fn unmap(&mut self, tree: &MenuTree, menu: MenuId) -> PieResult<()>;

    /// Move the pointer to the centre of `menu`
    fn warp_pointer(&mut self, tree: &MenuTree, menu: MenuId) -> PieResult<()>;

    /// Paint `current` and every ancestor of it
    fn redraw(&mut self, tree: &MenuTree, current: MenuId) -> PieResult<()>;
}
