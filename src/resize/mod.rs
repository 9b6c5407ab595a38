//! Resize core.
//!
//! ```text
//! resize/
//! ├── mod.rs      - direction keywords
//! ├── amount.rs   - amounts with units
//! ├── locate.rs   - finding the container to resize
//! ├── tiled.rs    - moving size between tiled siblings
//! └── floating.rs - floating geometry and size constraints
//! ```
//!
//! Tiled and floating containers resize very differently. Tiled containers trade size with
//! their neighbors through layout fractions and never go below a minimum sane size, while
//! floating containers change their own geometry, clamped to the configured limits.

use crate::utils::ResizeEdge;

pub mod amount;
pub mod floating;
pub mod locate;
pub mod tiled;

pub use amount::{ResizeAmount, ResizeUnit};
pub use floating::{adjust_floating, set_floating, FloatingConstraints, FloatingResizeError};
pub use locate::{find_resize_parent, ResizeParent};
pub use tiled::{resize_tiled, TiledOutcome, MIN_SANE_HEIGHT, MIN_SANE_WIDTH};

/// Parses a resize direction keyword.
pub fn parse_resize_axis(axis: &str) -> Option<ResizeEdge> {
    let is = |name: &str| axis.eq_ignore_ascii_case(name);

    if is("width") || is("horizontal") {
        Some(ResizeEdge::LEFT_RIGHT)
    } else if is("height") || is("vertical") {
        Some(ResizeEdge::TOP_BOTTOM)
    } else if is("up") {
        Some(ResizeEdge::TOP)
    } else if is("down") {
        Some(ResizeEdge::BOTTOM)
    } else if is("left") {
        Some(ResizeEdge::LEFT)
    } else if is("right") {
        Some(ResizeEdge::RIGHT)
    } else {
        None
    }
}
