//! Resizing tiled containers.
//!
//! A tiled container never changes size on its own: whatever it gains is taken from the
//! neighbors on the resized side, and the layout engine turns the adjusted fractions back into
//! pixels afterwards.

use super::locate::{find_resize_parent, ResizeParent};
use crate::tree::{Arrange, ArrangeTarget, ContainerId, Tree};
use crate::utils::ResizeEdge;

/// Smallest width a tiled resize may leave any container with.
pub const MIN_SANE_WIDTH: i32 = 100;
/// Smallest height a tiled resize may leave any container with.
pub const MIN_SANE_HEIGHT: i32 = 60;

/// Result of [`resize_tiled`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TiledOutcome {
    /// Fractions were adjusted and the affected subtree was re-arranged.
    Applied,
    /// The delta was zero.
    Unchanged,
    /// No container up the tree can be resized along the axis.
    NoResizeParent,
    /// Applying the delta would shrink a container below the minimum size.
    TooSmall,
}

impl TiledOutcome {
    pub fn is_applied(self) -> bool {
        self == Self::Applied
    }
}

/// Grows the container found from `con` along `axis` by `amount` pixels, shrinking its
/// neighbors by the same total.
///
/// Either every affected fraction changes or none does.
pub fn resize_tiled(
    tree: &mut Tree,
    arranger: &mut dyn Arrange,
    con: ContainerId,
    axis: ResizeEdge,
    amount: i32,
) -> TiledOutcome {
    let Some(ResizeParent {
        id,
        index,
        siblings,
    }) = find_resize_parent(tree, con, axis)
    else {
        debug!("no container to resize along {axis:?} from {con:?}");
        return TiledOutcome::NoResizeParent;
    };

    if amount == 0 {
        return TiledOutcome::Unchanged;
    }

    // Left and top resizes become right and bottom resizes of the previous sibling.
    let last = siblings.len() - 1;
    let (acting, prev, next, delta) = if axis.is_axis_pair() {
        if index == 0 {
            (id, None, siblings[1], amount)
        } else if index == last {
            (siblings[index - 1], None, id, amount.saturating_neg())
        } else {
            (id, Some(siblings[index - 1]), siblings[index + 1], amount)
        }
    } else if axis == ResizeEdge::TOP || axis == ResizeEdge::LEFT {
        assert!(index > 0, "{axis:?} resize of {id:?} cannot act on the first sibling");
        (siblings[index - 1], None, id, amount.saturating_neg())
    } else {
        assert!(index < last, "{axis:?} resize of {id:?} cannot act on the last sibling");
        (id, None, siblings[index + 1], amount)
    };

    let horizontal = axis.is_horizontal();
    let min_size = if horizontal {
        MIN_SANE_WIDTH
    } else {
        MIN_SANE_HEIGHT
    };
    let share = if prev.is_some() { delta / 2 } else { delta };

    let acting_size = tree[acting].size(horizontal);
    if acting_size <= 0 || acting_size.saturating_add(delta) < min_size {
        debug!("{acting:?} would end up at {} px", acting_size.saturating_add(delta));
        return TiledOutcome::TooSmall;
    }
    for neighbor in prev.into_iter().chain([next]) {
        let size = tree[neighbor].size(horizontal);
        if size.saturating_sub(share) < min_size {
            debug!("neighbor {neighbor:?} would end up at {} px", size.saturating_sub(share));
            return TiledOutcome::TooSmall;
        }
    }

    debug!("resizing {acting:?} by {delta} px, neighbors by {share} px");

    // Both sides scale by the acting container's pixels-per-fraction, so what the neighbors
    // lose matches what it gains.
    let scale = tree[acting].fraction(horizontal) / f64::from(acting_size);
    *tree[acting].fraction_mut(horizontal) += f64::from(delta) * scale;
    for neighbor in prev.into_iter().chain([next]) {
        *tree[neighbor].fraction_mut(horizontal) -= f64::from(share) * scale;
    }

    let target = match (tree[acting].parent, tree[acting].workspace) {
        (Some(parent), _) => Some(ArrangeTarget::Container(parent)),
        (None, Some(ws)) => Some(ArrangeTarget::Workspace(ws)),
        (None, None) => None,
    };
    if let Some(target) = target {
        arranger.arrange(tree, target);
    }

    TiledOutcome::Applied
}
