//! Finding the container that takes part in a tiled resize.

use crate::tree::{ContainerId, Layout, Tree};
use crate::utils::ResizeEdge;

/// Container chosen to act in a tiled resize, with its position among its siblings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeParent {
    pub id: ContainerId,
    pub index: usize,
    pub siblings: Vec<ContainerId>,
}

/// Walks up from `con` (inclusive) to the nearest container that can be resized along `axis`.
///
/// A candidate must sit in a split parallel to the axis, have at least one sibling, and have a
/// sibling on the side being resized: a `TOP` or `LEFT` resize needs one before it, a `BOTTOM`
/// or `RIGHT` resize needs one after it. Axis pairs accept either.
///
/// Floating containers end the walk, since their siblings are independent floating windows.
pub fn find_resize_parent(
    tree: &Tree,
    con: ContainerId,
    axis: ResizeEdge,
) -> Option<ResizeParent> {
    let parallel = if axis.is_horizontal() {
        Layout::SplitH
    } else {
        Layout::SplitV
    };
    let allow_first = axis != ResizeEdge::TOP && axis != ResizeEdge::LEFT;
    let allow_last = axis != ResizeEdge::BOTTOM && axis != ResizeEdge::RIGHT;

    let mut current = Some(con);
    while let Some(id) = current {
        if tree.is_floating(id) {
            trace!("stopping at floating {id:?}");
            return None;
        }

        if let Some(siblings) = tree.siblings(id) {
            let index = tree.sibling_index(id)?;
            let len = siblings.len();
            if tree.parent_layout(id) == Some(parallel)
                && len > 1
                && (allow_first || index > 0)
                && (allow_last || index < len - 1)
            {
                return Some(ResizeParent {
                    id,
                    index,
                    siblings: siblings.to_vec(),
                });
            }
        }

        current = tree[id].parent;
    }

    None
}
