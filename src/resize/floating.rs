//! Resizing floating containers.
//!
//! Floating geometry is changed directly. Sizes are clamped to [`FloatingConstraints`] and the
//! container is kept anchored on the edge opposite to the one being moved, or centered when
//! both edges move.

use trellis_config::{Floating, SizeLimit};

use crate::tree::{Arrange, ArrangeTarget, ContainerId, Rect, Tree};
use crate::utils::{clamp_size, percent_of, ResizeEdge};

use super::amount::{ResizeAmount, ResizeUnit};

/// Size bounds for floating containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloatingConstraints {
    pub min_width: i32,
    pub max_width: i32,
    pub min_height: i32,
    pub max_height: i32,
}

impl FloatingConstraints {
    pub const AUTOMATIC_MIN_WIDTH: i32 = 75;
    pub const AUTOMATIC_MIN_HEIGHT: i32 = 50;

    /// Resolves the configured limits.
    ///
    /// An automatic maximum is the bounding box of all outputs.
    pub fn compute(config: &Floating, layout_box: Rect) -> Self {
        let min = config.minimum_size;
        let max = config.maximum_size;

        Self {
            min_width: resolve_min(min.width, Self::AUTOMATIC_MIN_WIDTH),
            max_width: resolve_max(max.width, layout_box.width),
            min_height: resolve_min(min.height, Self::AUTOMATIC_MIN_HEIGHT),
            max_height: resolve_max(max.height, layout_box.height),
        }
    }

    fn clamp_width(&self, width: i32) -> i32 {
        clamp_size(width, self.min_width, self.max_width)
    }

    fn clamp_height(&self, height: i32) -> i32 {
        clamp_size(height, self.min_height, self.max_height)
    }
}

fn resolve_min(value: i32, automatic: i32) -> i32 {
    match value {
        SizeLimit::AUTOMATIC => automatic,
        value if value <= SizeLimit::UNLIMITED => 0,
        value => value,
    }
}

fn resolve_max(value: i32, automatic: i32) -> i32 {
    match value {
        SizeLimit::AUTOMATIC => automatic,
        value if value <= SizeLimit::UNLIMITED => i32::MAX,
        value => value,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloatingResizeError {
    /// The container is already at its limit in the requested direction.
    NoRoom,
    /// Percentages need a workspace, which hidden scratchpad containers lack.
    HiddenScratchpadPercent,
    /// The amount has an unrecognized unit.
    InvalidUnit,
}

/// Grows a floating container by `amount` pixels along `axis`.
///
/// A negative amount shrinks it. The opposite edge stays put for single-edge resizes; axis
/// pairs keep the container centered.
pub fn adjust_floating(
    tree: &mut Tree,
    arranger: &mut dyn Arrange,
    constraints: &FloatingConstraints,
    con: ContainerId,
    axis: ResizeEdge,
    amount: i32,
) -> Result<(), FloatingResizeError> {
    let container = &tree[con];

    let (mut grow_width, mut grow_height) = if axis.is_horizontal() {
        (amount, 0)
    } else {
        (0, amount)
    };
    grow_width = constraints
        .clamp_width(container.width.saturating_add(grow_width))
        .saturating_sub(container.width);
    grow_height = constraints
        .clamp_height(container.height.saturating_add(grow_height))
        .saturating_sub(container.height);

    if grow_width == 0 && grow_height == 0 {
        debug!("{con:?} cannot grow any further along {axis:?}");
        return Err(FloatingResizeError::NoRoom);
    }

    let (grow_x, grow_y) = if axis == ResizeEdge::LEFT_RIGHT {
        (-grow_width / 2, 0)
    } else if axis == ResizeEdge::TOP_BOTTOM {
        (0, -grow_height / 2)
    } else if axis == ResizeEdge::LEFT {
        (-grow_width, 0)
    } else if axis == ResizeEdge::TOP {
        (0, -grow_height)
    } else {
        (0, 0)
    };

    debug!("growing {con:?} by {grow_width}x{grow_height}, moving by {grow_x},{grow_y}");
    apply(tree, con, grow_x, grow_y, grow_width, grow_height);
    arranger.arrange(tree, ArrangeTarget::Container(con));

    Ok(())
}

/// Sets the size of a floating container, keeping it centered.
///
/// An axis is left alone when its amount is zero or less. Percentages are taken of the
/// workspace size. Nothing is changed when either axis fails to resolve, including when an
/// amount carries [`ResizeUnit::Invalid`].
pub fn set_floating(
    tree: &mut Tree,
    arranger: &mut dyn Arrange,
    constraints: &FloatingConstraints,
    con: ContainerId,
    width: ResizeAmount,
    height: ResizeAmount,
) -> Result<(), FloatingResizeError> {
    let grow_width = resolve_axis(tree, constraints, con, width, true)?;
    let grow_height = resolve_axis(tree, constraints, con, height, false)?;

    debug!("setting {con:?} size, growing by {grow_width}x{grow_height}");
    apply(
        tree,
        con,
        -grow_width / 2,
        -grow_height / 2,
        grow_width,
        grow_height,
    );
    arranger.arrange(tree, ArrangeTarget::Container(con));

    Ok(())
}

/// Converts a target size to pixels, clamps it and returns how much the container grows.
fn resolve_axis(
    tree: &Tree,
    constraints: &FloatingConstraints,
    con: ContainerId,
    target: ResizeAmount,
    horizontal: bool,
) -> Result<i32, FloatingResizeError> {
    if target.amount <= 0 {
        return Ok(0);
    }

    let container = &tree[con];
    let pixels = match target.unit {
        ResizeUnit::Ppt => {
            let Some(ws) = container.workspace else {
                return Err(FloatingResizeError::HiddenScratchpadPercent);
            };
            let ws = &tree[ws].rect;
            percent_of(if horizontal { ws.width } else { ws.height }, target.amount)
        }
        ResizeUnit::Px | ResizeUnit::Default => target.amount,
        ResizeUnit::Invalid => return Err(FloatingResizeError::InvalidUnit),
    };

    let size = if horizontal {
        constraints.clamp_width(pixels)
    } else {
        constraints.clamp_height(pixels)
    };
    Ok(size.saturating_sub(container.size(horizontal)))
}

// Unlimited maximum sizes let positions run off to the edges of the `i32` range.
fn apply(tree: &mut Tree, con: ContainerId, dx: i32, dy: i32, dw: i32, dh: i32) {
    let con = &mut tree[con];
    con.x = con.x.saturating_add(dx);
    con.y = con.y.saturating_add(dy);
    con.width = con.width.saturating_add(dw);
    con.height = con.height.saturating_add(dh);

    con.content_x = con.content_x.saturating_add(dx);
    con.content_y = con.content_y.saturating_add(dy);
    con.content_width = con.content_width.saturating_add(dw);
    con.content_height = con.content_height.saturating_add(dh);
}
