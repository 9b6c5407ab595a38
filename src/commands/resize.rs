//! The `resize` command.
//!
//! ```text
//! resize set [width] <width> [px|ppt] [height] <height> [px|ppt]
//! resize grow|shrink <direction> [<amount> [px|ppt] [or <amount> [px|ppt]]]
//! ```
//!
//! Floating containers only understand pixels. Tiled containers prefer percentages, which
//! `grow` and `shrink` take of the container's own size and `set` takes of the nearest
//! ancestor split along the same axis.

use super::{check_at_least, CmdResult, CommandContext, CommandError};
use crate::resize::{
    adjust_floating, parse_resize_axis, resize_tiled, set_floating, FloatingConstraints,
    FloatingResizeError, ResizeAmount, ResizeUnit, TiledOutcome,
};
use crate::tree::{ContainerId, Layout, Tree};
use crate::utils::{percent_of, ResizeEdge};

const USAGE: &str =
    "Expected 'resize <shrink|grow> <width|height|up|down|left|right> [<amount>] [px|ppt]'";
const SET_USAGE: &str = "Expected 'resize set [width] <width> [px|ppt]' or \
    'resize set height <height> [px|ppt]' or \
    'resize set [width] <width> [px|ppt] [height] <height> [px|ppt]'";
const ADJUST_USAGE: &str =
    "Expected 'resize grow|shrink <direction> [<amount> px|ppt [or <amount> px|ppt]]'";

const NO_ROOM: &str = "Cannot resize any further";

pub fn cmd_resize(ctx: &mut CommandContext<'_>, args: &[&str]) -> CmdResult {
    let _span = tracy_client::span!("cmd_resize");

    if ctx.tree.outputs().is_empty() {
        return Err(CommandError::invalid(
            "Can't run this command while there's no outputs connected.",
        ));
    }
    let Some(con) = ctx.tree.focused() else {
        return Err(CommandError::invalid("Cannot resize nothing"));
    };

    check_at_least("resize", args, 2)?;

    let (subcommand, args) = (args[0], &args[1..]);
    if subcommand.eq_ignore_ascii_case("set") {
        cmd_resize_set(ctx, con, args)
    } else if subcommand.eq_ignore_ascii_case("grow") {
        cmd_resize_adjust(ctx, con, args, 1)
    } else if subcommand.eq_ignore_ascii_case("shrink") {
        cmd_resize_adjust(ctx, con, args, -1)
    } else {
        Err(CommandError::invalid(USAGE))
    }
}

// =========================================================================
// resize set
// =========================================================================

fn cmd_resize_set(ctx: &mut CommandContext<'_>, con: ContainerId, args: &[&str]) -> CmdResult {
    check_at_least("resize", args, 1)?;
    let usage = || CommandError::invalid(SET_USAGE);
    let is = |arg: &str, keyword: &str| arg.eq_ignore_ascii_case(keyword);

    let mut args = args;

    let mut width = ResizeAmount::px(0);
    if args.len() >= 2 && is(args[0], "width") && !is(args[1], "height") {
        args = &args[1..];
    }
    if !is(args[0], "height") {
        let (amount, consumed) = ResizeAmount::parse(args[0], args.get(1).copied());
        if !amount.is_valid() {
            return Err(usage());
        }
        width = amount;
        args = &args[consumed..];
    }

    let mut height = ResizeAmount::px(0);
    if !args.is_empty() {
        if args.len() >= 2 && is(args[0], "height") {
            args = &args[1..];
        }
        let (amount, consumed) = ResizeAmount::parse(args[0], args.get(1).copied());
        if args.len() > consumed || !amount.is_valid() {
            return Err(usage());
        }
        height = amount;
    }

    // Dimensions without a positive amount keep their current size.
    let current = &ctx.tree[con];
    if width.amount <= 0 {
        width = ResizeAmount::px(current.width);
    }
    if height.amount <= 0 {
        height = ResizeAmount::px(current.height);
    }

    if ctx.tree.is_floating(con) {
        let constraints = floating_constraints(ctx);
        set_floating(ctx.tree, ctx.arranger, &constraints, con, width, height)
            .map_err(floating_error)
    } else {
        resize_set_tiled(ctx, con, width, height);
        Ok(())
    }
}

fn resize_set_tiled(
    ctx: &mut CommandContext<'_>,
    con: ContainerId,
    width: ResizeAmount,
    height: ResizeAmount,
) {
    for (target, axis) in [
        (width, ResizeEdge::LEFT_RIGHT),
        (height, ResizeEdge::TOP_BOTTOM),
    ] {
        if target.amount <= 0 {
            continue;
        }

        let horizontal = axis.is_horizontal();
        let pixels = match target.unit {
            ResizeUnit::Ppt | ResizeUnit::Default => {
                percent_of(percent_reference(ctx.tree, con, horizontal), target.amount)
            }
            ResizeUnit::Px => target.amount,
            ResizeUnit::Invalid => {
                debug!("ignoring {axis:?} of {con:?} with an invalid unit");
                continue;
            }
        };

        let delta = pixels.saturating_sub(ctx.tree[con].size(horizontal));
        let outcome = resize_tiled(ctx.tree, ctx.arranger, con, axis, delta);
        debug!("setting {axis:?} of {con:?} to {pixels} px: {outcome:?}");
    }
}

/// Size that percentages in `resize set` refer to: the closest ancestor split along the axis,
/// or the workspace.
fn percent_reference(tree: &Tree, con: ContainerId, horizontal: bool) -> i32 {
    let parallel = if horizontal {
        Layout::SplitH
    } else {
        Layout::SplitV
    };

    let mut parent = tree[con].parent;
    while let Some(id) = parent {
        if tree[id].layout == parallel {
            return tree[id].size(horizontal);
        }
        parent = tree[id].parent;
    }

    tree[con].workspace.map_or(0, |ws| {
        let rect = tree[ws].rect;
        if horizontal {
            rect.width
        } else {
            rect.height
        }
    })
}

// =========================================================================
// resize grow / shrink
// =========================================================================

fn cmd_resize_adjust(
    ctx: &mut CommandContext<'_>,
    con: ContainerId,
    args: &[&str],
    multiplier: i32,
) -> CmdResult {
    let usage = || CommandError::invalid(ADJUST_USAGE);

    let Some(axis) = args.first().and_then(|axis| parse_resize_axis(axis)) else {
        return Err(usage());
    };
    let mut args = &args[1..];

    let first = if args.is_empty() {
        ResizeAmount::new(ctx.config.resize.default_amount, ResizeUnit::Default)
    } else {
        let (amount, consumed) = ResizeAmount::parse(args[0], args.get(1).copied());
        if !amount.is_valid() {
            return Err(usage());
        }
        args = &args[consumed..];
        amount
    };

    if let Some((word, rest)) = args.split_first() {
        if !word.eq_ignore_ascii_case("or") || rest.is_empty() {
            return Err(usage());
        }
        args = rest;
    }

    let second = if args.is_empty() {
        None
    } else {
        let (amount, consumed) = ResizeAmount::parse(args[0], args.get(1).copied());
        if args.len() > consumed || !amount.is_valid() {
            return Err(usage());
        }
        Some(amount)
    };

    let first = first.scaled(multiplier);
    let second = second.map(|amount| amount.scaled(multiplier));
    let amounts: Vec<_> = [Some(first), second].into_iter().flatten().collect();

    if ctx.tree.is_floating(con) {
        let Some(amount) = preferred(&amounts, &[ResizeUnit::Px, ResizeUnit::Default]) else {
            return Err(CommandError::invalid(
                "Floating containers cannot use ppt measurements",
            ));
        };

        let constraints = floating_constraints(ctx);
        return adjust_floating(ctx.tree, ctx.arranger, &constraints, con, axis, amount.amount)
            .map_err(floating_error);
    }

    let amount =
        preferred(&amounts, &[ResizeUnit::Ppt, ResizeUnit::Default]).unwrap_or(first);
    resize_adjust_tiled(ctx, con, axis, amount)
}

fn resize_adjust_tiled(
    ctx: &mut CommandContext<'_>,
    con: ContainerId,
    axis: ResizeEdge,
    amount: ResizeAmount,
) -> CmdResult {
    let pixels = match amount.unit {
        ResizeUnit::Ppt | ResizeUnit::Default => {
            percent_of(ctx.tree[con].size(axis.is_horizontal()), amount.amount)
        }
        ResizeUnit::Px | ResizeUnit::Invalid => amount.amount,
    };

    match resize_tiled(ctx.tree, ctx.arranger, con, axis, pixels) {
        TiledOutcome::Applied => Ok(()),
        outcome => {
            debug!("tiled resize of {con:?} by {pixels} px did nothing: {outcome:?}");
            Err(CommandError::failure(NO_ROOM))
        }
    }
}

/// Picks the first amount with the most preferred unit.
fn preferred(amounts: &[ResizeAmount], units: &[ResizeUnit]) -> Option<ResizeAmount> {
    units
        .iter()
        .find_map(|unit| amounts.iter().find(|amount| amount.unit == *unit))
        .copied()
}

fn floating_constraints(ctx: &CommandContext<'_>) -> FloatingConstraints {
    FloatingConstraints::compute(&ctx.config.floating, ctx.tree.output_layout_box())
}

fn floating_error(err: FloatingResizeError) -> CommandError {
    match err {
        FloatingResizeError::NoRoom => CommandError::failure(NO_ROOM),
        FloatingResizeError::HiddenScratchpadPercent => {
            CommandError::failure("Cannot resize a hidden scratchpad container by ppt")
        }
        FloatingResizeError::InvalidUnit => CommandError::invalid(SET_USAGE),
    }
}
