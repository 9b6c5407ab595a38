//! Layout engine.
//!
//! Turns the relative fractions stored on containers into pixel geometry. Split layouts divide
//! the parent box between children proportionally to their fractions; tabbed and stacked
//! layouts give every child the whole box.

use super::{ContainerId, Layout, Rect, Tree, WorkspaceId};

/// Part of the tree to lay out again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrangeTarget {
    /// The children of a container, recursively.
    Container(ContainerId),
    /// Everything on a workspace.
    Workspace(WorkspaceId),
}

/// Re-layout trigger invoked after a resize.
pub trait Arrange {
    fn arrange(&mut self, tree: &mut Tree, target: ArrangeTarget);
}

/// Gapless, borderless split layout.
#[derive(Debug, Default, Clone, Copy)]
pub struct SplitArranger;

impl Arrange for SplitArranger {
    fn arrange(&mut self, tree: &mut Tree, target: ArrangeTarget) {
        trace!("arranging {target:?}");

        match target {
            ArrangeTarget::Container(id) => {
                let con = &tree[id];
                let (children, layout, area) = (con.children.clone(), con.layout, con.rect());
                arrange_children(tree, &children, layout, area);
            }
            ArrangeTarget::Workspace(ws) => {
                let workspace = &tree[ws];
                let tiling = workspace.tiling.clone();
                let floating = workspace.floating.clone();
                let (layout, area) = (workspace.layout, workspace.rect);

                arrange_children(tree, &tiling, layout, area);
                for id in floating {
                    self.arrange(tree, ArrangeTarget::Container(id));
                }
            }
        }
    }
}

fn arrange_children(tree: &mut Tree, children: &[ContainerId], layout: Layout, area: Rect) {
    if children.is_empty() {
        return;
    }

    match layout {
        Layout::SplitH => {
            normalize_fractions(tree, children, true);

            let mut x = area.x;
            for (idx, &id) in children.iter().enumerate() {
                let width = if idx == children.len() - 1 {
                    area.x + area.width - x
                } else {
                    (tree[id].width_fraction * f64::from(area.width)).round() as i32
                };
                tree[id].set_geometry(Rect::new(x, area.y, width, area.height));
                x += width;
            }
        }
        Layout::SplitV => {
            normalize_fractions(tree, children, false);

            let mut y = area.y;
            for (idx, &id) in children.iter().enumerate() {
                let height = if idx == children.len() - 1 {
                    area.y + area.height - y
                } else {
                    (tree[id].height_fraction * f64::from(area.height)).round() as i32
                };
                tree[id].set_geometry(Rect::new(area.x, y, area.width, height));
                y += height;
            }
        }
        Layout::Tabbed | Layout::Stacked => {
            for &id in children {
                tree[id].set_geometry(area);
            }
        }
    }

    for &id in children {
        let con = &tree[id];
        let (grandchildren, layout, area) = (con.children.clone(), con.layout, con.rect());
        arrange_children(tree, &grandchildren, layout, area);
    }
}

/// Makes the fractions of `children` along one axis positive and summing to one.
///
/// Children without a fraction get the average share of the others.
fn normalize_fractions(tree: &mut Tree, children: &[ContainerId], horizontal: bool) {
    let (assigned, total) = children
        .iter()
        .map(|&id| tree[id].fraction(horizontal))
        .filter(|fraction| *fraction > 0.)
        .fold((0usize, 0.), |(count, sum), fraction| (count + 1, sum + fraction));

    let share = if assigned == 0 {
        1.
    } else {
        total / assigned as f64
    };

    let mut sum = 0.;
    for &id in children {
        let fraction = tree[id].fraction_mut(horizontal);
        if *fraction <= 0. {
            *fraction = share;
        }
        sum += *fraction;
    }

    for &id in children {
        *tree[id].fraction_mut(horizontal) /= sum;
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::tree::{Output, Parent};

    fn workspace(layout: Layout) -> (Tree, WorkspaceId) {
        let mut tree = Tree::new();
        tree.add_output(Output {
            name: "DP-1".into(),
            rect: Rect::new(0, 0, 1000, 600),
        });
        let ws = tree.add_workspace("1", Some("DP-1"), Rect::new(0, 0, 1000, 600), layout);
        (tree, ws)
    }

    #[test]
    fn new_children_split_evenly() {
        let (mut tree, ws) = workspace(Layout::SplitH);
        let a = tree.add_container(Parent::Workspace(ws), "a");
        let b = tree.add_container(Parent::Workspace(ws), "b");
        let c = tree.add_container(Parent::Workspace(ws), "c");

        SplitArranger.arrange(&mut tree, ArrangeTarget::Workspace(ws));

        assert_eq!(tree[a].rect(), Rect::new(0, 0, 333, 600));
        assert_eq!(tree[b].rect(), Rect::new(333, 0, 333, 600));
        assert_eq!(tree[c].rect(), Rect::new(666, 0, 334, 600));
        assert_relative_eq!(tree[a].width_fraction, 1. / 3.);
        assert_eq!(tree[a].content_rect(), tree[a].rect());
    }

    #[test]
    fn fractions_are_normalized() {
        let (mut tree, ws) = workspace(Layout::SplitV);
        let a = tree.add_container(Parent::Workspace(ws), "a");
        let b = tree.add_container(Parent::Workspace(ws), "b");
        tree[a].height_fraction = 3.;
        tree[b].height_fraction = 1.;

        SplitArranger.arrange(&mut tree, ArrangeTarget::Workspace(ws));

        assert_relative_eq!(tree[a].height_fraction, 0.75);
        assert_relative_eq!(tree[b].height_fraction, 0.25);
        assert_eq!(tree[a].rect(), Rect::new(0, 0, 1000, 450));
        assert_eq!(tree[b].rect(), Rect::new(0, 450, 1000, 150));
    }

    #[test]
    fn new_child_gets_average_share() {
        let (mut tree, ws) = workspace(Layout::SplitH);
        let a = tree.add_container(Parent::Workspace(ws), "a");
        let b = tree.add_container(Parent::Workspace(ws), "b");
        tree[a].width_fraction = 0.5;
        tree[b].width_fraction = 0.5;
        let c = tree.add_container(Parent::Workspace(ws), "c");

        SplitArranger.arrange(&mut tree, ArrangeTarget::Workspace(ws));

        assert_relative_eq!(tree[c].width_fraction, 1. / 3.);
    }

    #[test]
    fn nested_and_tabbed_children() {
        let (mut tree, ws) = workspace(Layout::SplitH);
        let left = tree.add_container(Parent::Workspace(ws), "left");
        let tabs = tree.add_container(Parent::Workspace(ws), "tabs");
        tree[tabs].layout = Layout::Tabbed;
        let t1 = tree.add_container(Parent::Container(tabs), "t1");
        let t2 = tree.add_container(Parent::Container(tabs), "t2");

        SplitArranger.arrange(&mut tree, ArrangeTarget::Workspace(ws));

        assert_eq!(tree[left].rect(), Rect::new(0, 0, 500, 600));
        assert_eq!(tree[t1].rect(), Rect::new(500, 0, 500, 600));
        assert_eq!(tree[t2].rect(), tree[t1].rect());
    }

    #[test]
    fn floating_children_stay_inside_their_container() {
        let (mut tree, ws) = workspace(Layout::SplitH);
        let f = tree.add_floating(ws, "f", Rect::new(100, 100, 400, 300));
        tree[f].layout = Layout::SplitV;
        let a = tree.add_container(Parent::Container(f), "a");
        let b = tree.add_container(Parent::Container(f), "b");

        SplitArranger.arrange(&mut tree, ArrangeTarget::Workspace(ws));

        assert_eq!(tree[f].rect(), Rect::new(100, 100, 400, 300));
        assert_eq!(tree[a].rect(), Rect::new(100, 100, 400, 150));
        assert_eq!(tree[b].rect(), Rect::new(100, 250, 400, 150));
    }
}
