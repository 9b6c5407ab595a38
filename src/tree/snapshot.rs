//! Nested, serializable form of the tree.
//!
//! The arena is convenient to mutate but awkward to write by hand, so trees are loaded from
//! and dumped to this nested shape instead.

use anyhow::{bail, ensure};
use serde::{Deserialize, Serialize};

use super::{ContainerId, Layout, Output, Parent, Rect, Tree};

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeSnapshot {
    pub outputs: Vec<Output>,
    #[serde(default)]
    pub workspaces: Vec<WorkspaceSnapshot>,
    /// Hidden scratchpad containers.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scratchpad: Vec<ContainerSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceSnapshot {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(flatten)]
    pub rect: Rect,
    #[serde(default)]
    pub layout: Layout,
    #[serde(default)]
    pub tiling: Vec<ContainerSnapshot>,
    #[serde(default)]
    pub floating: Vec<ContainerSnapshot>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerSnapshot {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub focused: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub scratchpad: bool,
    #[serde(default)]
    pub layout: Layout,
    #[serde(flatten)]
    pub rect: Rect,
    /// Drawable region. Defaults to the outer geometry.
    #[serde(default)]
    pub content: Option<Rect>,
    #[serde(default)]
    pub width_fraction: f64,
    #[serde(default)]
    pub height_fraction: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ContainerSnapshot>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl Tree {
    pub fn from_snapshot(snapshot: &TreeSnapshot) -> anyhow::Result<Self> {
        let mut tree = Tree::new();
        for output in &snapshot.outputs {
            tree.add_output(output.clone());
        }

        let mut focused = Vec::new();
        for ws_snapshot in &snapshot.workspaces {
            if let Some(output) = &ws_snapshot.output {
                ensure!(
                    tree.outputs().iter().any(|o| &o.name == output),
                    "workspace {:?} is on unknown output {output:?}",
                    ws_snapshot.name
                );
            }
            if tree.find_workspace(&ws_snapshot.name).is_some() {
                bail!("duplicate workspace {:?}", ws_snapshot.name);
            }

            let ws = tree.add_workspace(
                ws_snapshot.name.clone(),
                ws_snapshot.output.as_deref(),
                ws_snapshot.rect,
                ws_snapshot.layout,
            );
            for con in &ws_snapshot.tiling {
                tree.load_container(Parent::Workspace(ws), con, &mut focused);
            }
            for con in &ws_snapshot.floating {
                let id = if con.scratchpad {
                    tree.add_scratchpad(Some(ws), con.name.clone(), con.rect)
                } else {
                    tree.add_floating(ws, con.name.clone(), con.rect)
                };
                tree.load_fields(id, con, &mut focused);
            }
        }

        for con in &snapshot.scratchpad {
            let id = tree.add_scratchpad(None, con.name.clone(), con.rect);
            tree.load_fields(id, con, &mut focused);
        }

        ensure!(
            focused.len() <= 1,
            "only one container can be focused, got {}",
            focused.len()
        );
        tree.set_focused(focused.pop());

        Ok(tree)
    }

    fn load_container(
        &mut self,
        parent: Parent,
        snapshot: &ContainerSnapshot,
        focused: &mut Vec<ContainerId>,
    ) {
        let id = self.add_container(parent, snapshot.name.clone());
        self.load_fields(id, snapshot, focused);
    }

    fn load_fields(
        &mut self,
        id: ContainerId,
        snapshot: &ContainerSnapshot,
        focused: &mut Vec<ContainerId>,
    ) {
        let con = &mut self[id];
        con.layout = snapshot.layout;
        con.set_geometry(snapshot.rect);
        if let Some(content) = snapshot.content {
            con.content_x = content.x;
            con.content_y = content.y;
            con.content_width = content.width;
            con.content_height = content.height;
        }
        con.width_fraction = snapshot.width_fraction;
        con.height_fraction = snapshot.height_fraction;

        if snapshot.focused {
            focused.push(id);
        }

        for child in &snapshot.children {
            self.load_container(Parent::Container(id), child, focused);
        }
    }

    pub fn snapshot(&self) -> TreeSnapshot {
        let workspaces = self
            .workspaces()
            .map(|(_, workspace)| WorkspaceSnapshot {
                name: workspace.name.clone(),
                output: workspace.output.clone(),
                rect: workspace.rect,
                layout: workspace.layout,
                tiling: self.snapshot_list(&workspace.tiling),
                floating: self.snapshot_list(&workspace.floating),
            })
            .collect();

        let hidden: Vec<_> = self
            .scratchpad()
            .iter()
            .copied()
            .filter(|id| self.is_scratchpad_hidden(*id))
            .collect();

        TreeSnapshot {
            outputs: self.outputs().to_vec(),
            workspaces,
            scratchpad: self.snapshot_list(&hidden),
        }
    }

    fn snapshot_list(&self, ids: &[ContainerId]) -> Vec<ContainerSnapshot> {
        ids.iter().map(|id| self.snapshot_container(*id)).collect()
    }

    fn snapshot_container(&self, id: ContainerId) -> ContainerSnapshot {
        let con = &self[id];
        ContainerSnapshot {
            name: con.name.clone(),
            focused: self.focused() == Some(id),
            scratchpad: con.scratchpad,
            layout: con.layout,
            rect: con.rect(),
            content: Some(con.content_rect()),
            width_fraction: con.width_fraction,
            height_fraction: con.height_fraction,
            children: self.snapshot_list(&con.children),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TREE: &str = r#"{
        "outputs": [{ "name": "DP-1", "x": 0, "y": 0, "width": 1000, "height": 600 }],
        "workspaces": [{
            "name": "1",
            "output": "DP-1",
            "x": 0, "y": 0, "width": 1000, "height": 600,
            "layout": "splith",
            "tiling": [
                { "name": "a", "x": 0, "y": 0, "width": 500, "height": 600, "width_fraction": 0.5 },
                {
                    "name": "right",
                    "layout": "splitv",
                    "x": 500, "y": 0, "width": 500, "height": 600,
                    "width_fraction": 0.5,
                    "children": [
                        { "name": "b", "focused": true },
                        { "name": "c" }
                    ]
                }
            ],
            "floating": [
                {
                    "name": "f",
                    "x": 100, "y": 100, "width": 300, "height": 200,
                    "content": { "x": 102, "y": 122, "width": 296, "height": 176 }
                }
            ]
        }],
        "scratchpad": [{ "name": "s", "x": 0, "y": 0, "width": 640, "height": 480 }]
    }"#;

    fn load() -> Tree {
        let snapshot: TreeSnapshot = serde_json::from_str(TREE).unwrap();
        Tree::from_snapshot(&snapshot).unwrap()
    }

    #[test]
    fn load_nested_tree() {
        let tree = load();
        tree.verify_invariants();

        let b = tree.find_by_name("b").unwrap();
        let right = tree.find_by_name("right").unwrap();
        assert_eq!(tree.focused(), Some(b));
        assert_eq!(tree[b].parent, Some(right));
        assert_eq!(tree.parent_layout(b), Some(Layout::SplitV));

        let f = tree.find_by_name("f").unwrap();
        assert!(tree.is_floating(f));
        assert_eq!(tree[f].content_rect(), Rect::new(102, 122, 296, 176));

        let s = tree.find_by_name("s").unwrap();
        assert!(tree.is_scratchpad_hidden(s));
    }

    #[test]
    fn snapshot_round_trips() {
        let tree = load();
        let snapshot = tree.snapshot();
        let reloaded = Tree::from_snapshot(&snapshot).unwrap();
        assert_eq!(reloaded.snapshot(), snapshot);
        assert_eq!(snapshot.scratchpad.len(), 1);
    }

    #[test]
    fn unknown_output_is_rejected() {
        let snapshot = TreeSnapshot {
            outputs: vec![],
            workspaces: vec![WorkspaceSnapshot {
                name: "1".into(),
                output: Some("DP-9".into()),
                rect: Rect::new(0, 0, 100, 100),
                layout: Layout::SplitH,
                tiling: vec![],
                floating: vec![],
            }],
            scratchpad: vec![],
        };

        let err = Tree::from_snapshot(&snapshot).unwrap_err();
        assert!(err.to_string().contains("unknown output"));
    }

    #[test]
    fn two_focused_containers_are_rejected() {
        let focused = ContainerSnapshot {
            focused: true,
            ..Default::default()
        };
        let snapshot = TreeSnapshot {
            outputs: vec![],
            workspaces: vec![WorkspaceSnapshot {
                name: "1".into(),
                output: None,
                rect: Rect::new(0, 0, 100, 100),
                layout: Layout::SplitH,
                tiling: vec![focused.clone(), focused],
                floating: vec![],
            }],
            scratchpad: vec![],
        };

        assert!(Tree::from_snapshot(&snapshot).is_err());
    }
}
