//! Container tree.
//!
//! The tree follows the i3 model. Outputs hold workspaces, workspaces hold two lists of
//! top-level containers (tiling and floating), and containers hold child containers laid out
//! according to their [`Layout`].
//!
//! ```text
//! tree/
//! ├── mod.rs      - Tree arena, ids, sibling and parent queries
//! ├── arrange.rs  - layout engine turning fractions into pixels
//! └── snapshot.rs - nested serializable form of the tree
//! ```
//!
//! Nodes live in an arena and refer to each other by index. A container points up to its
//! parent (or to nothing when it sits directly on a workspace) and down to its children.
//! Nodes are never removed, so ids stay valid for the lifetime of the tree.

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

pub mod arrange;
pub mod snapshot;

pub use arrange::{Arrange, ArrangeTarget, SplitArranger};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContainerId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WorkspaceId(usize);

/// Layout mode of a container or workspace.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Children arranged left to right.
    #[default]
    SplitH,
    /// Children arranged top to bottom.
    SplitV,
    /// Children stacked with a tab bar.
    Tabbed,
    /// Children stacked with title bars.
    Stacked,
}

/// Axis-aligned rectangle in logical pixels.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Smallest rectangle containing both `self` and `other`.
    pub fn union(self, other: Rect) -> Rect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = (self.x + self.width).max(other.x + other.width);
        let bottom = (self.y + self.height).max(other.y + other.height);
        Rect::new(x, y, right - x, bottom - y)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Output {
    pub name: String,
    #[serde(flatten)]
    pub rect: Rect,
}

#[derive(Debug, Clone)]
pub struct Workspace {
    pub name: String,
    /// Name of the output showing this workspace.
    pub output: Option<String>,
    pub rect: Rect,
    /// Layout of the top-level tiling containers.
    pub layout: Layout,
    pub tiling: Vec<ContainerId>,
    pub floating: Vec<ContainerId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    pub name: String,
    pub parent: Option<ContainerId>,
    /// Owning workspace. `None` for containers hidden in the scratchpad.
    pub workspace: Option<WorkspaceId>,
    pub children: Vec<ContainerId>,
    pub layout: Layout,

    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,

    pub content_x: i32,
    pub content_y: i32,
    pub content_width: i32,
    pub content_height: i32,

    /// Share of the parent width, relative to the siblings.
    ///
    /// Zero or less means the layout engine should pick a share.
    pub width_fraction: f64,
    /// Share of the parent height, relative to the siblings.
    pub height_fraction: f64,

    /// Whether the container belongs to the scratchpad.
    pub scratchpad: bool,
}

impl Container {
    fn new(name: String, parent: Option<ContainerId>, workspace: Option<WorkspaceId>) -> Self {
        Self {
            name,
            parent,
            workspace,
            children: Vec::new(),
            layout: Layout::default(),
            x: 0,
            y: 0,
            width: 0,
            height: 0,
            content_x: 0,
            content_y: 0,
            content_width: 0,
            content_height: 0,
            width_fraction: 0.,
            height_fraction: 0.,
            scratchpad: false,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn content_rect(&self) -> Rect {
        Rect::new(
            self.content_x,
            self.content_y,
            self.content_width,
            self.content_height,
        )
    }

    /// Sets both the outer and the content geometry.
    pub fn set_geometry(&mut self, rect: Rect) {
        self.x = rect.x;
        self.y = rect.y;
        self.width = rect.width;
        self.height = rect.height;
        self.content_x = rect.x;
        self.content_y = rect.y;
        self.content_width = rect.width;
        self.content_height = rect.height;
    }

    /// Pixel size along the horizontal or vertical axis.
    pub fn size(&self, horizontal: bool) -> i32 {
        if horizontal {
            self.width
        } else {
            self.height
        }
    }

    /// Layout fraction along the horizontal or vertical axis.
    pub fn fraction(&self, horizontal: bool) -> f64 {
        if horizontal {
            self.width_fraction
        } else {
            self.height_fraction
        }
    }

    pub fn fraction_mut(&mut self, horizontal: bool) -> &mut f64 {
        if horizontal {
            &mut self.width_fraction
        } else {
            &mut self.height_fraction
        }
    }
}

/// Where to attach a new tiled container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parent {
    Workspace(WorkspaceId),
    Container(ContainerId),
}

#[derive(Debug, Default, Clone)]
pub struct Tree {
    outputs: Vec<Output>,
    workspaces: Vec<Workspace>,
    containers: Vec<Container>,
    /// Scratchpad containers, shown or hidden.
    scratchpad: Vec<ContainerId>,
    focused: Option<ContainerId>,
}

impl Tree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn outputs(&self) -> &[Output] {
        &self.outputs
    }

    pub fn workspaces(&self) -> impl Iterator<Item = (WorkspaceId, &Workspace)> + '_ {
        self.workspaces
            .iter()
            .enumerate()
            .map(|(idx, ws)| (WorkspaceId(idx), ws))
    }

    pub fn containers(&self) -> impl Iterator<Item = (ContainerId, &Container)> + '_ {
        self.containers
            .iter()
            .enumerate()
            .map(|(idx, con)| (ContainerId(idx), con))
    }

    pub fn scratchpad(&self) -> &[ContainerId] {
        &self.scratchpad
    }

    pub fn focused(&self) -> Option<ContainerId> {
        self.focused
    }

    pub fn set_focused(&mut self, id: Option<ContainerId>) {
        self.focused = id;
    }

    pub fn find_by_name(&self, name: &str) -> Option<ContainerId> {
        self.containers()
            .find(|(_, con)| con.name == name)
            .map(|(id, _)| id)
    }

    pub fn find_workspace(&self, name: &str) -> Option<WorkspaceId> {
        self.workspaces()
            .find(|(_, ws)| ws.name == name)
            .map(|(id, _)| id)
    }

    // =========================================================================
    // Construction
    // =========================================================================

    pub fn add_output(&mut self, output: Output) {
        self.outputs.push(output);
    }

    pub fn add_workspace(
        &mut self,
        name: impl Into<String>,
        output: Option<&str>,
        rect: Rect,
        layout: Layout,
    ) -> WorkspaceId {
        let id = WorkspaceId(self.workspaces.len());
        self.workspaces.push(Workspace {
            name: name.into(),
            output: output.map(String::from),
            rect,
            layout,
            tiling: Vec::new(),
            floating: Vec::new(),
        });
        id
    }

    /// Appends a tiled container to a workspace or to another container.
    pub fn add_container(&mut self, parent: Parent, name: impl Into<String>) -> ContainerId {
        let id = ContainerId(self.containers.len());
        let con = match parent {
            Parent::Workspace(ws) => {
                self.workspaces[ws.0].tiling.push(id);
                Container::new(name.into(), None, Some(ws))
            }
            Parent::Container(parent) => {
                let workspace = self[parent].workspace;
                self[parent].children.push(id);
                Container::new(name.into(), Some(parent), workspace)
            }
        };
        self.containers.push(con);
        id
    }

    /// Adds a floating container to a workspace with the given geometry.
    pub fn add_floating(
        &mut self,
        ws: WorkspaceId,
        name: impl Into<String>,
        rect: Rect,
    ) -> ContainerId {
        let id = ContainerId(self.containers.len());
        let mut con = Container::new(name.into(), None, Some(ws));
        con.set_geometry(rect);
        self.containers.push(con);
        self.workspaces[ws.0].floating.push(id);
        id
    }

    /// Adds a scratchpad container.
    ///
    /// With a workspace the container is shown floating on it, without one it is hidden.
    pub fn add_scratchpad(
        &mut self,
        ws: Option<WorkspaceId>,
        name: impl Into<String>,
        rect: Rect,
    ) -> ContainerId {
        let id = match ws {
            Some(ws) => self.add_floating(ws, name, rect),
            None => {
                let id = ContainerId(self.containers.len());
                let mut con = Container::new(name.into(), None, None);
                con.set_geometry(rect);
                self.containers.push(con);
                id
            }
        };
        self[id].scratchpad = true;
        self.scratchpad.push(id);
        id
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Ordered list the container belongs to, itself included.
    ///
    /// Returns `None` for hidden scratchpad containers, which have no siblings.
    pub fn siblings(&self, id: ContainerId) -> Option<&[ContainerId]> {
        let con = &self[id];
        if let Some(parent) = con.parent {
            return Some(&self[parent].children);
        }
        if self.is_scratchpad_hidden(id) {
            return None;
        }

        let ws = &self[con.workspace?];
        if ws.tiling.contains(&id) {
            Some(&ws.tiling)
        } else {
            Some(&ws.floating)
        }
    }

    pub fn sibling_index(&self, id: ContainerId) -> Option<usize> {
        self.siblings(id)?.iter().position(|sibling| *sibling == id)
    }

    /// Layout the container is placed in: its parent's, or its workspace's at the top level.
    pub fn parent_layout(&self, id: ContainerId) -> Option<Layout> {
        let con = &self[id];
        if let Some(parent) = con.parent {
            return Some(self[parent].layout);
        }
        con.workspace.map(|ws| self[ws].layout)
    }

    pub fn is_floating(&self, id: ContainerId) -> bool {
        let con = &self[id];
        if con.scratchpad {
            return true;
        }
        con.parent.is_none()
            && con
                .workspace
                .is_some_and(|ws| self[ws].floating.contains(&id))
    }

    pub fn is_scratchpad_hidden(&self, id: ContainerId) -> bool {
        let con = &self[id];
        con.scratchpad && con.workspace.is_none()
    }

    /// Bounding box of all outputs.
    pub fn output_layout_box(&self) -> Rect {
        self.outputs
            .iter()
            .map(|output| output.rect)
            .reduce(Rect::union)
            .unwrap_or_default()
    }

    #[cfg(test)]
    pub fn verify_invariants(&self) {
        for (id, con) in self.containers() {
            if let Some(parent) = con.parent {
                assert!(
                    self[parent].children.contains(&id),
                    "parent of {id:?} must list it as a child"
                );
                assert_eq!(con.workspace, self[parent].workspace);
            }
            for child in &con.children {
                assert_eq!(self[*child].parent, Some(id));
            }
            if con.parent.is_none() && !self.is_scratchpad_hidden(id) {
                let ws = con.workspace.expect("top-level containers must have a workspace");
                let ws = &self[ws];
                assert_ne!(
                    ws.tiling.contains(&id),
                    ws.floating.contains(&id),
                    "top-level {id:?} must be either tiling or floating"
                );
            }
        }

        if let Some(focused) = self.focused {
            assert!(focused.0 < self.containers.len());
        }
    }
}

impl Index<ContainerId> for Tree {
    type Output = Container;

    fn index(&self, id: ContainerId) -> &Container {
        &self.containers[id.0]
    }
}

impl IndexMut<ContainerId> for Tree {
    fn index_mut(&mut self, id: ContainerId) -> &mut Container {
        &mut self.containers[id.0]
    }
}

impl Index<WorkspaceId> for Tree {
    type Output = Workspace;

    fn index(&self, id: WorkspaceId) -> &Workspace {
        &self.workspaces[id.0]
    }
}

impl IndexMut<WorkspaceId> for Tree {
    fn index_mut(&mut self, id: WorkspaceId) -> &mut Workspace {
        &mut self.workspaces[id.0]
    }
}
