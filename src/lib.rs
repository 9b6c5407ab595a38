//! Container resizing for a tiling window manager.
//!
//! ```text
//! src/
//! ├── commands/ - text command parsing and dispatch
//! ├── resize/   - tiled and floating resize engines
//! ├── tree/     - container tree, layout engine and snapshots
//! └── utils.rs  - edges and integer helpers
//! ```

#[macro_use]
extern crate tracing;

pub mod cli;
pub mod commands;
pub mod resize;
pub mod tree;
pub mod utils;
