//! Header overlay panels: the menu and search panels, at most one open.
//!
//! The state machine and its side-effect ordering live in [`controller`] and
//! are plain Rust; [`dom`] binds them to the browser through the lookup rules
//! in [`anchors`].

pub mod anchors;
pub mod controller;
#[cfg(feature = "web")]
pub mod dom;
pub mod state;

pub use anchors::AnchorTree;
pub use controller::{FocusTask, Generation, PageChrome, PanelController};
pub use state::{Anchor, Panel, ScrollStyle};
