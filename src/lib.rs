//! # DSVis-RS: Animated Data Structure Visualizer
//!
//! An interactive teaching tool that shows a singly linked list, a binary
//! search tree and a fixed-capacity array. Every operation the user triggers
//! is applied immediately; nodes then glide to their new places over the
//! following frames.
//!
//! ## Architecture
//!
//! - **Engines** ([`engine`]): the structures themselves, nodes stored in a
//!   generational [`arena`]
//! - **Layout** ([`layout`]): target position of every node from its
//!   structural role
//! - **Animation** ([`animation`]): per-frame easing toward those targets
//! - **Traversal** ([`traversal`]): one-node-per-step walks with stale
//!   snapshot detection
//! - **Session** ([`session`]): the command surface the UI talks to
//! - **Frontend** ([`frontend`]): eframe/egui window drawing a [`view::FrameView`]
//!
//! ## Configuration
//!
//! Geometry, animation rates and the array capacity are read from
//! `config.toml`; the last mode and UI preferences from `app_state.json`.
//! Both live in the platform data directory under `dev.dsvis.dsvis-rs`:
//!
//! - **Linux**: `~/.local/share/dev.dsvis.dsvis-rs/`
//! - **macOS**: `~/Library/Application Support/dev.dsvis.dsvis-rs/`
//! - **Windows**: `%APPDATA%\dev.dsvis.dsvis-rs\`
//!
//! ## Example
//!
//! ```
//! use dsvis_rs::{Command, Mode, VisConfig, VisualizerSession};
//!
//! let mut session = VisualizerSession::new(VisConfig::default());
//! session.dispatch(Command::SelectMode(Mode::Bst)).unwrap();
//! for value in [50, 20, 80] {
//!     session.dispatch(Command::TreeInsert(Some(value))).unwrap();
//! }
//! assert_eq!(session.bst().values(), vec![20, 50, 80]);
//!
//! // let the nodes settle
//! while session.tick(1.0 / 60.0) {}
//! ```

pub mod animation;
pub mod arena;
pub mod config;
pub mod engine;
pub mod error;
pub mod frontend;
pub mod layout;
pub mod session;
pub mod source;
pub mod traversal;
pub mod types;
pub mod view;

// Re-export commonly used types
pub use config::{AppState, VisConfig};
pub use error::{Result, VisError};
pub use frontend::VisualizerApp;
pub use session::{Command, StatusMessage, VisualizerSession};
pub use types::{Mode, Point, StructureKind};
