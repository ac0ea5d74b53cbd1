//! Vitrine Core
//!
//! Foundational primitives shared by every Vitrine widget controller:
//!
//! - **Geometry**: rectangles, scroll axes, and scroll transition modes
//! - **Input Events**: platform-agnostic clicks, key presses, resizes
//! - **State Machines**: flat transition tables for controller lifecycles
//! - **Configuration**: `vitrine.toml` site settings and `data-*` widget attributes
//!
//! # Example
//!
//! ```rust
//! use vitrine_core::{Routes, SiteConfig, WidgetAttributes};
//!
//! let config = SiteConfig::from_toml_str("base_path = \"/portfolio\"").unwrap();
//! let attrs = WidgetAttributes::from_pairs([("data-archive", "work")]);
//!
//! let routes = Routes::new(&config.base_path);
//! let archive = attrs.archive(&config.pagination.default_archive);
//! assert_eq!(routes.page(&archive, 2), "/portfolio/pagination/work/page-2.html");
//! ```

pub mod attributes;
pub mod config;
pub mod error;
pub mod events;
pub mod fsm;
pub mod geometry;
pub mod routes;

pub use attributes::WidgetAttributes;
pub use config::SiteConfig;
pub use error::{Result, VitrineError};
pub use events::{InputEvent, KeyCode};
pub use fsm::{EventId, StateId, StateMachine, Transition};
pub use geometry::{Axis, Rect, ScrollBehavior};
pub use routes::{Fragment, Routes};
