//! Vitrine Widgets
//!
//! Headless controllers for the interactive widgets of a static site. Each
//! controller is built from a widget's host surfaces and attributes and then
//! driven by input events, observer entries, fetched pages, and elapsed time.
//!
//! # Widgets
//!
//! - **Carousels**: swipe cards, feedback cards, and service plans kept on one
//!   wrapping cursor
//! - **Cards Scroller**: active card derived from intersection events
//! - **Pagination**: bounded page cursor with generation-checked fetches
//! - **Count-Ups**: numbers counted up on first sight
//! - **List Tickers, Marquees, Title Reveals**: periodic and visibility
//!   driven decoration
//!
//! Hosts implement the traits in [`surface`]; [`headless`] provides
//! recording implementations for tests and deterministic runs.

pub mod cards_scroller;
pub mod carousel;
pub mod count_up_observer;
pub mod cursor;
pub mod geometry_sync;
pub mod headless;
pub mod input;
pub mod list_ticker;
pub mod marquee;
pub mod pagination;
pub mod random_posts;
pub mod registry;
pub mod surface;
pub mod title_reveal;

pub use cards_scroller::CardsScroller;
pub use carousel::{Carousel, CarouselBuilder, CarouselKind};
pub use count_up_observer::{CountUpObserver, CounterId};
pub use cursor::CursorController;
pub use geometry_sync::{GeometrySync, IndexLabel, Strip};
pub use input::{CursorAction, InputBinder, KeyboardGate};
pub use list_ticker::ListTicker;
pub use marquee::{loop_track, MarqueeLoop};
pub use pagination::{
    CommitOutcome, PageRequest, PageResponse, PageSource, PaginationController,
};
pub use random_posts::{distinct_random_indices, pick_posts};
pub use registry::{Dispatch, Widget, WidgetId, WidgetRegistry};
pub use title_reveal::{RevealState, TitleReveal};
