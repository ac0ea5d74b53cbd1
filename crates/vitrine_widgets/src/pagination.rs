//! Paginated collections
//!
//! A [`PaginationController`] owns a bounded page cursor, renders the page
//! number buttons, and swaps the collection's content with the fetched page.
//! Fetching itself happens outside the controller: every page switch yields
//! a [`PageRequest`] that the host resolves against a [`PageSource`] and
//! hands back to [`PaginationController::commit`]. Each request carries a
//! generation number and only the latest one may write, so a slow response
//! for an abandoned page never overwrites a newer one, and nothing writes
//! after [`teardown`](PaginationController::teardown).

use std::future::Future;

use vitrine_core::{
    EventId, Result, Routes, SiteConfig, StateId, StateMachine, WidgetAttributes,
};

use crate::surface::{ContentSlot, PageButton, PageControls};

pub const PAGE_NUMBER_CLASS: &str = "page-numbers";
pub const PAGE_BUTTON_CLASS: &str = "page-nav-button";
pub const CURRENT_CLASS: &str = "current";

pub const IDLE: StateId = 0;
pub const FETCHING: StateId = 1;

const REQUEST: EventId = 1;
const COMMIT: EventId = 2;
const CANCEL: EventId = 3;

/// Where page bodies come from
pub trait PageSource {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String>>;
}

/// A page fetch issued by the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub generation: u64,
    /// 0-based page index
    pub page: usize,
    pub url: String,
}

impl PageRequest {
    /// Fetch the page body. Borrows only the source, so several requests
    /// may be in flight while the controller keeps handling input.
    pub async fn resolve<S: PageSource>(self, source: &S) -> PageResponse {
        let body = source.fetch(&self.url).await;
        PageResponse {
            generation: self.generation,
            page: self.page,
            url: self.url,
            body,
        }
    }
}

#[derive(Debug)]
pub struct PageResponse {
    pub generation: u64,
    pub page: usize,
    pub url: String,
    pub body: Result<String>,
}

/// What [`PaginationController::commit`] did with a response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The body replaced the collection content
    Applied,
    /// A newer request superseded this one, or the widget was torn down
    Stale,
    /// The fetch failed; content is unchanged
    Failed,
}

pub struct PaginationController {
    routes: Routes,
    archive: String,
    total_pages: usize,
    page: usize,
    buttons: Vec<PageButton>,
    collection: Option<Box<dyn ContentSlot>>,
    prev_target: Option<u64>,
    next_target: Option<u64>,
    generation: u64,
    torn_down: bool,
    fsm: StateMachine,
}

impl PaginationController {
    /// Read `data-archive` and `data-pagination` from the collection's
    /// attributes. `collection` is the container whose content is swapped;
    /// without one the buttons still work but nothing is fetched.
    pub fn new(
        attrs: &WidgetAttributes,
        config: &SiteConfig,
        collection: Option<Box<dyn ContentSlot>>,
    ) -> Self {
        let fsm = StateMachine::builder(IDLE)
            .on(IDLE, REQUEST, FETCHING)
            .on(FETCHING, REQUEST, FETCHING)
            .on(FETCHING, COMMIT, IDLE)
            .on(FETCHING, CANCEL, IDLE)
            .build();

        Self {
            routes: Routes::new(&config.base_path),
            archive: attrs.archive(&config.pagination.default_archive),
            total_pages: attrs.total_pages(),
            page: 0,
            buttons: Vec::new(),
            collection,
            prev_target: None,
            next_target: None,
            generation: 0,
            torn_down: false,
            fsm,
        }
    }

    pub fn archive(&self) -> &str {
        &self.archive
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Current 0-based page
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn is_fetching(&self) -> bool {
        self.fsm.is_in(FETCHING)
    }

    pub fn bind_prev(&mut self, target: u64) {
        self.prev_target = Some(target);
    }

    pub fn bind_next(&mut self, target: u64) {
        self.next_target = Some(target);
    }

    /// Insert the page number buttons and issue the request for page 1
    pub fn mount(&mut self, controls: &mut dyn PageControls) -> Option<PageRequest> {
        if !self.buttons.is_empty() {
            tracing::warn!(archive = %self.archive, "pagination already mounted");
            return None;
        }
        if self.total_pages == 0 {
            tracing::debug!(archive = %self.archive, "pagination skipped: no pages");
            return None;
        }

        for number in 1..=self.total_pages {
            let mut button = controls.insert_page_button(&number.to_string());
            button.classes.set_class(PAGE_NUMBER_CLASS, true);
            button.classes.set_class(PAGE_BUTTON_CLASS, true);
            button.classes.set_class(CURRENT_CLASS, number == 1);
            self.buttons.push(button);
        }

        tracing::debug!(
            archive = %self.archive,
            total_pages = self.total_pages,
            "pagination mounted"
        );
        self.request()
    }

    /// Switch to page `index`. No-op for the current page and for indices
    /// past the last page.
    pub fn go_to(&mut self, index: usize) -> Option<PageRequest> {
        if self.torn_down {
            return None;
        }
        if index >= self.total_pages {
            tracing::warn!(index, total_pages = self.total_pages, "page out of range");
            return None;
        }
        if index == self.page {
            return None;
        }

        if let Some(button) = self.buttons.get_mut(self.page) {
            button.classes.set_class(CURRENT_CLASS, false);
        }
        if let Some(button) = self.buttons.get_mut(index) {
            button.classes.set_class(CURRENT_CLASS, true);
        }
        self.page = index;
        self.request()
    }

    /// Bounded: no-op on the last page
    pub fn next(&mut self) -> Option<PageRequest> {
        if self.page + 1 >= self.total_pages {
            return None;
        }
        self.go_to(self.page + 1)
    }

    /// Bounded: no-op on the first page
    pub fn prev(&mut self) -> Option<PageRequest> {
        if self.page == 0 {
            return None;
        }
        self.go_to(self.page - 1)
    }

    /// Route a click on a prev/next control or a page number button
    pub fn handle_click(&mut self, target: u64) -> Option<PageRequest> {
        if Some(target) == self.prev_target {
            return self.prev();
        }
        if Some(target) == self.next_target {
            return self.next();
        }
        let index = self.buttons.iter().position(|button| button.target == target)?;
        self.go_to(index)
    }

    fn request(&mut self) -> Option<PageRequest> {
        self.collection.as_ref()?;

        self.generation += 1;
        self.fsm.send(REQUEST);
        let url = self.routes.page(&self.archive, self.page + 1);
        tracing::debug!(generation = self.generation, url = %url, "page requested");

        Some(PageRequest {
            generation: self.generation,
            page: self.page,
            url,
        })
    }

    /// Apply a resolved request if it is still the latest one
    pub fn commit(&mut self, response: PageResponse) -> CommitOutcome {
        if self.torn_down || response.generation != self.generation {
            tracing::trace!(
                generation = response.generation,
                latest = self.generation,
                url = %response.url,
                "stale page response dropped"
            );
            return CommitOutcome::Stale;
        }

        self.fsm.send(COMMIT);
        match response.body {
            Ok(html) => {
                if let Some(collection) = self.collection.as_mut() {
                    collection.replace_html(&html);
                }
                CommitOutcome::Applied
            }
            Err(err) => {
                tracing::warn!(error = %err, "page fetch failed");
                CommitOutcome::Failed
            }
        }
    }

    /// Invalidate every outstanding request; later commits are stale
    pub fn teardown(&mut self) {
        self.torn_down = true;
        self.generation += 1;
        self.fsm.send(CANCEL);
    }
}
