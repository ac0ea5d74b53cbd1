//! Widget registry
//!
//! Owns every controller bound on a page. The host feeds it input, observer
//! entries, fetched pages, and elapsed time; the registry routes each to the
//! widget it concerns.

use std::time::Duration;

use slotmap::{new_key_type, SlotMap};
use vitrine_core::events::IntersectionEntry;
use vitrine_core::{InputEvent, KeyCode, SiteConfig};

use crate::cards_scroller::CardsScroller;
use crate::carousel::Carousel;
use crate::count_up_observer::CountUpObserver;
use crate::list_ticker::ListTicker;
use crate::pagination::{CommitOutcome, PageRequest, PageResponse, PaginationController};
use crate::title_reveal::TitleReveal;

new_key_type! {
    pub struct WidgetId;
}

/// A bound widget controller
pub enum Widget {
    Carousel(Carousel),
    CardsScroller(CardsScroller),
    Pagination(PaginationController),
    ListTicker(ListTicker),
    TitleReveal(TitleReveal),
}

impl Widget {
    pub fn kind(&self) -> &'static str {
        match self {
            Widget::Carousel(carousel) => carousel.kind().name(),
            Widget::CardsScroller(_) => "cards-scroller",
            Widget::Pagination(_) => "pagination",
            Widget::ListTicker(_) => "list",
            Widget::TitleReveal(_) => "section-title",
        }
    }
}

impl From<Carousel> for Widget {
    fn from(carousel: Carousel) -> Self {
        Widget::Carousel(carousel)
    }
}

impl From<CardsScroller> for Widget {
    fn from(scroller: CardsScroller) -> Self {
        Widget::CardsScroller(scroller)
    }
}

impl From<PaginationController> for Widget {
    fn from(pagination: PaginationController) -> Self {
        Widget::Pagination(pagination)
    }
}

impl From<ListTicker> for Widget {
    fn from(ticker: ListTicker) -> Self {
        Widget::ListTicker(ticker)
    }
}

impl From<TitleReveal> for Widget {
    fn from(reveal: TitleReveal) -> Self {
        Widget::TitleReveal(reveal)
    }
}

/// What routing an event to a widget produced
#[derive(Debug, PartialEq, Eq)]
pub enum Dispatch {
    Ignored,
    Handled,
    /// The widget needs a page fetched
    Fetch(PageRequest),
}

impl Dispatch {
    fn from_handled(handled: bool) -> Self {
        if handled {
            Dispatch::Handled
        } else {
            Dispatch::Ignored
        }
    }
}

pub struct WidgetRegistry {
    config: SiteConfig,
    widgets: SlotMap<WidgetId, Widget>,
    count_ups: CountUpObserver,
}

impl WidgetRegistry {
    pub fn new(config: SiteConfig) -> Self {
        let count_ups = CountUpObserver::new(config.count_up.clone());
        Self {
            config,
            widgets: SlotMap::with_key(),
            count_ups,
        }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn insert(&mut self, widget: impl Into<Widget>) -> WidgetId {
        let widget = widget.into();
        let kind = widget.kind();
        let id = self.widgets.insert(widget);
        tracing::debug!(kind, ?id, "widget registered");
        id
    }

    pub fn get(&self, id: WidgetId) -> Option<&Widget> {
        self.widgets.get(id)
    }

    pub fn get_mut(&mut self, id: WidgetId) -> Option<&mut Widget> {
        self.widgets.get_mut(id)
    }

    pub fn count_ups(&self) -> &CountUpObserver {
        &self.count_ups
    }

    pub fn count_ups_mut(&mut self) -> &mut CountUpObserver {
        &mut self.count_ups
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Broadcast a page-wide key press; each carousel applies its own gate.
    /// Returns how many carousels moved.
    pub fn key_down(&mut self, key: KeyCode, viewport_height: f32) -> usize {
        let event = InputEvent::KeyDown {
            key,
            viewport_height,
        };
        self.widgets
            .values_mut()
            .filter_map(|widget| match widget {
                Widget::Carousel(carousel) => Some(carousel.handle(&event)),
                _ => None,
            })
            .filter(|&handled| handled)
            .count()
    }

    /// Route a click on a control inside widget `id`
    pub fn click(&mut self, id: WidgetId, target: u64) -> Dispatch {
        match self.widgets.get_mut(id) {
            Some(Widget::Carousel(carousel)) => {
                Dispatch::from_handled(carousel.handle(&InputEvent::Click { target }))
            }
            Some(Widget::Pagination(pagination)) => match pagination.handle_click(target) {
                Some(request) => Dispatch::Fetch(request),
                None => Dispatch::Ignored,
            },
            _ => Dispatch::Ignored,
        }
    }

    /// A resize observed on widget `id`'s primary container
    pub fn resize(&mut self, id: WidgetId) -> bool {
        match self.widgets.get_mut(id) {
            Some(Widget::Carousel(carousel)) => carousel.handle(&InputEvent::Resize),
            _ => false,
        }
    }

    /// An intersection entry from widget `id`'s observer
    pub fn intersect(&mut self, id: WidgetId, entry: IntersectionEntry) -> bool {
        match self.widgets.get_mut(id) {
            Some(Widget::CardsScroller(scroller)) => scroller.observe(entry),
            Some(Widget::TitleReveal(reveal)) => reveal.observe(entry).is_some(),
            _ => false,
        }
    }

    /// Hand a resolved page back to its widget. A removed widget yields
    /// `Stale`.
    pub fn commit(&mut self, id: WidgetId, response: PageResponse) -> CommitOutcome {
        match self.widgets.get_mut(id) {
            Some(Widget::Pagination(pagination)) => pagination.commit(response),
            _ => {
                tracing::trace!(url = %response.url, "page response for missing widget");
                CommitOutcome::Stale
            }
        }
    }

    /// Advance every timer-driven widget and count-up by `dt`
    pub fn tick(&mut self, dt: Duration) {
        for widget in self.widgets.values_mut() {
            match widget {
                Widget::Carousel(carousel) => {
                    carousel.tick(dt);
                }
                Widget::ListTicker(ticker) => {
                    ticker.tick(dt);
                }
                _ => {}
            }
        }
        self.count_ups.tick(dt);
    }

    /// Remove a widget; a paginated widget's outstanding requests are
    /// invalidated first
    pub fn remove(&mut self, id: WidgetId) -> Option<Widget> {
        let mut widget = self.widgets.remove(id)?;
        if let Widget::Pagination(pagination) = &mut widget {
            pagination.teardown();
        }
        tracing::debug!(kind = widget.kind(), ?id, "widget removed");
        Some(widget)
    }

    /// Remove every widget
    pub fn teardown(&mut self) {
        let ids: Vec<WidgetId> = self.widgets.keys().collect();
        for id in ids {
            self.remove(id);
        }
    }
}
