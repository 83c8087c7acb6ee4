//! The auto-advancing image carousel at the top of the home feed.

use std::time::Duration;

use dioxus::prelude::*;

use crate::compat;

/// How long each page stays on screen before the carousel advances.
pub const CAROUSEL_PERIOD: Duration = Duration::from_secs(3);

/// Promotional pages shown in the carousel. Placeholder art until real
/// creative lands.
pub const CAROUSEL_PAGES: [&str; 3] = [
    "Instant loans for your shopping needs",
    "Quick approval, flexible repayment",
    "Competitive interest rates",
];

/// Page cursor for a fixed-length carousel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    page: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { page: 0, len }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// One timer tick: advance to the next page, wrapping at the end.
    pub fn advance(&mut self) {
        if self.len > 0 {
            self.page = (self.page + 1) % self.len;
        }
    }

    /// Direct selection via a page indicator dot.
    pub fn set_page(&mut self, page: usize) {
        if page < self.len {
            self.page = page;
        }
    }
}

/// The carousel with page-indicator dots. The repeating timer is owned by
/// this component's coroutine, so navigating away drops and cancels it.
#[component]
pub fn ImageCarousel() -> Element {
    let mut carousel = use_signal(|| Carousel::new(CAROUSEL_PAGES.len()));

    use_coroutine(move |_rx: UnboundedReceiver<()>| async move {
        let mut interval = compat::interval::Interval::new(CAROUSEL_PERIOD);
        loop {
            interval.tick().await;
            carousel.write().advance();
        }
    });

    let current = carousel.read().page();

    rsx! {
        div {
            style: "height: 250px; display: flex; align-items: center; justify-content: center; \
                    border-radius: var(--pico-border-radius); color: white; text-align: center; \
                    background: linear-gradient(120deg, #1565c0, #4caf50); padding: 1rem;",
            h4 { style: "color: white;", "{CAROUSEL_PAGES[current]}" }
        }
        div {
            style: "display: flex; justify-content: center; gap: 0.5rem; padding: 1rem;",
            for (i, _) in CAROUSEL_PAGES.iter().enumerate() {
                span {
                    key: "{i}",
                    style: if i == current {
                        "width: 10px; height: 10px; border-radius: 50%; cursor: pointer; background: var(--pico-primary);"
                    } else {
                        "width: 10px; height: 10px; border-radius: 50%; cursor: pointer; background: var(--pico-muted-border-color);"
                    },
                    onclick: move |_| carousel.write().set_page(i),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_tick_moves_to_page_one() {
        let mut c = Carousel::new(3);
        c.advance();
        assert_eq!(c.page(), 1);
    }

    #[test]
    fn a_full_cycle_returns_to_page_zero() {
        let mut c = Carousel::new(3);
        for _ in 0..3 {
            c.advance();
        }
        assert_eq!(c.page(), 0);
    }

    #[test]
    fn set_page_ignores_out_of_range_indices() {
        let mut c = Carousel::new(3);
        c.set_page(2);
        assert_eq!(c.page(), 2);
        c.set_page(7);
        assert_eq!(c.page(), 2);
    }

    #[test]
    fn empty_carousel_never_advances() {
        let mut c = Carousel::new(0);
        c.advance();
        assert_eq!(c.page(), 0);
    }
}
