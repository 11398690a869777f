//! Home page selection and the featured-events carousel.

use std::time::Duration;

use musee_core::ItemId;

use crate::item::{Artwork, MuseumEvent};
use crate::store::Catalog;

/// Rotation period of the featured-events carousel.
pub const CAROUSEL_INTERVAL: Duration = Duration::from_millis(5000);

/// Which records the home page puts forward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomePage {
    pub featured_artworks: Vec<ItemId>,
    pub collection_preview: Vec<ItemId>,
    pub carousel_events: Vec<ItemId>,
}

impl Default for HomePage {
    fn default() -> Self {
        Self {
            featured_artworks: (1..=4).map(ItemId::new).collect(),
            collection_preview: (5..=8).map(ItemId::new).collect(),
            carousel_events: (1..=3).map(ItemId::new).collect(),
        }
    }
}

impl HomePage {
    pub fn featured<'a>(&self, artworks: &'a Catalog<Artwork>) -> Vec<&'a Artwork> {
        artworks.pick(&self.featured_artworks)
    }

    pub fn preview<'a>(&self, artworks: &'a Catalog<Artwork>) -> Vec<&'a Artwork> {
        artworks.pick(&self.collection_preview)
    }

    pub fn carousel<'a>(&self, events: &'a Catalog<MuseumEvent>) -> Vec<&'a MuseumEvent> {
        events.pick(&self.carousel_events)
    }
}

/// Display index of a rotating carousel. Not data-bearing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Move to the next slide, wrapping around. A zero-length carousel stays at 0.
    pub fn advance(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.index
    }

    /// Slide shown after `elapsed` time since the page was opened.
    pub fn index_after(&self, elapsed: Duration) -> usize {
        if self.len == 0 {
            return 0;
        }
        let ticks = elapsed.as_millis() / CAROUSEL_INTERVAL.as_millis();
        ((self.index as u128 + ticks) % self.len as u128) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn carousel_wraps() {
        let mut c = Carousel::new(3);
        assert_eq!(c.advance(), 1);
        assert_eq!(c.advance(), 2);
        assert_eq!(c.advance(), 0);
    }

    #[test]
    fn empty_carousel_stays_put() {
        let mut c = Carousel::new(0);
        assert_eq!(c.advance(), 0);
        assert_eq!(c.index_after(Duration::from_secs(60)), 0);
    }

    #[test]
    fn index_after_counts_whole_intervals() {
        let c = Carousel::new(3);
        assert_eq!(c.index_after(Duration::from_millis(4999)), 0);
        assert_eq!(c.index_after(Duration::from_millis(5000)), 1);
        assert_eq!(c.index_after(Duration::from_millis(15_000)), 0);
    }

    #[test]
    fn home_page_picks_from_catalogs() {
        let home = HomePage::default();
        let artworks = seed::artworks();
        let events = seed::events();

        let featured: Vec<&str> = home.featured(&artworks).iter().map(|a| a.title.as_str()).collect();
        assert_eq!(featured, vec!["Masque Dan", "Trône Bamoun", "Tissage Kente", "Statue Sénoufo"]);
        assert_eq!(home.preview(&artworks).len(), 4);
        assert_eq!(home.carousel(&events).len(), 3);
    }
}
