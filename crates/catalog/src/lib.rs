//! Catalog domain module.
//!
//! The museum's read-only content (artworks, shop products, events, ticket
//! types, tour sections, quiz questions) and the selection filter over it.
//! Pure domain logic: no IO, no HTTP, no storage.

pub mod filter;
pub mod home;
pub mod item;
pub mod seed;
pub mod store;

pub use filter::{CategoryFilter, Searchable, filter_catalog};
pub use home::{Carousel, HomePage};
pub use item::{
    Artwork, ArtworkDetail, Capacity, Locale, LocalizedText, MuseumEvent, QuizQuestion,
    ShopProduct, TicketKind, TicketType, TourSection,
};
pub use store::{Catalog, Priced};
