//! Visitor session domain module.
//!
//! Per-visit interaction state (likes, wishlist, event registrations, cart),
//! the cart aggregator, the ticket desk and the newsletter gate, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod cart;
pub mod interaction;
pub mod newsletter;
pub mod tickets;

pub use cart::{CartLine, CartTotals, cart_lines, cart_totals};
pub use interaction::{
    InteractionCommand, InteractionEvent, InteractionState, LikeSurface, add_to_cart, remove_from_cart,
    toggle_like, toggle_registration, toggle_wishlist,
};
pub use newsletter::{NewsletterOutcome, signup};
pub use tickets::{PurchaseOutcome, TicketOrder};
