//! Domain events and the visitor-facing notices derived from them.

pub mod event;
pub mod notice;

pub use event::Event;
pub use notice::{Notice, NoticeVariant, Notify};
