//! Cultural quiz domain module.
//!
//! A strictly forward state machine over an ordered list of questions, the
//! score banding of the results screen, and a session aggregate wrapping
//! both. Pure domain logic: no IO.

pub mod band;
pub mod engine;
pub mod session;

pub use band::ScoreBand;
pub use engine::{Quiz, QuizState, QuizView, advance, restart, select_answer};
pub use session::{QuizCommand, QuizEvent, QuizSession};
