//! # CoachSlot Core
//!
//! Turns a coach's recurring weekly availability and existing bookings into
//! bookable slots, and reserves a slot once a client picks one.
//!
//! - [`slots`]: rules → candidate start times over a 7-day horizon
//! - [`resolver`]: candidates + bookings → free/taken [`models::time_slot::TimeSlot`]s
//! - [`reservation`]: validated, conflict-aware booking commit
//! - [`store`]: the storage contract the engine is written against

pub mod engine;
pub mod errors;
pub mod intake;
pub mod models;
pub mod reservation;
pub mod resolver;
pub mod slots;
pub mod store;
pub mod validation;

pub use engine::SlotEngine;
pub use errors::{SlotError, SlotResult};
