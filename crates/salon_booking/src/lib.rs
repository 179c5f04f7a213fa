// --- File: crates/salon_booking/src/lib.rs ---
pub mod auth;
pub mod clock;
pub mod doc;
pub mod eligibility;
pub mod handlers;
pub mod logic;
#[cfg(test)]
mod logic_proptest;
pub mod notify;
pub mod registry;
#[cfg(test)]
mod registry_test;
pub mod routes;
pub mod slots;
#[cfg(test)]
mod test_store;

pub use eligibility::{DayStatus, ScheduleRules};
pub use logic::BookingError;
pub use routes::routes;
pub use slots::{Slot, SlotGrid};
