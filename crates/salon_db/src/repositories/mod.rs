//! Repositories for the three stored record types.
//!
//! Each record type has its own trait so callers (and test doubles) depend
//! only on what they use. One SQL struct implements all three.

pub mod blocked_slots;
pub mod bookings;
pub mod closures;
pub mod schedule_factory;
pub mod schedule_sql;


pub use blocked_slots::BlockedSlotRepository;
pub use bookings::BookingRepository;
pub use closures::ClosureRepository;
pub use schedule_factory::ScheduleRepositoryFactory;
pub use schedule_sql::SqlScheduleRepository;
