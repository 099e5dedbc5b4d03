//! Application service layer.
//!
//! Services contain business logic and orchestrate interactions between
//! the command dispatcher and the repository. The birthday scheduler lives
//! here as a pure function over contact records.

pub mod birthdays;
pub mod clock;
mod contact_service;

pub use birthdays::{
    shift_weekend, upcoming, BirthdayPolicy, BirthdayReport, UpcomingBirthday,
    NO_BIRTHDAYS_MESSAGE,
};
pub use clock::{Clock, FixedClock, SystemClock};
pub use contact_service::{ContactChange, ContactService, ContactServiceImpl};
