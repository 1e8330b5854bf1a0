#[macro_use]
mod macros;
mod api;
mod catalog;
mod matcher;
mod roster;
mod status;
mod store;

pub use api::{classify_working_hours, is_valid_timezone, local_time, match_timezones};
pub use roster::{Roster, RosterError, TeamMember};
pub use status::{InvalidTimezone, WorkingHoursStatus};
pub use store::RosterStore;
