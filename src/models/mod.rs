pub mod activity;
pub mod api;

pub use activity::{Activity, Roster, RosterConfig};
pub use api::{MessageResponse, ParticipantQuery};
