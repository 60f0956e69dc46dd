//! Domain model: participants, roles, categories, interest edges, and
//! partitions.
//!
//! All records are plain data. Roles and categories are closed enums so
//! that every scorer handles every variant exhaustively.

mod category;
mod interest;
mod participant;
mod partition;
mod role;

pub use category::{ActiveHours, Category, Choice, MeetingMode, Preferences, TeamVibe};
pub use interest::{AffinityEdge, InterestGraph};
pub use participant::{BigFive, MbtiAxes, Participant, ParticipantId, Traits};
pub use partition::{Partition, Team};
pub use role::{Role, RoleCounts, RoleQuotas};
