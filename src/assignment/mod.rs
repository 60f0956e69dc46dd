//! Partition construction and modification.
//!
//! - [`TeamTemplate`]: per-team role headcounts derived from the roster and
//!   the quota table.
//! - [`random_assignment`]: a uniformly shuffled initial partition that
//!   matches the template exactly.
//! - [`neighbor`] / [`swap_same_role`]: the role-preserving swap move used
//!   by the annealing search.

mod neighbor;
mod random;
mod template;

pub use neighbor::{member_at, neighbor, swap_same_role, SwapMove, DEFAULT_SWAP_ATTEMPTS};
pub use random::random_assignment;
pub use template::{RoleCensus, TeamTemplate};
