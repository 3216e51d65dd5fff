//! Dialogue module - Speaker roles, turns and listing scenarios
//!
//! Shared dialogue types used by the formatter and both turn adapters.

mod scenario;
mod speaker;
mod turn;

pub use scenario::Scenario;
pub use speaker::Speaker;
pub use turn::Turn;
