//! Core domain entities representing the business data model.
//!
//! Plain data structures without business logic. Creation inputs use
//! separate `New*` structs; `Link` carries the click counter and the
//! liveness snapshot maintained by the external prober.

pub mod click;
pub mod link;

pub use click::{Click, DayCount, NewClick};
pub use link::{Link, LivenessSnapshot, NewLink};
