//! Decision-source integration: the wire protocol for action responses,
//! the synchronous source seam, an async bridge and a seeded mock.

pub mod mock;
pub mod protocol;
pub mod source;

pub use mock::MockSource;
pub use protocol::{parse_decision, ActionCall, DecisionError, DecisionResponse};
pub use source::{AsyncSourceBridge, DecisionSource};
