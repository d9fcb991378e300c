//! Stateful line classification
//!
//! Lines are visited in document order. Headers move the running context
//! forward; function lines are turned into records using the matchers, the
//! space resolver and per-event space memory.

mod context;
mod machine;


pub use context::{Context, EventKey, LastSpaceMemory, ParseState};
pub use machine::{LineClassifier, LineOutcome};
