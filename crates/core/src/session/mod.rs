//! Per-window loader state

pub mod context;
pub mod lifecycle;

pub use context::SessionContext;
pub use lifecycle::{DocumentPhase, Session, SessionState};
