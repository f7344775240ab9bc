//! Boundaries between the loader and its surroundings
//!
//! The loader never talks to a browser, a window system or a script engine
//! directly. Everything it needs from the host goes through these traits.

pub mod block_policy;
pub mod host;
pub mod unit_source;

pub use block_policy::BlockPolicy;
pub use host::Host;
pub use unit_source::UnitSource;
