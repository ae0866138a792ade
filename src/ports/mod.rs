//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the verification core and the
//! host environment (time, filesystem). Implementations live in
//! `src/adapters/`.

pub mod clock;
pub mod filesystem;

pub use clock::Clock;
pub use filesystem::{EntryKind, FileSystem, RawEntry};
