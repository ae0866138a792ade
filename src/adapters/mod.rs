//! Adapter implementations of the port traits.
//!
//! `live` talks to the real host; `memory` serves canned directory trees and
//! a frozen clock for tests and embedding callers.

pub mod live;
pub mod memory;
