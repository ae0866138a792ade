//! Service context bundling all port trait objects.

use std::sync::Arc;

use crate::adapters::live::{LiveClock, LiveFileSystem};
use crate::ports::clock::Clock;
use crate::ports::filesystem::FileSystem;

/// Bundles all port trait objects into a single context.
///
/// Ports are reference-counted so a listing can be fetched on a worker
/// thread while the caller keeps the context. The context holds no mutable
/// state; concurrent verifications may share one freely.
#[derive(Clone)]
pub struct ServiceContext {
    /// Clock for timestamping rendered reports.
    pub clock: Arc<dyn Clock>,
    /// Filesystem for directory enumeration.
    pub fs: Arc<dyn FileSystem>,
}

impl ServiceContext {
    /// Creates a live context backed by the real filesystem and system clock.
    #[must_use]
    pub fn live() -> Self {
        Self { clock: Arc::new(LiveClock), fs: Arc::new(LiveFileSystem) }
    }

    /// Creates a context from explicit adapters.
    #[must_use]
    pub fn new(clock: impl Clock + 'static, fs: impl FileSystem + 'static) -> Self {
        Self { clock: Arc::new(clock), fs: Arc::new(fs) }
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext").finish_non_exhaustive()
    }
}
