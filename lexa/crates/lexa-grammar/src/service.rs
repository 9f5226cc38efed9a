//! Handle to an external semantic language service.
//!
//! Completion, diagnostics and similar features live outside this crate. A
//! configuration only carries the handle so that the editor can find the
//! service that belongs to a language.

use std::fmt::Debug;
use std::sync::Arc;

/// An external semantic service for one language.
pub trait LanguageService: Send + Sync + Debug {
    /// Name of the service, for diagnostics.
    fn name(&self) -> &str;
}

/// Shared, optional service handle as stored in a configuration.
pub type ServiceHandle = Option<Arc<dyn LanguageService>>;

/// Returns true if both handles are absent or point at the same service.
pub(crate) fn same_service(a: &ServiceHandle, b: &ServiceHandle) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => Arc::ptr_eq(a, b),
        _ => false,
    }
}
