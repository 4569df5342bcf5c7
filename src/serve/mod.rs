//! Online inference
//!
//! An [`InferenceService`] owns the process-wide model slot. The lifecycle
//! is explicit: uninitialized → loading (attempted once at startup) →
//! ready | unavailable. A failed load never blocks startup; it leaves the
//! service permanently rejecting predictions until restarted.

mod service;

pub use service::{InferenceService, ModelState};
