//! Utility modules: caller-side retry, timeout and cancellation wrappers.

pub mod cancel;
pub mod retry;
pub mod timeout;
