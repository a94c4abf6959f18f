//! Worker thread that owns the async runtime and drives the controller.

pub mod runtime;
