//! Controller layer: session state, user events, and the actions that
//! sequence validation, loading state, backend calls and presentation updates.

pub mod actions;
pub mod events;
pub mod orchestration;
pub mod session;

pub use actions::{Controller, ControllerOptions};
pub use events::UserEvent;
pub use session::SessionState;
