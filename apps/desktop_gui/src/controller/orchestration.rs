//! Hands UI events to the controller's worker queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::{
    controller::events::UserEvent,
    ui::{
        dom::DocumentHandle,
        presentation::{show_status, StatusKind, DEFAULT_STATUS_DURATION},
    },
};

pub fn dispatch_user_event(tx: &Sender<UserEvent>, event: UserEvent, document: &DocumentHandle) {
    let event_name = event.name();
    match tx.try_send(event) {
        Ok(()) => tracing::debug!(event = event_name, "queued ui->controller event"),
        Err(TrySendError::Full(_)) => document.update(|doc| {
            show_status(
                doc,
                "UI event queue is full; please retry",
                StatusKind::Error,
                DEFAULT_STATUS_DURATION,
            )
        }),
        Err(TrySendError::Disconnected(_)) => {
            tracing::error!(event = event_name, "controller worker is gone");
            document.update(|doc| {
                show_status(
                    doc,
                    "Background worker stopped; please restart the app",
                    StatusKind::Error,
                    std::time::Duration::ZERO,
                )
            });
        }
    }
}
