//! Runtime bridge between the UI event queue and the controller.

use std::thread::{self, JoinHandle};

use crossbeam_channel::Receiver;

use crate::{
    controller::{Controller, UserEvent},
    ui::presentation::{show_status, StatusKind},
};

/// Starts the worker thread. It initializes the page, then serves events until
/// every sender is dropped.
pub fn launch(event_rx: Receiver<UserEvent>, controller: Controller) -> JoinHandle<()> {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build controller runtime: {err}");
                controller.document().update(|doc| {
                    show_status(
                        doc,
                        &format!("Background worker failed to start: {err}"),
                        StatusKind::Error,
                        std::time::Duration::ZERO,
                    )
                });
                return;
            }
        };

        runtime.block_on(async move {
            let init = controller.clone();
            let mut in_flight = vec![tokio::spawn(async move { init.initialize().await })];

            while let Ok(event) = event_rx.recv() {
                tracing::debug!(event = event.name(), "handling ui event");
                if event.awaits_io() {
                    let controller = controller.clone();
                    in_flight.retain(|task| !task.is_finished());
                    in_flight.push(tokio::spawn(async move {
                        handle_event(&controller, event).await
                    }));
                } else {
                    handle_event(&controller, event).await;
                }
            }

            for task in in_flight {
                if let Err(err) = task.await {
                    tracing::warn!("controller task ended abnormally: {err}");
                }
            }
            tracing::info!("ui event queue closed; controller worker exiting");
        });
    })
}

async fn handle_event(controller: &Controller, event: UserEvent) {
    match event {
        UserEvent::InputChanged(text) => controller.input_changed(text),
        UserEvent::ClearInput => controller.clear_input(),
        UserEvent::Translate => controller.translate().await,
        UserEvent::Summarize => controller.summarize().await,
        UserEvent::CopyOutput => controller.copy_output().await,
        UserEvent::DownloadOutput => controller.download_output(),
        UserEvent::ToggleTheme => controller.toggle_theme(),
        UserEvent::SwapLanguages => controller.swap_languages(),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use client_core::TextToolsApi;
    use crossbeam_channel::bounded;
    use shared::{
        domain::{Language, ModelInfo, ModelKind},
        error::CONNECTION_FAILURE_MESSAGE,
        protocol::{
            ApiOutcome, HealthResponse, SummarizeRequest, SummarizeResponse, TranslateRequest,
            TranslateResponse,
        },
    };

    use super::*;
    use crate::{
        controller::ControllerOptions,
        platform::{DownloadsFolder, MemoryPreferenceStore, Platform, SystemClipboard},
        ui::dom::{ids, Document, DocumentHandle},
    };

    struct OfflineApi;

    #[async_trait]
    impl TextToolsApi for OfflineApi {
        async fn translate(&self, _: &TranslateRequest) -> ApiOutcome<TranslateResponse> {
            ApiOutcome::connection_failure()
        }

        async fn summarize(&self, _: &SummarizeRequest) -> ApiOutcome<SummarizeResponse> {
            ApiOutcome::connection_failure()
        }

        async fn languages(&self) -> ApiOutcome<Vec<Language>> {
            ApiOutcome::connection_failure()
        }

        async fn models(&self, _: ModelKind) -> ApiOutcome<Vec<ModelInfo>> {
            ApiOutcome::connection_failure()
        }

        async fn health(&self) -> ApiOutcome<HealthResponse> {
            ApiOutcome::connection_failure()
        }
    }

    #[test]
    fn worker_initializes_and_drains_queue_in_order() {
        let downloads = tempfile::tempdir().expect("tempdir");
        let document = DocumentHandle::new(Document::text_tools_page());
        let controller = Controller::new(
            Arc::new(OfflineApi),
            document.clone(),
            Platform {
                clipboard: Arc::new(SystemClipboard),
                downloads: Arc::new(DownloadsFolder::new(downloads.path())),
                preferences: Arc::new(MemoryPreferenceStore::default()),
            },
            ControllerOptions::default(),
        );
        let (tx, rx) = bounded(16);

        let worker = launch(rx, controller.clone());
        tx.send(UserEvent::InputChanged("draft".to_string()))
            .expect("queue");
        document.update(|doc| doc.set_value(ids::INPUT_TEXT, "Hello world"));
        tx.send(UserEvent::InputChanged("Hello world".to_string()))
            .expect("queue");
        tx.send(UserEvent::Translate).expect("queue");
        drop(tx);
        worker.join().expect("worker thread");

        assert_eq!(controller.session().input_text, "Hello world");
        document.read(|doc| {
            assert_eq!(doc.value(ids::INPUT_TEXT), Some("Hello world"));
            assert_eq!(doc.text(ids::STATUS_BAR), Some(CONNECTION_FAILURE_MESSAGE));
            assert!(!doc.is_disabled(ids::TRANSLATE_BUTTON));
            assert!(doc.is_disabled(ids::COPY_BUTTON));
        });
    }
}
