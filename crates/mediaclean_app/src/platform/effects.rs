use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use app_logging::app_info;
use mediaclean_core::{Effect, MediaKind, Msg, SubmitPayload, SubmitResult};
use mediaclean_engine::{EngineEvent, EngineHandle, SubmitRequest, SubmitSettings, SubmitSource};

/// Executes effects emitted by the core and pumps engine events back in
/// as messages.
pub struct EffectRunner {
    engine: Arc<EngineHandle>,
    msg_tx: mpsc::Sender<Msg>,
}

impl EffectRunner {
    pub fn new(
        settings: SubmitSettings,
        msg_tx: mpsc::Sender<Msg>,
        egui_ctx: eframe::egui::Context,
    ) -> Self {
        let engine = Arc::new(EngineHandle::new(settings));
        let runner = Self { engine, msg_tx };
        runner.spawn_event_pump(egui_ctx);
        runner
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Submit { payload } => {
                    match &payload {
                        SubmitPayload::Url(url) => app_info!("Submitting URL source: {}", url),
                        SubmitPayload::File { name, bytes } => {
                            app_info!("Submitting file source: {} ({} bytes)", name, bytes.len())
                        }
                    }
                    self.engine.submit(map_payload(payload));
                }
                Effect::ScheduleFlashReset { after } => {
                    let tx = self.msg_tx.clone();
                    thread::spawn(move || {
                        thread::sleep(after);
                        let _ = tx.send(Msg::FlashExpired);
                    });
                }
            }
        }
    }

    fn spawn_event_pump(&self, egui_ctx: eframe::egui::Context) {
        let engine = self.engine.clone();
        let msg_tx = self.msg_tx.clone();
        thread::spawn(move || loop {
            if let Some(event) = engine.try_recv() {
                match event {
                    EngineEvent::SubmitCompleted { result } => {
                        // Transport failures were already logged at the
                        // engine; the user only ever sees the generic text.
                        let outcome = match result {
                            Ok(response) => map_response(response),
                            Err(_) => SubmitResult::TransportFailed,
                        };
                        if msg_tx.send(Msg::SubmitFinished(outcome)).is_err() {
                            return;
                        }
                        egui_ctx.request_repaint();
                    }
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

fn map_payload(payload: SubmitPayload) -> SubmitRequest {
    let source = match payload {
        SubmitPayload::Url(url) => SubmitSource::Url(url),
        SubmitPayload::File { name, bytes } => SubmitSource::File { name, bytes },
    };
    SubmitRequest { source }
}

fn map_response(response: mediaclean_engine::SubmitResponse) -> SubmitResult {
    match response {
        mediaclean_engine::SubmitResponse::Completed { media_url, kind } => {
            SubmitResult::Completed {
                kind: map_kind(kind),
                media_url,
            }
        }
        mediaclean_engine::SubmitResponse::Rejected { message } => {
            SubmitResult::Rejected { message }
        }
    }
}

fn map_kind(kind: mediaclean_engine::MediaKind) -> MediaKind {
    match kind {
        mediaclean_engine::MediaKind::Audio => MediaKind::Audio,
        mediaclean_engine::MediaKind::Video => MediaKind::Video,
    }
}
