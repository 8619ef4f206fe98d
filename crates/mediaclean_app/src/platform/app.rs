use std::path::Path;
use std::sync::mpsc;

use app_logging::app_info;
use bytes::Bytes;
use eframe::egui;
use mediaclean_core::{update, AppState, Msg};
use mediaclean_engine::SubmitSettings;

use super::config::{self, AppConfig};
use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::ui;

pub fn run_app() -> anyhow::Result<()> {
    let config = config::load(Path::new("."));
    logging::initialize(if config.log_to_file {
        LogDestination::Both
    } else {
        LogDestination::Terminal
    });
    app_info!("Starting MediaClean frontend; backend at {}", config.server_url);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([720.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        ui::constants::WINDOW_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(MediaCleanApp::new(cc, config)))),
    )
    .map_err(|err| anyhow::anyhow!("failed to start the UI: {err}"))
}

struct MediaCleanApp {
    state: AppState,
    /// egui edit buffer for the URL field; resynced from the view model
    /// when the core rewrites the text (demo fill).
    url_buffer: String,
    server_url: String,
    msg_rx: mpsc::Receiver<Msg>,
    effects: EffectRunner,
}

impl MediaCleanApp {
    fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        let settings = SubmitSettings {
            server_url: config.server_url.clone(),
            ..SubmitSettings::default()
        };
        let effects = EffectRunner::new(settings, msg_tx, cc.egui_ctx.clone());

        Self {
            state: AppState::new(),
            url_buffer: String::new(),
            server_url: config.server_url,
            msg_rx,
            effects,
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        // egui redraws after every handled event; the dirty flag only
        // matters for background messages, and the event pump requests a
        // repaint for those.
        let _ = state.consume_dirty();
        self.state = state;
        self.effects.run(effects);
    }

    /// Drag-and-drop bridge: exactly the first dropped file is forwarded.
    fn collect_dropped_file(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|input| input.raw.dropped_files.first().cloned());
        let Some(file) = dropped else {
            return;
        };
        let msg = if let Some(path) = &file.path {
            ui::render::file_msg_from_path(path)
        } else {
            file.bytes.map(|bytes| Msg::FileChosen {
                name: file.name.clone(),
                bytes: Bytes::copy_from_slice(&bytes),
            })
        };
        if let Some(msg) = msg {
            self.dispatch(msg);
        }
    }
}

impl eframe::App for MediaCleanApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Messages queued by the engine pump and flash timers.
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.dispatch(msg);
        }

        self.collect_dropped_file(ctx);
        let drag_active = ctx.input(|input| !input.raw.hovered_files.is_empty());

        let view = self.state.view();
        if view.url_text != self.url_buffer.trim() {
            self.url_buffer = view.url_text.clone();
        }

        let mut pending = Vec::new();
        ui::render::root(
            ctx,
            &view,
            &mut self.url_buffer,
            drag_active,
            &self.server_url,
            &mut pending,
        );
        for msg in pending {
            self.dispatch(msg);
        }
    }
}
