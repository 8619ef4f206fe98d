use std::path::Path;

use app_logging::app_warn;
use bytes::Bytes;
use eframe::egui::{self, Color32, RichText, Stroke};
use mediaclean_core::{AppViewModel, MediaKind, Msg, SourceKind};

use super::constants::*;

/// Draws the whole frame from the view model. User interactions are
/// collected into `out` and dispatched after the UI pass.
pub fn root(
    ctx: &egui::Context,
    view: &AppViewModel,
    url_buffer: &mut String,
    drag_active: bool,
    server_url: &str,
    out: &mut Vec<Msg>,
) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading(WINDOW_TITLE);
        ui.label("Remove background music from a video or audio track.");
        ui.add_space(8.0);

        url_section(ui, view, url_buffer, out);
        ui.add_space(8.0);
        file_section(ui, view, drag_active, out);
        ui.add_space(12.0);

        submit_row(ui, view, out);
        status_line(ui, view);
        media_section(ui, view, server_url);
    });
}

fn source_frame(ui: &egui::Ui, active: bool) -> egui::Frame {
    let (width, color) = if active {
        (2.0, ACTIVE_STROKE_COLOR)
    } else {
        (1.0, INACTIVE_STROKE_COLOR)
    };
    egui::Frame::group(ui.style()).stroke(Stroke::new(width, color))
}

fn url_section(ui: &mut egui::Ui, view: &AppViewModel, url_buffer: &mut String, out: &mut Vec<Msg>) {
    source_frame(ui, view.is_source_active(SourceKind::Url)).show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.label("Media URL");
            if view.show_source_toggles
                && ui
                    .selectable_label(view.is_source_active(SourceKind::Url), "Use URL")
                    .clicked()
            {
                out.push(Msg::ToggleClicked(SourceKind::Url));
            }
        });

        let response = ui.add(
            egui::TextEdit::singleline(url_buffer)
                .hint_text("https://www.youtube.com/watch?v=...")
                .desired_width(f32::INFINITY),
        );
        if response.changed() {
            out.push(Msg::UrlInputChanged(url_buffer.clone()));
        }

        if ui.small_button("Try the demo URL").clicked() {
            out.push(Msg::DemoUrlClicked);
        }
    });
}

fn file_section(ui: &mut egui::Ui, view: &AppViewModel, drag_active: bool, out: &mut Vec<Msg>) {
    let mut frame = source_frame(ui, view.is_source_active(SourceKind::File));
    if drag_active {
        frame = frame.fill(DRAG_OVER_FILL);
    }

    frame.show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.label("Media file");
            if view.show_source_toggles
                && ui
                    .selectable_label(view.is_source_active(SourceKind::File), "Use file")
                    .clicked()
            {
                out.push(Msg::ToggleClicked(SourceKind::File));
            }
        });

        match &view.file_name {
            Some(name) => {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(name).strong());
                    if ui.small_button("Remove").clicked() {
                        out.push(Msg::RemoveFileClicked);
                    }
                });
            }
            None => {
                ui.horizontal(|ui| {
                    ui.label("Drop a media file here, or");
                    if ui.button("Browse...").clicked() {
                        if let Some(msg) = pick_file() {
                            out.push(msg);
                        }
                    }
                });
            }
        }
    });
}

fn submit_row(ui: &mut egui::Ui, view: &AppViewModel, out: &mut Vec<Msg>) {
    let (label, color) = if view.submit_flashing {
        (SUBMIT_FLASH_LABEL, SUBMIT_FLASH_COLOR)
    } else {
        (SUBMIT_IDLE_LABEL, SUBMIT_IDLE_COLOR)
    };
    let button = egui::Button::new(RichText::new(label).color(Color32::WHITE).strong()).fill(color);
    if ui.add_enabled(view.submit_enabled, button).clicked() {
        out.push(Msg::SubmitClicked);
    }
}

fn status_line(ui: &mut egui::Ui, view: &AppViewModel) {
    if !view.status_line.is_empty() {
        ui.add_space(6.0);
        ui.label(&view.status_line);
    }
}

fn media_section(ui: &mut egui::Ui, view: &AppViewModel, server_url: &str) {
    let Some(media) = &view.media else {
        return;
    };
    ui.add_space(6.0);
    let label = match media.kind {
        MediaKind::Audio => "Processed audio:",
        MediaKind::Video => "Processed video:",
    };
    ui.horizontal(|ui| {
        ui.label(label);
        let target = resolve_media_url(server_url, &media.url);
        ui.hyperlink_to(&media.url, target);
    });
}

fn pick_file() -> Option<Msg> {
    let path = rfd::FileDialog::new()
        .set_title("Choose a media file")
        .pick_file()?;
    file_msg_from_path(&path)
}

/// Reads a local file into a `FileChosen` message. Failures are logged
/// and swallowed; the selection simply does not happen.
pub fn file_msg_from_path(path: &Path) -> Option<Msg> {
    let name = path.file_name()?.to_string_lossy().into_owned();
    match std::fs::read(path) {
        Ok(data) => Some(Msg::FileChosen {
            name,
            bytes: Bytes::from(data),
        }),
        Err(err) => {
            app_warn!("Failed to read dropped/picked file {:?}: {}", path, err);
            None
        }
    }
}

/// Backend media URLs are usually root-relative; join them against the
/// configured server for display and opening.
fn resolve_media_url(server_url: &str, media_url: &str) -> String {
    if media_url.starts_with("http://") || media_url.starts_with("https://") {
        return media_url.to_string();
    }
    format!(
        "{}/{}",
        server_url.trim_end_matches('/'),
        media_url.trim_start_matches('/')
    )
}
