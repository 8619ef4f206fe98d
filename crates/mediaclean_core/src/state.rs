use std::time::Duration;

use bytes::Bytes;

use crate::view_model::AppViewModel;
use crate::SubmitPayload;

/// Sample URL written into the input field by the demo action.
pub const DEMO_URL: &str = "https://www.youtube.com/watch?v=is6dcedp4w0";

/// How long the submit control keeps its success appearance after a
/// completed submission before reverting to the idle one.
pub const FLASH_DURATION: Duration = Duration::from_secs(3);

/// The input modality designated for submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Url,
    File,
}

/// Which playback surface a processing result targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Audio,
    Video,
}

/// A completed processing result ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaView {
    pub kind: MediaKind,
    pub url: String,
}

/// Submission lifecycle. `InFlight` blocks further submits until the
/// outstanding request resolves; `Flash` is the transient success
/// appearance that reverts to `Idle` after [`FLASH_DURATION`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    InFlight,
    Flash,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct UploadedFile {
    name: String,
    bytes: Bytes,
}

/// Derive the active source from the underlying inputs: a present file
/// always wins, otherwise non-empty URL text selects the URL source.
pub fn derive_active_source(file_present: bool, url_text: &str) -> Option<SourceKind> {
    if file_present {
        Some(SourceKind::File)
    } else if !url_text.is_empty() {
        Some(SourceKind::Url)
    } else {
        None
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    uploaded_file: Option<UploadedFile>,
    url_text: String,
    active_source: Option<SourceKind>,
    phase: SubmitPhase,
    status_line: String,
    media: Option<MediaView>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            url_text: self.url_text.clone(),
            file_name: self.uploaded_file.as_ref().map(|file| file.name.clone()),
            active_source: self.active_source,
            // Both sources filled at once is an ambiguous choice the user
            // must resolve; only then are the toggles offered.
            show_source_toggles: self.uploaded_file.is_some() && !self.url_text.is_empty(),
            status_line: self.status_line.clone(),
            submit_enabled: self.phase != SubmitPhase::InFlight,
            submit_flashing: self.phase == SubmitPhase::Flash,
            media: self.media.clone(),
            dirty: self.dirty,
        }
    }

    /// Returns the dirty flag and clears it, for render coalescing.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_url_text(&mut self, text: &str) {
        let trimmed = text.trim();
        if self.url_text != trimmed {
            self.url_text = trimmed.to_string();
            self.mark_dirty();
        }
    }

    pub(crate) fn rederive_active_source(&mut self) {
        let derived = derive_active_source(self.uploaded_file.is_some(), &self.url_text);
        if self.active_source != derived {
            self.active_source = derived;
            self.mark_dirty();
        }
    }

    pub(crate) fn attach_file(&mut self, name: String, bytes: Bytes) {
        self.uploaded_file = Some(UploadedFile { name, bytes });
        self.active_source = Some(SourceKind::File);
        self.mark_dirty();
    }

    pub(crate) fn clear_file(&mut self) {
        self.uploaded_file = None;
        self.rederive_active_source();
        self.mark_dirty();
    }

    pub(crate) fn force_active(&mut self, active: Option<SourceKind>) {
        self.active_source = active;
        self.mark_dirty();
    }

    pub(crate) fn toggle_active(&mut self, kind: SourceKind) {
        self.active_source = if self.active_source == Some(kind) {
            None
        } else {
            Some(kind)
        };
        self.mark_dirty();
    }

    pub(crate) fn set_status(&mut self, text: impl Into<String>) {
        self.status_line = text.into();
        self.mark_dirty();
    }

    pub(crate) fn submission_in_flight(&self) -> bool {
        self.phase == SubmitPhase::InFlight
    }

    /// Builds the payload for the active source and enters `InFlight`.
    /// Returns `None` when the active source has no backing data.
    pub(crate) fn begin_submission(&mut self) -> Option<SubmitPayload> {
        let payload = match self.active_source? {
            SourceKind::File => {
                let file = self.uploaded_file.as_ref()?;
                SubmitPayload::File {
                    name: file.name.clone(),
                    bytes: file.bytes.clone(),
                }
            }
            SourceKind::Url => {
                if self.url_text.is_empty() {
                    return None;
                }
                SubmitPayload::Url(self.url_text.clone())
            }
        };
        self.phase = SubmitPhase::InFlight;
        self.mark_dirty();
        Some(payload)
    }

    pub(crate) fn apply_completed(&mut self, kind: MediaKind, url: String) {
        self.media = Some(MediaView { kind, url });
        self.status_line.clear();
        self.phase = SubmitPhase::Flash;
        self.mark_dirty();
    }

    /// Terminal for this attempt only; the previous media result is kept.
    pub(crate) fn apply_failure(&mut self, message: impl Into<String>) {
        self.status_line = message.into();
        self.phase = SubmitPhase::Idle;
        self.mark_dirty();
    }

    pub(crate) fn end_flash(&mut self) {
        if self.phase == SubmitPhase::Flash {
            self.phase = SubmitPhase::Idle;
            self.mark_dirty();
        }
    }
}
