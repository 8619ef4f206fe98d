use crate::{MediaView, SourceKind};

/// Everything the rendering surface needs, derived from `AppState`.
/// Renderers consume this and nothing else, so the state machine stays
/// testable without a UI.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub url_text: String,
    pub file_name: Option<String>,
    pub active_source: Option<SourceKind>,
    /// Both a file and URL text are present; offer the toggles so the
    /// user can resolve the ambiguity.
    pub show_source_toggles: bool,
    pub status_line: String,
    pub submit_enabled: bool,
    /// Submit control wears its success appearance.
    pub submit_flashing: bool,
    pub media: Option<MediaView>,
    pub dirty: bool,
}

impl AppViewModel {
    /// True when the panel (and toggle) for `kind` should be highlighted.
    /// At most one source is marked active at a time.
    pub fn is_source_active(&self, kind: SourceKind) -> bool {
        self.active_source == Some(kind)
    }

    /// True when the drop target should show its file-selected state
    /// instead of the upload prompt.
    pub fn has_file(&self) -> bool {
        self.file_name.is_some()
    }
}
