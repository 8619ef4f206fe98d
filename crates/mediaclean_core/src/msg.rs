use bytes::Bytes;

use crate::{MediaKind, SourceKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the URL input box.
    UrlInputChanged(String),
    /// A file arrived from the picker or the drop target.
    FileChosen { name: String, bytes: Bytes },
    /// User clicked the remove control on the selected file.
    RemoveFileClicked,
    /// User clicked the one-click demo URL.
    DemoUrlClicked,
    /// User clicked a source toggle.
    ToggleClicked(SourceKind),
    /// User clicked the submit control.
    SubmitClicked,
    /// Engine resolved the in-flight submission.
    SubmitFinished(SubmitResult),
    /// The success flash duration elapsed.
    FlashExpired,
    /// Fallback for placeholder wiring.
    NoOp,
}

/// Outcome of one submission attempt as seen by the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitResult {
    /// Backend finished processing and published the result.
    Completed { kind: MediaKind, media_url: String },
    /// Backend refused the request; `message` is user-facing text.
    Rejected { message: Option<String> },
    /// The request never produced a usable response. The cause is logged
    /// at the engine, never surfaced to the user.
    TransportFailed,
}
