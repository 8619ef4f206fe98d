use crate::{AppState, Effect, Msg, SourceKind, SubmitResult, DEMO_URL, FLASH_DURATION};

/// Status shown when submit is clicked with no active source.
pub const SELECT_SOURCE_PROMPT: &str = "Please select a source (URL or File) to process.";
/// Status shown while a submission is outstanding.
pub const PROCESSING_TEXT: &str = "Processing...";
/// Fallback when the backend rejects without a message.
pub const GENERIC_ERROR_TEXT: &str = "An error occurred!";
/// Shown for any transport or parse failure.
pub const CONNECTION_ERROR_TEXT: &str = "An error occurred while connecting to the server.";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::UrlInputChanged(text) => {
            state.set_url_text(&text);
            state.rederive_active_source();
            Vec::new()
        }
        Msg::FileChosen { name, bytes } => {
            // Guard against empty picker/drop events.
            if name.is_empty() {
                return (state, Vec::new());
            }
            state.attach_file(name, bytes);
            Vec::new()
        }
        Msg::RemoveFileClicked => {
            state.clear_file();
            Vec::new()
        }
        Msg::DemoUrlClicked => {
            // The demo action overrides the derivation: the URL source is
            // active even while a previously chosen file sticks around.
            state.set_url_text(DEMO_URL);
            state.force_active(Some(SourceKind::Url));
            Vec::new()
        }
        Msg::ToggleClicked(kind) => {
            state.toggle_active(kind);
            Vec::new()
        }
        Msg::SubmitClicked => {
            if state.submission_in_flight() {
                return (state, Vec::new());
            }
            match state.begin_submission() {
                Some(payload) => {
                    state.set_status(PROCESSING_TEXT);
                    vec![Effect::Submit { payload }]
                }
                None => {
                    state.set_status(SELECT_SOURCE_PROMPT);
                    Vec::new()
                }
            }
        }
        Msg::SubmitFinished(result) => match result {
            SubmitResult::Completed { kind, media_url } => {
                state.apply_completed(kind, media_url);
                vec![Effect::ScheduleFlashReset {
                    after: FLASH_DURATION,
                }]
            }
            SubmitResult::Rejected { message } => {
                state.apply_failure(message.unwrap_or_else(|| GENERIC_ERROR_TEXT.to_string()));
                Vec::new()
            }
            SubmitResult::TransportFailed => {
                state.apply_failure(CONNECTION_ERROR_TEXT);
                Vec::new()
            }
        },
        Msg::FlashExpired => {
            state.end_flash();
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
