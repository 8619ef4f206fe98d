//! MediaClean core: pure source-selection state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::{Effect, SubmitPayload};
pub use msg::{Msg, SubmitResult};
pub use state::{
    derive_active_source, AppState, MediaKind, MediaView, SourceKind, SubmitPhase, DEMO_URL,
    FLASH_DURATION,
};
pub use update::{
    update, CONNECTION_ERROR_TEXT, GENERIC_ERROR_TEXT, PROCESSING_TEXT, SELECT_SOURCE_PROMPT,
};
pub use view_model::AppViewModel;
