//! MediaClean engine: asynchronous submission to the processing backend.
mod engine;
mod submit;
mod types;

pub use engine::EngineHandle;
pub use submit::{ReqwestSubmitter, SubmitSettings, Submitter};
pub use types::{
    EngineEvent, MediaKind, SubmitError, SubmitFailureKind, SubmitRequest, SubmitResponse,
    SubmitSource,
};
