use std::time::Duration;

use bytes::Bytes;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Hand the payload to the submission engine.
    Submit { payload: SubmitPayload },
    /// Arrange for `Msg::FlashExpired` after the given delay.
    ScheduleFlashReset { after: Duration },
}

/// Exactly one source travels to the backend, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitPayload {
    Url(String),
    File { name: String, bytes: Bytes },
}
