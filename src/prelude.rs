//! Convenience re-exports for common use.

pub use crate::bxml::{Response, Verb};
pub use crate::bxml::{
    Bridge, Conference, Forward, Gather, Hangup, Pause, PauseRecording, PlayAudio, Record,
    Redirect, ResumeRecording, Ring, SendDtmf, SpeakSentence, StartRecording, StopRecording,
    Transfer,
};
pub use crate::config::BandwidthConfig;
pub use crate::error::{BandwidthError, ErrorCategory, Result};
pub use crate::events::{Event, EventKind};
pub use crate::voice::Voice;
pub use crate::webrtc::WebRtc;
