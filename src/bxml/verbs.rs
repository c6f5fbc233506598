//! BXML verb definitions.
//!
//! Each verb is a flat record of optional attributes. The `=> "name"` after a
//! field is the attribute name written to the document; attributes appear in
//! the order the fields are declared here. Unset (`None`) fields are omitted.

/// Defines the verb structs, the [`Verb`] enum over them and the
/// field-to-attribute mapping, all from one table.
macro_rules! define_verbs {
    (
        $(
            $(#[$meta:meta])*
            $verb:ident {
                $(
                    $(#[$field_meta:meta])*
                    $field:ident: $field_type:ty => $attr:literal
                ),* $(,)?
            }
        )*
    ) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Default, PartialEq, Eq)]
            pub struct $verb {
                $(
                    $(#[$field_meta])*
                    pub $field: Option<$field_type>,
                )*
            }

            impl $verb {
                /// Attribute name/value pairs for the set fields, in declaration order.
                pub fn attributes(&self) -> Vec<(&'static str, String)> {
                    #[allow(unused_mut)]
                    let mut attrs = Vec::new();
                    $(
                        if let Some(value) = &self.$field {
                            attrs.push(($attr, value.to_string()));
                        }
                    )*
                    attrs
                }
            }

            impl From<$verb> for Verb {
                fn from(verb: $verb) -> Self {
                    Verb::$verb(verb)
                }
            }
        )*

        /// One call-control instruction in a BXML document.
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum Verb {
            $($verb($verb),)*
        }

        impl Verb {
            /// Element name written to the document.
            pub fn name(&self) -> &'static str {
                match self {
                    $(Verb::$verb(_) => stringify!($verb),)*
                }
            }

            pub fn attributes(&self) -> Vec<(&'static str, String)> {
                match self {
                    $(Verb::$verb(verb) => verb.attributes(),)*
                }
            }
        }
    };
}

define_verbs! {
    /// Connects the current call to another active call.
    Bridge {
        bridge_complete_fallback_method: String => "bridgeCompleteFallbackMethod",
        bridge_complete_fallback_url: String => "bridgeCompleteFallbackUrl",
        bridge_complete_method: String => "bridgeCompleteMethod",
        /// Receives the `bridgeComplete` event and may return new BXML.
        bridge_complete_url: String => "bridgeCompleteUrl",
        bridge_target_complete_fallback_method: String => "bridgeTargetCompleteFallbackMethod",
        bridge_target_complete_fallback_url: String => "bridgeTargetCompleteFallbackUrl",
        bridge_target_complete_method: String => "bridgeTargetCompleteMethod",
        /// Receives the `bridgeTargetComplete` event and may return new BXML.
        bridge_target_complete_url: String => "bridgeTargetCompleteUrl",
        fallback_password: String => "fallbackPassword",
        fallback_username: String => "fallbackUsername",
        password: String => "password",
        tag: String => "tag",
        username: String => "username",
    }

    /// Places the call into a named conference.
    Conference {
        /// Seconds, 1–25. Inherited from the creating call when unset.
        callback_timeout: u32 => "callbackTimeout",
        /// Comma-separated call ids this member coaches.
        call_ids_to_coach: String => "callIdsToCoach",
        conference_event_fallback_method: String => "conferenceEventFallbackMethod",
        conference_event_fallback_url: String => "conferenceEventFallbackUrl",
        conference_event_method: String => "conferenceEventMethod",
        /// Fixed by the first member's BXML; later members cannot change it.
        conference_event_url: String => "conferenceEventUrl",
        fallback_password: String => "fallbackPassword",
        fallback_username: String => "fallbackUsername",
        hold: bool => "hold",
        mute: bool => "mute",
        password: String => "password",
        tag: String => "tag",
        username: String => "username",
    }

    /// Forwards an unanswered incoming call to another number.
    Forward {
        /// Seconds to wait for an answer, 1–300.
        call_timeout: u32 => "callTimeout",
        diversion_reason: String => "diversionReason",
        diversion_treatment: String => "diversionTreatment",
        /// E.164 caller id for the outgoing leg.
        from: String => "from",
        /// E.164 destination.
        to: String => "to",
    }

    /// Collects DTMF digits.
    Gather {
        fallback_password: String => "fallbackPassword",
        fallback_username: String => "fallbackUsername",
        first_digit_timeout: u32 => "firstDigitTimeout",
        gather_fallback_method: String => "gatherFallbackMethod",
        gather_fallback_url: String => "gatherFallbackUrl",
        gather_method: String => "gatherMethod",
        gather_url: String => "gatherUrl",
        inter_digit_timeout: u32 => "interDigitTimeout",
        max_digits: u32 => "maxDigits",
        password: String => "password",
        repeat_count: u32 => "repeatCount",
        tag: String => "tag",
        terminating_digits: String => "terminatingDigits",
        username: String => "username",
    }

    /// Ends the call.
    Hangup {}

    /// Waits silently before continuing.
    Pause {
        duration: u32 => "duration",
    }

    PauseRecording {}

    /// Plays an audio file.
    PlayAudio {
        username: String => "username",
        password: String => "password",
    }

    /// Records the caller until silence, a terminating digit or the maximum duration.
    Record {
        fallback_password: String => "fallbackPassword",
        fallback_username: String => "fallbackUsername",
        /// `wav` (default) or `mp3`.
        file_format: String => "fileFormat",
        /// Seconds, at most 10800.
        max_duration: u32 => "maxDuration",
        password: String => "password",
        record_complete_fallback_method: String => "recordCompleteFallbackMethod",
        record_complete_fallback_url: String => "recordCompleteFallbackUrl",
        record_complete_method: String => "recordCompleteMethod",
        record_complete_url: String => "recordCompleteUrl",
        recording_available_method: String => "recordingAvailableMethod",
        recording_available_url: String => "recordingAvailableUrl",
        silence_timeout: u32 => "silenceTimeout",
        tag: String => "tag",
        terminating_digits: String => "terminatingDigits",
        transcribe: bool => "transcribe",
        transcription_available_method: String => "transcriptionAvailableMethod",
        transcription_available_url: String => "transcriptionAvailableUrl",
        username: String => "username",
    }

    /// Requests new BXML from another URL.
    Redirect {
        redirect_url: String => "redirectUrl",
        redirect_method: String => "redirectMethod",
        redirect_fallback_url: String => "redirectFallbackUrl",
        redirect_fallback_method: String => "redirectFallbackMethod",
        username: String => "username",
        password: String => "password",
        fallback_username: String => "fallbackUsername",
        fallback_password: String => "fallbackPassword",
        tag: String => "tag",
    }

    ResumeRecording {}

    /// Plays a ringing tone.
    Ring {
        duration: u32 => "duration",
    }

    SendDtmf {
        /// Milliseconds per tone, 50–5000.
        tone_duration: u32 => "toneDuration",
        /// Milliseconds of silence after each tone, 50–5000.
        tone_interval: u32 => "toneInterval",
    }

    /// Reads text to the caller with a synthesized voice.
    SpeakSentence {
        voice: String => "voice",
        gender: String => "gender",
        locale: String => "locale",
    }

    /// Starts a background recording of the call (or conference).
    StartRecording {
        recording_available_url: String => "recordingAvailableUrl",
        recording_available_method: String => "recordingAvailableMethod",
        transcribe: bool => "transcribe",
        transcription_available_url: String => "transcriptionAvailableUrl",
        transcription_available_method: String => "transcriptionAvailableMethod",
        username: String => "username",
        password: String => "password",
        tag: String => "tag",
        file_format: String => "fileFormat",
        multi_channel: bool => "multiChannel",
    }

    StopRecording {}

    /// Transfers the call to one or more destinations.
    Transfer {
        transfer_caller_id: String => "transferCallerId",
        call_timeout: u32 => "callTimeout",
        transfer_complete_url: String => "transferCompleteUrl",
        transfer_complete_method: String => "transferCompleteMethod",
        transfer_complete_fallback_url: String => "transferCompleteFallbackUrl",
        transfer_complete_fallback_method: String => "transferCompleteFallbackMethod",
        username: String => "username",
        password: String => "password",
        fallback_username: String => "fallbackUsername",
        fallback_password: String => "fallbackPassword",
        tag: String => "tag",
        diversion_treatment: String => "diversionTreatment",
        diversion_reason: String => "diversionReason",
    }
}
