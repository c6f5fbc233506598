//! Bandwidth: Rust client for the Bandwidth Voice and WebRTC APIs.
//!
//! Three independent pieces:
//! * [`events`] decodes inbound callback payloads into a typed [`events::Event`].
//! * [`bxml`] writes BXML call-control documents.
//! * [`voice`] and [`webrtc`] wrap the REST APIs over a pluggable
//!   [`transport::Transport`].
//!
//! # Quick Start
//!
//! ```no_run
//! use bandwidth::prelude::*;
//!
//! # async fn example(payload: &[u8]) -> bandwidth::error::Result<()> {
//! let config = BandwidthConfig::from_env()?;
//! let voice = Voice::new(&config)?;
//!
//! if let Event::Answer(answer) = bandwidth::events::parse(payload)? {
//!     let call_id = answer.call_id.unwrap_or_default();
//!     voice
//!         .update_call_bxml(&call_id, &[Pause { duration: Some(3) }.into(), Hangup {}.into()])
//!         .await?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod bxml;
pub mod config;
pub mod error;
pub mod events;
pub mod prelude;
pub mod transport;
pub mod util;
pub mod voice;
pub mod webrtc;
