//! WebRTC API: sessions and the participants joined to them.

mod participant;
mod session;

pub use participant::{
    CreateParticipantInput, CreateParticipantOutput, Participant, ParticipantSubscription,
    PublishPermission, Subscriptions,
};
pub use session::{AddParticipantInput, CreateSessionInput, Session};

use std::sync::Arc;

use crate::config::BandwidthConfig;
use crate::error::Result;
use crate::transport::{HttpTransport, Transport};

/// Client for the WebRTC API of one account.
#[derive(Clone)]
pub struct WebRtc {
    transport: Arc<dyn Transport>,
}

impl WebRtc {
    pub fn new(config: &BandwidthConfig) -> Result<Self> {
        config.validate()?;
        let transport = HttpTransport::new(
            &config.webrtc_base_url,
            &config.account_id,
            config.username.clone(),
            config.password.clone(),
            config.timeout,
        )?;
        Ok(Self::with_transport(Arc::new(transport)))
    }

    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }
}

impl std::fmt::Debug for WebRtc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebRtc").finish_non_exhaustive()
    }
}
