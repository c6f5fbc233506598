//! Shared test helpers: clients pointed at a wiremock server.

#![allow(dead_code)]

use bandwidth::config::BandwidthConfig;
use bandwidth::voice::Voice;
use bandwidth::webrtc::WebRtc;
use wiremock::MockServer;

pub const ACCOUNT_ID: &str = "9900000";
/// `Basic base64("user:pass")`.
pub const BASIC_AUTH: &str = "Basic dXNlcjpwYXNz";

pub fn account_path(rest: &str) -> String {
    format!("/accounts/{ACCOUNT_ID}{rest}")
}

pub fn test_config(server: &MockServer) -> BandwidthConfig {
    let base = format!("{}/accounts", server.uri());
    BandwidthConfig::new(ACCOUNT_ID, "user", "pass")
        .with_voice_base_url(base.clone())
        .with_webrtc_base_url(base)
}

pub fn voice(server: &MockServer) -> Voice {
    Voice::new(&test_config(server)).expect("voice client")
}

pub fn webrtc(server: &MockServer) -> WebRtc {
    WebRtc::new(&test_config(server)).expect("webrtc client")
}
