#![allow(dead_code)]

use axum_test::TestServer;
use mxroute_alias_gateway::alias::{Clock, FixedClock, TokenSource};
use mxroute_alias_gateway::application::services::{AliasService, AuthService};
use mxroute_alias_gateway::config::MxrouteConfig;
use mxroute_alias_gateway::infrastructure::MxrouteClient;
use mxroute_alias_gateway::routes::app_router;
use mxroute_alias_gateway::state::AppState;
use std::sync::Arc;

pub const TEST_TOKEN: &str = "test-token";
pub const MX_SERVER: &str = "mx.example.com";
pub const MX_USERNAME: &str = "user";
pub const MX_API_KEY: &str = "key";

/// Token source returning the same words and hex string on every call.
pub struct FixedTokens {
    pub words: Vec<String>,
    pub hex: String,
}

impl FixedTokens {
    pub fn new(words: &[&str], hex: &str) -> Self {
        Self {
            words: words.iter().map(|word| word.to_string()).collect(),
            hex: hex.to_string(),
        }
    }
}

impl TokenSource for FixedTokens {
    fn words(&self, count: usize) -> Vec<String> {
        self.words.iter().take(count).cloned().collect()
    }

    fn hex(&self, len: usize) -> String {
        self.hex.chars().take(len).collect()
    }
}

pub fn mxroute_config(api_url: &str) -> MxrouteConfig {
    MxrouteConfig {
        api_url: api_url.to_string(),
        server: MX_SERVER.to_string(),
        username: MX_USERNAME.to_string(),
        api_key: MX_API_KEY.to_string(),
        timeout_secs: 5,
    }
}

pub fn create_test_state(
    api_url: &str,
    clock: impl Clock + 'static,
    tokens: impl TokenSource + 'static,
) -> AppState {
    let client = MxrouteClient::new(&mxroute_config(api_url)).unwrap();

    let alias_service = AliasService::new(Arc::new(client), Arc::new(clock), Arc::new(tokens));
    let auth_service = AuthService::new(TEST_TOKEN);

    AppState::new(Arc::new(alias_service), Arc::new(auth_service))
}

/// Full router against a mock MXroute at `api_url`, frozen on 2026-02-08.
pub fn make_server(api_url: &str) -> TestServer {
    make_server_on(api_url, 2026, 2, 8)
}

pub fn make_server_on(api_url: &str, year: i32, month: u32, day: u32) -> TestServer {
    let clock = FixedClock::on(year, month, day).unwrap();
    let tokens = FixedTokens::new(&["slug", "word"], "abcdef");

    TestServer::new(app_router(create_test_state(api_url, clock, tokens))).unwrap()
}
