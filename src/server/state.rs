// Shared application state: one outbound client, reused across requests.
// Nothing here is mutable; every request is independent.
use reqwest::{Client, ClientBuilder};
use std::time;

#[derive(Clone)]
pub struct AppState {
    pub client: Client,
    pub api_url: String,
}

pub fn build_state(api_url: String, timeout_ms: u64) -> anyhow::Result<AppState> {
    let client = ClientBuilder::default()
        .connect_timeout(time::Duration::from_millis(1_000))
        .timeout(time::Duration::from_millis(timeout_ms))
        .build()?;

    Ok(AppState {
        client,
        api_url: api_url.trim_end_matches('/').to_string(),
    })
}
