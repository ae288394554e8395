// src/core/net.rs

// Blocking HTTPS GET. The sheet export answers with a redirect to
// googleusercontent.com, which reqwest follows.

use std::time::Duration;

use crate::config::consts::{CONNECT_TIMEOUT_SECS, REQUEST_TIMEOUT_SECS, USER_AGENT};
use crate::error::LoadError;

pub fn http_get(url: &str) -> Result<String, LoadError> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()?;

    let resp = client.get(url).send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(LoadError::Status { code: status.as_u16(), url: s!(url) });
    }

    Ok(resp.text()?)
}
