//! Reachability probe using reqwest.

use reqwest::blocking::Client;
use url::Url;

use crate::domain::{AppError, PROBE_TIMEOUT};
use crate::ports::HttpProbe;

/// Issues HEAD requests with the probe timeout applied.
#[derive(Debug, Clone)]
pub struct ReqwestProbe {
    client: Client,
}

impl ReqwestProbe {
    pub fn new() -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(PROBE_TIMEOUT)
            .build()
            .map_err(|e| AppError::Http { url: "(probe)".to_string(), details: e.to_string() })?;
        Ok(Self { client })
    }
}

impl HttpProbe for ReqwestProbe {
    fn head(&self, url: &Url) -> Result<u16, AppError> {
        let response = self
            .client
            .head(url.clone())
            .send()
            .map_err(|e| AppError::Http { url: url.to_string(), details: e.to_string() })?;
        Ok(response.status().as_u16())
    }
}
