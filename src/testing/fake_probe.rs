use std::cell::RefCell;

use url::Url;

use crate::domain::AppError;
use crate::ports::HttpProbe;

/// Probe that answers every request with a canned status or error.
pub struct FakeProbe {
    response: Result<u16, String>,
    requests: RefCell<Vec<String>>,
}

impl FakeProbe {
    pub fn with_status(status: u16) -> Self {
        Self { response: Ok(status), requests: RefCell::new(Vec::new()) }
    }

    pub fn failing(details: &str) -> Self {
        Self { response: Err(details.to_string()), requests: RefCell::new(Vec::new()) }
    }

    /// URLs probed so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl HttpProbe for FakeProbe {
    fn head(&self, url: &Url) -> Result<u16, AppError> {
        self.requests.borrow_mut().push(url.to_string());
        self.response
            .clone()
            .map_err(|details| AppError::Http { url: url.to_string(), details })
    }
}
