use url::Url;

use crate::domain::AppError;

/// Port for lightweight existence checks against repository URLs.
pub trait HttpProbe {
    /// Issue a HEAD request and return the response status code.
    ///
    /// Transport failures (DNS, TLS, timeout) are errors; HTTP error
    /// statuses are returned as `Ok` for the caller to judge.
    fn head(&self, url: &Url) -> Result<u16, AppError>;
}
