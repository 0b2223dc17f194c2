pub mod git_command;
pub mod github_contents_http;
pub mod http_probe;

pub use git_command::GitCommandAdapter;
pub use github_contents_http::GitHubContentsClient;
pub use http_probe::ReqwestProbe;
