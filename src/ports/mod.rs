mod forge_contents;
mod http_probe;
mod remote_lister;

pub use forge_contents::{ContentWrite, ForgeContents, RemoteFile};
pub use http_probe::HttpProbe;
pub use remote_lister::RemoteLister;
