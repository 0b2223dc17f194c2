mod reachability;
mod reference;
mod remotes;

pub use reachability::{PROBE_TIMEOUT, ProbeTarget, probe_target, validate_reachable};
pub use reference::{
    FORGE_HOST, LocationKind, RepositoryReference, ensure_git_suffix, resolve,
    validate_mirror_is_forge_hosted,
};
pub use remotes::{
    RemoteDirection, RemoteEntry, detect_from_local_remotes, detect_from_remotes,
    parse_remote_listing,
};
