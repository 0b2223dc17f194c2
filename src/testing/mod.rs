mod fake_forge;
mod fake_probe;
mod fake_remotes;

#[allow(unused_imports)]
pub use fake_forge::{FakeForge, RecordedWrite};
pub use fake_probe::FakeProbe;
pub use fake_remotes::FakeRemotes;
