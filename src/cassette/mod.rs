//! Cassette format for replaying recorded port interactions in tests.

pub mod format;
pub mod replayer;

pub use format::{Cassette, Interaction};
pub use replayer::CassetteReplayer;
