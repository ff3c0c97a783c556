pub mod recording_host;
pub mod synthetic_volume;
