pub mod runtime;

pub use runtime::{load_config, OutputConfig, RuntimeConfig};
