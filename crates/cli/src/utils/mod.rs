pub mod config;
pub mod preview_host;

pub use config::load_config;
pub use preview_host::PreviewHost;
