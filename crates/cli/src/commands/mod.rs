pub mod init;
pub mod match_cmd;
pub mod scan;
pub mod watch;

pub use init::init_command;
pub use match_cmd::match_command;
pub use scan::scan_command;
pub use watch::watch_command;
