pub mod formatter;

pub use formatter::{print_scan_report, print_injection, print_warnings};
