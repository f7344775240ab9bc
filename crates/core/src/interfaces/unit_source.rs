use crate::scanner::ScanReport;

/// Produces the units a registry is built from
///
/// Implemented by [`crate::scanner::Scanner`]; tests substitute counting or
/// canned sources.
pub trait UnitSource: Send + Sync {
    fn scan(&self) -> ScanReport;
}
