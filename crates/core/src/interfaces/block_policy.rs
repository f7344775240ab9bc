/// Decides whether the loader stays out of a document entirely
pub trait BlockPolicy {
    fn is_blocked(&self, url: &str) -> bool;
}
