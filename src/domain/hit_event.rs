//! Hit event model for asynchronous hit counting.

/// A redirect that should bump a link's hit counter.
///
/// Sent from the redirect path to [`crate::domain::hit_worker::run_hit_worker`]
/// over a bounded channel, so the redirect response never waits on a write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitEvent {
    pub code: String,
}

impl HitEvent {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_event_creation() {
        let event = HitEvent::new("abc123");
        assert_eq!(event.code, "abc123");
    }
}
