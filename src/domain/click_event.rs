//! Click event message for asynchronous click tracking.

/// An in-memory click event handed from the redirect path to the
/// background worker.
///
/// Carries the raw request metadata; classification and truncation happen
/// in the worker so the redirect response never pays for them.
#[derive(Debug, Clone)]
pub struct ClickEvent {
    pub link_id: i64,
    pub referrer: Option<String>,
    pub user_agent: Option<String>,
    pub ip: Option<String>,
}

impl ClickEvent {
    pub fn new(
        link_id: i64,
        referrer: Option<String>,
        user_agent: Option<String>,
        ip: Option<String>,
    ) -> Self {
        Self {
            link_id,
            referrer,
            user_agent,
            ip,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_event_full() {
        let event = ClickEvent::new(
            42,
            Some("https://google.com".to_string()),
            Some("Mozilla/5.0".to_string()),
            Some("192.168.1.1".to_string()),
        );

        assert_eq!(event.link_id, 42);
        assert_eq!(event.referrer, Some("https://google.com".to_string()));
        assert_eq!(event.user_agent, Some("Mozilla/5.0".to_string()));
        assert_eq!(event.ip, Some("192.168.1.1".to_string()));
    }

    #[test]
    fn test_click_event_minimal() {
        let event = ClickEvent::new(1, None, None, None);

        assert_eq!(event.link_id, 1);
        assert!(event.referrer.is_none());
        assert!(event.user_agent.is_none());
        assert!(event.ip.is_none());
    }
}
