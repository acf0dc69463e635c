//! Search session state machine
//!
//! The loading/result/idle behavior is an explicit sum type rather
//! than a pair of mutable flags, so failures have a visible state
//! instead of silently vanishing. The last successful result is kept
//! alongside the state: a later failure leaves it on screen unchanged.

use tracing::debug;

use crate::toy::ToyInfo;

/// Lifecycle of one search interaction
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchState {
    /// No search submitted yet
    #[default]
    Idle,
    /// A request is in flight
    Loading { query: String },
    /// The most recent request succeeded
    Displaying { query: String, info: ToyInfo },
    /// The most recent request failed
    Failed { query: String, reason: String },
}

/// Owns the search state plus the last successful result
#[derive(Debug, Clone, Default)]
pub struct SearchSession {
    state: SearchState,
    last_success: Option<(String, ToyInfo)>,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state
    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Whether a request is in flight
    pub fn is_loading(&self) -> bool {
        matches!(self.state, SearchState::Loading { .. })
    }

    /// Submit a query, transitioning to `Loading`
    ///
    /// Returns false without any state change when the query is empty
    /// or whitespace-only, or when a request is already in flight (the
    /// disabled submit control). A true return means the caller owns
    /// issuing exactly one request for this query.
    pub fn submit(&mut self, query: &str) -> bool {
        if query.trim().is_empty() {
            return false;
        }
        if self.is_loading() {
            debug!("submit ignored, request already in flight");
            return false;
        }
        self.state = SearchState::Loading {
            query: query.to_string(),
        };
        true
    }

    /// Record a successful settlement
    ///
    /// Settlements apply in arrival order; if two requests were raced
    /// past the submit gate, the last to resolve wins.
    pub fn resolve(&mut self, query: impl Into<String>, info: ToyInfo) {
        let query = query.into();
        self.last_success = Some((query.clone(), info.clone()));
        self.state = SearchState::Displaying { query, info };
    }

    /// Record a failed settlement
    ///
    /// The last successful result is untouched, so the previous card
    /// stays displayed while the reason is surfaced.
    pub fn fail(&mut self, query: impl Into<String>, reason: impl Into<String>) {
        self.state = SearchState::Failed {
            query: query.into(),
            reason: reason.into(),
        };
    }

    /// The card to render now: the current result, or the last
    /// successful one while loading or after a failure
    pub fn displayed(&self) -> Option<(&str, &ToyInfo)> {
        match &self.state {
            SearchState::Displaying { query, info } => Some((query.as_str(), info)),
            _ => self
                .last_success
                .as_ref()
                .map(|(query, info)| (query.as_str(), info)),
        }
    }

    /// Failure reason, when in the failed state
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            SearchState::Failed { reason, .. } => Some(reason.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_info(description: &str) -> ToyInfo {
        ToyInfo {
            description: description.to_string(),
            price_comparison: "$5-$10".to_string(),
            developmental_benefits: "Hand-eye coordination".to_string(),
            reviews: "4.5 stars".to_string(),
        }
    }

    #[test]
    fn test_blank_submit_is_ignored() {
        let mut session = SearchSession::new();
        assert!(!session.submit(""));
        assert!(!session.submit("   \t  "));
        assert_eq!(*session.state(), SearchState::Idle);
        assert!(session.displayed().is_none());
    }

    #[test]
    fn test_submit_enters_loading() {
        let mut session = SearchSession::new();
        assert!(session.submit("red ball"));
        assert!(session.is_loading());
        assert_eq!(
            *session.state(),
            SearchState::Loading {
                query: "red ball".to_string()
            }
        );
    }

    #[test]
    fn test_submit_while_loading_is_refused() {
        let mut session = SearchSession::new();
        assert!(session.submit("red ball"));
        assert!(!session.submit("blue ball"));
        assert_eq!(
            *session.state(),
            SearchState::Loading {
                query: "red ball".to_string()
            }
        );
    }

    #[test]
    fn test_resolve_displays_result() {
        let mut session = SearchSession::new();
        session.submit("red ball");
        session.resolve("red ball", sample_info("A red ball"));

        assert!(!session.is_loading());
        let (query, info) = session.displayed().unwrap();
        assert_eq!(query, "red ball");
        assert_eq!(info.description, "A red ball");
    }

    #[test]
    fn test_failure_keeps_previous_result() {
        let mut session = SearchSession::new();
        session.submit("red ball");
        session.resolve("red ball", sample_info("A red ball"));

        session.submit("blue ball");
        session.fail("blue ball", "API request failed (500): oops");

        // Previous card unchanged, reason visible
        let (query, info) = session.displayed().unwrap();
        assert_eq!(query, "red ball");
        assert_eq!(info.description, "A red ball");
        assert_eq!(session.error(), Some("API request failed (500): oops"));
    }

    #[test]
    fn test_failure_with_no_previous_result() {
        let mut session = SearchSession::new();
        session.submit("red ball");
        session.fail("red ball", "transport error");

        assert!(session.displayed().is_none());
        assert_eq!(session.error(), Some("transport error"));
    }

    #[test]
    fn test_repeat_query_is_idempotent() {
        let mut session = SearchSession::new();
        session.submit("red ball");
        session.resolve("red ball", sample_info("A red ball"));

        session.submit("red ball");
        session.resolve("red ball", sample_info("A red ball"));

        let (query, info) = session.displayed().unwrap();
        assert_eq!(query, "red ball");
        assert_eq!(*info, sample_info("A red ball"));
    }

    #[test]
    fn test_last_to_resolve_wins() {
        let mut session = SearchSession::new();
        session.submit("red ball");
        // Two settlements arrive out of submit order
        session.resolve("blue ball", sample_info("A blue ball"));
        session.resolve("red ball", sample_info("A red ball"));

        let (query, info) = session.displayed().unwrap();
        assert_eq!(query, "red ball");
        assert_eq!(info.description, "A red ball");
    }

    #[test]
    fn test_resolve_clears_earlier_failure() {
        let mut session = SearchSession::new();
        session.submit("red ball");
        session.fail("red ball", "transport error");
        assert!(session.error().is_some());

        session.submit("red ball");
        session.resolve("red ball", sample_info("A red ball"));
        assert!(session.error().is_none());
        assert!(session.displayed().is_some());
    }
}
