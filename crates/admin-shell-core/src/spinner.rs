/// In-flight request accounting for the shared loading indicator.
///
/// With several independent pollers, "executing" means at least one request
/// is in flight; the show/hide edges are the counter crossing zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpinnerState {
    in_flight: u32,
}

impl SpinnerState {
    /// Returns `true` when this request is the first in flight, i.e. the
    /// shell should arm the delayed show.
    pub fn request_started(&mut self) -> bool {
        self.in_flight = self.in_flight.saturating_add(1);
        self.in_flight == 1
    }

    /// Returns `true` when all requests have settled, i.e. the shell should
    /// hide the indicator.
    pub fn request_settled(&mut self) -> bool {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.in_flight == 0
    }

    pub fn is_executing(&self) -> bool {
        self.in_flight > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_request_arms_the_show() {
        let mut state = SpinnerState::default();
        assert!(state.request_started());
        assert!(state.is_executing());
        assert!(!state.request_started());
    }

    #[test]
    fn hide_fires_only_when_all_requests_settle() {
        let mut state = SpinnerState::default();
        let _ = state.request_started();
        let _ = state.request_started();

        assert!(!state.request_settled());
        assert!(state.is_executing());
        assert!(state.request_settled());
        assert!(!state.is_executing());
    }

    #[test]
    fn settle_without_start_stays_idle() {
        let mut state = SpinnerState::default();
        assert!(state.request_settled());
        assert!(!state.is_executing());
    }
}
