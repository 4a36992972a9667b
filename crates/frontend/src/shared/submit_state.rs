/// Submission guard for forms: `Idle` or `Submitting`
///
/// `begin` refuses to start while a request is outstanding; `finish` is called
/// once after every request, success or failure.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
}

impl SubmitState {
    pub fn begin(&mut self) -> bool {
        match self {
            SubmitState::Idle => {
                *self = SubmitState::Submitting;
                true
            }
            SubmitState::Submitting => false,
        }
    }

    pub fn finish(&mut self) {
        *self = SubmitState::Idle;
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmitState::Submitting)
    }

    pub fn label(&self, idle: &'static str, busy: &'static str) -> &'static str {
        if self.is_submitting() {
            busy
        } else {
            idle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_submit_is_refused() {
        let mut state = SubmitState::default();
        assert!(state.begin());
        assert!(!state.begin());
        assert!(state.is_submitting());
        assert_eq!(state.label("Sign In", "Signing in..."), "Signing in...");
    }

    #[test]
    fn test_finish_reenables() {
        let mut state = SubmitState::default();
        state.begin();
        state.finish();
        assert_eq!(state, SubmitState::Idle);
        assert_eq!(state.label("Sign In", "Signing in..."), "Sign In");
        assert!(state.begin());
    }
}
