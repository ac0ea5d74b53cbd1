//! State Machine Runtime
//!
//! Flat state machines for controller lifecycles, such as a paginated
//! collection moving between idle and fetching.

/// A state of some controller lifecycle
pub type StateId = u32;

/// An event fed to [`StateMachine::send`]
pub type EventId = u32;

/// `from --event--> to`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from_state: StateId,
    pub event: EventId,
    pub to_state: StateId,
}

impl Transition {
    pub const fn new(from: StateId, event: EventId, to: StateId) -> Self {
        Self {
            from_state: from,
            event,
            to_state: to,
        }
    }
}

pub struct StateMachineBuilder {
    initial_state: StateId,
    transitions: Vec<Transition>,
}

impl StateMachineBuilder {
    pub fn on(mut self, from: StateId, event: EventId, to: StateId) -> Self {
        self.transitions.push(Transition::new(from, event, to));
        self
    }

    pub fn build(self) -> StateMachine {
        StateMachine {
            current_state: self.initial_state,
            transitions: self.transitions,
        }
    }
}

/// A flat transition table and its current state
#[derive(Debug, Clone)]
pub struct StateMachine {
    current_state: StateId,
    transitions: Vec<Transition>,
}

impl StateMachine {
    pub fn builder(initial_state: StateId) -> StateMachineBuilder {
        StateMachineBuilder {
            initial_state,
            transitions: Vec::new(),
        }
    }

    pub fn current_state(&self) -> StateId {
        self.current_state
    }

    pub fn is_in(&self, state: StateId) -> bool {
        self.current_state == state
    }

    /// Fire the first transition out of the current state on `event` and
    /// return the resulting state. Unmatched events leave the machine where
    /// it is.
    pub fn send(&mut self, event: EventId) -> StateId {
        let from = self.current_state;
        if let Some(transition) = self
            .transitions
            .iter()
            .find(|t| t.from_state == from && t.event == event)
        {
            self.current_state = transition.to_state;
            tracing::trace!(from, event, to = transition.to_state, "fsm transition");
        }
        self.current_state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IDLE: StateId = 0;
    const FETCHING: StateId = 1;

    const REQUEST: EventId = 1;
    const COMMIT: EventId = 2;
    const CANCEL: EventId = 3;

    fn page_lifecycle() -> StateMachine {
        StateMachine::builder(IDLE)
            .on(IDLE, REQUEST, FETCHING)
            .on(FETCHING, REQUEST, FETCHING)
            .on(FETCHING, COMMIT, IDLE)
            .on(FETCHING, CANCEL, IDLE)
            .build()
    }

    #[test]
    fn test_request_then_commit_returns_to_idle() {
        let mut fsm = page_lifecycle();
        assert_eq!(fsm.current_state(), IDLE);

        assert_eq!(fsm.send(REQUEST), FETCHING);
        assert_eq!(fsm.send(REQUEST), FETCHING);
        assert_eq!(fsm.send(COMMIT), IDLE);
        assert!(fsm.is_in(IDLE));
    }

    #[test]
    fn test_commit_while_idle_is_ignored() {
        let mut fsm = page_lifecycle();
        assert_eq!(fsm.send(COMMIT), IDLE);
        assert_eq!(fsm.send(CANCEL), IDLE);
        assert!(fsm.is_in(IDLE));
    }

    #[test]
    fn test_cancel_abandons_fetch() {
        let mut fsm = page_lifecycle();
        fsm.send(REQUEST);
        assert_eq!(fsm.send(CANCEL), IDLE);
        assert_eq!(fsm.send(COMMIT), IDLE);
    }

    #[test]
    fn test_first_matching_transition_wins() {
        let mut fsm = StateMachine::builder(IDLE)
            .on(IDLE, REQUEST, FETCHING)
            .on(IDLE, REQUEST, 7)
            .build();
        assert_eq!(fsm.send(REQUEST), FETCHING);
    }
}
