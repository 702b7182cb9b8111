use std::cell::Cell;
use std::rc::Rc;

/// Cancellation token shared between an in-flight fetch and the effect
/// cleanup that supersedes it. Tripping the flag does not abort the network
/// call; it only marks the eventual completion as stale so the hook drops it
/// (last-request-wins).
#[derive(Clone, Debug, Default)]
pub struct CancelFlag(Rc<Cell<bool>>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks every clone of this flag as cancelled.
    pub fn cancel(&self) {
        self.0.set(true);
    }

    /// True once any clone has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_flag_is_live() {
        let flag = CancelFlag::new();
        assert!(!flag.is_cancelled());
    }

    #[test]
    fn test_clones_observe_cancellation() {
        let flag = CancelFlag::new();
        let guard = flag.clone();

        flag.cancel();
        assert!(guard.is_cancelled());
    }

    #[test]
    fn test_independent_flags_do_not_interfere() {
        let first = CancelFlag::new();
        let second = CancelFlag::new();

        first.cancel();
        assert!(!second.is_cancelled());
    }
}
