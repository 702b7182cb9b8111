use std::rc::Rc;

/// Per-view fetch lifecycle. Every dependency change re-enters `Loading`;
/// the settled variant replaces the previous one wholesale, so at most one
/// of data and error is ever fresh.
#[derive(Clone, PartialEq, Debug)]
pub enum FetchState<T> {
    Loading,
    Loaded(Rc<T>),
    Error(String),
}

impl<T> FetchState<T> {
    /// Returns true while a request is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    /// Returns the data if the last fetch succeeded.
    pub fn data(&self) -> Option<&Rc<T>> {
        match self {
            FetchState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    /// Returns the error text if the last fetch failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Error(message) => Some(message),
            _ => None,
        }
    }
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Loading
    }
}
