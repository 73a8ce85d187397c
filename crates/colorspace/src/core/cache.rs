use std::cell::Cell;

/// The state of a color's native components.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum State<T> {
    /// The components need to be recomputed from RGBA.
    Stale,
    /// The components are current and RGBA has been updated from them.
    Fresh(T),
}

/// A memoized set of native components.
///
/// The memo starts out stale. The first read after a mutation recomputes the
/// components and caches them until the next RGBA write marks them stale
/// again. Since reads only take a shared reference, the state lives in a
/// [`Cell`].
#[derive(Clone, Debug)]
pub(crate) struct Memo<T: Copy> {
    state: Cell<State<T>>,
}

impl<T: Copy> Memo<T> {
    /// Create a new stale memo.
    pub const fn stale() -> Self {
        Self {
            state: Cell::new(State::Stale),
        }
    }

    /// Create a new memo with the given current value.
    pub const fn fresh(value: T) -> Self {
        Self {
            state: Cell::new(State::Fresh(value)),
        }
    }

    /// Get the current state.
    #[cfg(test)]
    pub fn state(&self) -> State<T> {
        self.state.get()
    }

    /// Get the memoized value, computing it first if stale.
    #[inline]
    pub fn get_or_compute(&self, compute: impl FnOnce() -> T) -> T {
        match self.state.get() {
            State::Fresh(value) => value,
            State::Stale => {
                let value = compute();
                self.state.set(State::Fresh(value));
                value
            }
        }
    }

    /// Replace the memoized value.
    #[inline]
    pub fn set(&mut self, value: T) {
        self.state.set(State::Fresh(value));
    }

    /// Mark the memoized value as stale.
    #[inline]
    pub fn invalidate(&mut self) {
        self.state.set(State::Stale);
    }
}
