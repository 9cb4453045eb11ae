//! Tentative local state reconciled with the backend.

/// A value with a last-confirmed snapshot and a current, possibly
/// tentative, version.
///
/// Apply a change locally, issue the call, then either [`confirm`] with
/// what the backend returned or [`revert`] to the snapshot.
///
/// [`confirm`]: Optimistic::confirm
/// [`revert`]: Optimistic::revert
#[derive(Debug, Clone)]
pub struct Optimistic<T: Clone> {
    confirmed: T,
    current: T,
    pending: usize,
}

impl<T: Clone> Optimistic<T> {
    pub fn new(value: T) -> Self {
        Self {
            confirmed: value.clone(),
            current: value,
            pending: 0,
        }
    }

    pub fn current(&self) -> &T {
        &self.current
    }

    pub fn confirmed(&self) -> &T {
        &self.confirmed
    }

    pub fn is_pending(&self) -> bool {
        self.pending > 0
    }

    /// Change the current value ahead of the backend.
    pub fn apply(&mut self, change: impl FnOnce(&mut T)) {
        change(&mut self.current);
        self.pending += 1;
    }

    /// Settle one outstanding change.
    ///
    /// The snapshot is kept so a later [`Optimistic::confirm`] or
    /// [`Optimistic::revert`] still sees it.
    pub fn settle(&mut self) {
        self.pending = self.pending.saturating_sub(1);
    }

    /// Take the backend's value as both snapshot and current value.
    ///
    /// While changes are still in flight the current value is left alone so
    /// their tentative edits stay visible.
    pub fn confirm(&mut self, value: T) {
        if self.pending == 0 {
            self.current = value.clone();
        }
        self.confirmed = value;
    }

    /// Drop every tentative change and go back to the snapshot.
    pub fn revert(&mut self) {
        self.current = self.confirmed.clone();
        self.pending = 0;
    }
}

impl<T: Clone + Default> Default for Optimistic<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
