use tokio::sync::watch;

use super::ViewState;

/// Holds `is_loading` high for one refresh cycle.
///
/// Acquisition is a check-and-set under the watch lock, so at most one guard
/// exists per state channel. Dropping the guard clears the flag on every exit
/// path, including cancellation and unwinding.
pub(super) struct LoadingGuard<'a> {
    state: &'a watch::Sender<ViewState>,
}

impl<'a> LoadingGuard<'a> {
    /// Returns `None` when another cycle already holds the flag.
    pub(super) fn acquire(state: &'a watch::Sender<ViewState>) -> Option<Self> {
        let acquired = state.send_if_modified(|view| {
            if view.is_loading {
                false
            } else {
                view.is_loading = true;
                true
            }
        });
        if acquired {
            Some(Self { state })
        } else {
            None
        }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.state.send_modify(|view| view.is_loading = false);
    }
}
