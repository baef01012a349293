//! Settings screen controller.
//!
//! Owns the screen's [`ViewState`] and keeps it in sync with the companion
//! API. A refresh cycle fetches the beta feature flag, the subscription and
//! the extended device info one after another, merging each result into the
//! state as soon as it arrives so a shell can render partial data early.
//!
//! Failures never clear previously loaded records: the screen keeps showing
//! the last good values. The cycle is tied to the controller's lifetime and
//! stops at its next suspension point once the controller is dismissed or
//! dropped.

mod cancel;
mod loading;
mod state;


use std::future::Future;
use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::api::{ApiResult, CompanionApi};
use crate::error::{Error, Result};
use crate::models::VISION_ACCESS_FLAG;

use cancel::CancelToken;
use loading::LoadingGuard;

pub use state::ViewState;

/// How a refresh cycle ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Subscription and device info were both loaded
    Completed,
    /// Subscription fetch failed; device info was not requested
    SubscriptionFailed,
    /// Subscription loaded but device info failed
    DeviceInfoFailed,
    /// Controller was dismissed before the cycle finished
    Cancelled,
    /// Another cycle of this controller was still in flight
    AlreadyRunning,
}

impl RefreshOutcome {
    pub const fn is_complete(self) -> bool {
        matches!(self, Self::Completed)
    }
}

struct Inner<A> {
    api: A,
    state: watch::Sender<ViewState>,
    cancel: CancelToken,
}

/// Populates and refreshes the settings [`ViewState`] from a [`CompanionApi`].
pub struct SettingsController<A> {
    inner: Arc<Inner<A>>,
}

impl<A: CompanionApi + 'static> SettingsController<A> {
    pub fn new(api: A) -> Self {
        let (state, _) = watch::channel(ViewState::default());
        Self {
            inner: Arc::new(Inner {
                api,
                state,
                cancel: CancelToken::new(),
            }),
        }
    }

    /// Snapshot of the current state
    pub fn state(&self) -> ViewState {
        self.inner.state.borrow().clone()
    }

    /// Receiver notified after every incremental merge
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.inner.state.subscribe()
    }

    /// Run one refresh cycle to completion on the current task.
    pub async fn refresh(&self) -> RefreshOutcome {
        self.inner.refresh().await
    }

    /// Start the initial load in the background, as the screen appears.
    pub fn activate(&self) -> JoinHandle<RefreshOutcome> {
        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move { inner.refresh().await })
    }

    /// Cancel any in-flight refresh and ignore late completions.
    pub fn dismiss(&self) {
        if !self.inner.cancel.is_cancelled() {
            tracing::debug!("Settings controller dismissed");
        }
        self.inner.cancel.cancel();
    }

    pub fn is_dismissed(&self) -> bool {
        self.inner.cancel.is_cancelled()
    }

    /// Handle the user flipping the "Vision (Beta)" toggle.
    ///
    /// The toggle is disabled while loading, so the change is rejected with
    /// [`Error::Busy`] until the current cycle ends.
    pub fn set_feature_beta_enabled(&self, enabled: bool) -> Result<()> {
        let mut busy = false;
        let changed = self.inner.state.send_if_modified(|view| {
            if view.is_loading {
                busy = true;
                false
            } else if view.is_feature_beta_enabled == enabled {
                false
            } else {
                view.is_feature_beta_enabled = enabled;
                true
            }
        });

        if busy {
            return Err(Error::Busy);
        }
        if changed {
            tracing::info!("Vision beta toggled {}", if enabled { "on" } else { "off" });
        }
        Ok(())
    }
}

impl<A> Drop for SettingsController<A> {
    fn drop(&mut self) {
        self.inner.cancel.cancel();
    }
}

impl<A: CompanionApi> Inner<A> {
    async fn refresh(&self) -> RefreshOutcome {
        if self.cancel.is_cancelled() {
            return RefreshOutcome::Cancelled;
        }
        let Some(_loading) = LoadingGuard::acquire(&self.state) else {
            tracing::debug!("Refresh skipped: a cycle is already in flight");
            return RefreshOutcome::AlreadyRunning;
        };
        tracing::debug!("Settings refresh started");

        let Some(flag) = self.until_cancelled(self.api.feature_flag(VISION_ACCESS_FLAG)).await
        else {
            return RefreshOutcome::Cancelled;
        };
        match flag {
            Ok(flag) => self
                .state
                .send_modify(|view| view.is_feature_beta_enabled = flag.enabled),
            Err(error) => {
                tracing::warn!("Failed to fetch feature flag {VISION_ACCESS_FLAG}: {error}");
            }
        }

        let Some(subscription) = self.until_cancelled(self.api.subscription()).await else {
            return RefreshOutcome::Cancelled;
        };
        match subscription {
            Ok(subscription) => self
                .state
                .send_modify(|view| view.subscription = Some(subscription)),
            Err(error) => {
                tracing::error!("Failed to load subscription: {error}");
                return RefreshOutcome::SubscriptionFailed;
            }
        }

        let Some(device_info) = self
            .until_cancelled(self.api.retrieve_detailed_device_info())
            .await
        else {
            return RefreshOutcome::Cancelled;
        };
        match device_info {
            Ok(info) => self
                .state
                .send_modify(|view| view.extended_device_info = Some(info)),
            Err(error) => {
                tracing::error!("Failed to load device info: {error}");
                return RefreshOutcome::DeviceInfoFailed;
            }
        }

        tracing::debug!("Settings refresh completed");
        RefreshOutcome::Completed
    }

    /// Race `request` against dismissal; `None` means the result must be dropped.
    async fn until_cancelled<T>(
        &self,
        request: impl Future<Output = ApiResult<T>>,
    ) -> Option<ApiResult<T>> {
        let result = tokio::select! {
            biased;
            () = self.cancel.cancelled() => None,
            result = request => Some(result),
        };
        // A completion racing with `dismiss` on another thread is discarded too.
        result.filter(|_| !self.cancel.is_cancelled())
    }
}
