use crate::core::cache::VoyageCache;
use crate::core::session::FormSession;
use crate::domain::model::{Notification, UnitType, VesselOption, Voyage};
use crate::domain::ports::{DeleteFaultPolicy, Notifier, RemoteService};
use crate::utils::error::{ConsoleError, Result};

/// Message the delete fault path reports, matching the remote service's own
/// injected-failure response.
pub const DELETE_FAULT_MESSAGE: &str = "Failed to delete the voyage due to a random error.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    RejectedByValidation,
    RemoteFailure,
}

/// Issues create/delete mutations against the remote service, turns their
/// outcomes into notifications, and invalidates the voyage cache on success
/// so dependent views refetch.
pub struct MutationCoordinator<R, N, F> {
    remote: R,
    notifier: N,
    fault: F,
}

impl<R: RemoteService, N: Notifier, F: DeleteFaultPolicy> MutationCoordinator<R, N, F> {
    pub fn new(remote: R, notifier: N, fault: F) -> Self {
        Self {
            remote,
            notifier,
            fault,
        }
    }

    /// Submits the creation form. Validation gates the network call: a
    /// non-empty error map means nothing is sent. On success the cache is
    /// invalidated and the panel closes; on failure the panel closes anyway
    /// (fail closed) and the error notification carries the server message.
    pub async fn submit_create(
        &mut self,
        session: &mut FormSession,
        cache: &mut VoyageCache,
    ) -> SubmitOutcome {
        let Some(body) = session.assemble() else {
            tracing::debug!(
                "create submission rejected by validation: {} error(s)",
                session.errors().len()
            );
            return SubmitOutcome::RejectedByValidation;
        };

        tracing::debug!("submitting voyage creation {} -> {}", body.port_of_loading, body.port_of_discharge);
        match self.remote.create_voyage(&body).await {
            Ok(()) => {
                cache.invalidate();
                session.close();
                self.notifier
                    .notify(Notification::success("Voyage was successfully created"));
                SubmitOutcome::Accepted
            }
            Err(e) => {
                tracing::warn!("voyage creation failed: {e}");
                session.close();
                self.notifier.notify(Notification::error(e.to_string()));
                SubmitOutcome::RemoteFailure
            }
        }
    }

    /// Submits a delete for `voyage_id`. The fault policy is consulted
    /// before dispatch; an injected failure takes the same path as a genuine
    /// one. On success the cache is invalidated; there is no optimistic
    /// removal and no automatic retry.
    pub async fn submit_delete(
        &mut self,
        voyage_id: &str,
        cache: &mut VoyageCache,
    ) -> SubmitOutcome {
        let dispatched = if self.fault.inject_failure() {
            Err(ConsoleError::RemoteError {
                status: 400,
                message: DELETE_FAULT_MESSAGE.to_string(),
            })
        } else {
            self.remote.delete_voyage(voyage_id).await
        };

        match dispatched {
            Ok(()) => {
                tracing::debug!("voyage {voyage_id} deleted, invalidating cache");
                cache.invalidate();
                SubmitOutcome::Accepted
            }
            Err(e) => {
                tracing::warn!("voyage deletion failed: {e}");
                self.notifier.notify(Notification::error(e.to_string()));
                SubmitOutcome::RemoteFailure
            }
        }
    }

    pub async fn fetch_voyages(&self) -> Result<Vec<Voyage>> {
        self.remote.list_voyages().await
    }

    pub async fn fetch_vessels(&self) -> Result<Vec<VesselOption>> {
        self.remote.list_vessels().await
    }

    pub async fn fetch_unit_types(&self) -> Result<Vec<UnitType>> {
        self.remote.list_unit_types().await
    }
}
