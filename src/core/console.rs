use crate::core::cache::VoyageCache;
use crate::core::coordinator::{MutationCoordinator, SubmitOutcome};
use crate::core::session::FormSession;
use crate::domain::model::{UnitType, VesselOption, Voyage};
use crate::domain::ports::{DeleteFaultPolicy, Notifier, RemoteService};
use crate::utils::error::Result;

/// The scheduling console: one form session, the cached voyage list, and the
/// mutation coordinator, wired over a remote service.
pub struct VoyageConsole<R, N, F> {
    session: FormSession,
    cache: VoyageCache,
    coordinator: MutationCoordinator<R, N, F>,
}

impl<R: RemoteService, N: Notifier, F: DeleteFaultPolicy> VoyageConsole<R, N, F> {
    pub fn new(remote: R, notifier: N, fault: F) -> Self {
        Self {
            session: FormSession::new(),
            cache: VoyageCache::new(),
            coordinator: MutationCoordinator::new(remote, notifier, fault),
        }
    }

    pub fn open_form(&mut self) {
        self.session.open();
    }

    pub fn close_form(&mut self) {
        self.session.close();
    }

    pub fn session(&self) -> &FormSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut FormSession {
        &mut self.session
    }

    pub fn cache(&self) -> &VoyageCache {
        &self.cache
    }

    /// The voyage list, refetched from the remote service only when the
    /// cache is stale.
    pub async fn voyages(&mut self) -> Result<&[Voyage]> {
        if self.cache.is_stale() {
            tracing::debug!("voyage cache stale, refetching");
            let entries = self.coordinator.fetch_voyages().await?;
            tracing::debug!("fetched {} voyage(s)", entries.len());
            self.cache.store(entries);
        }
        Ok(self.cache.entries())
    }

    pub async fn vessels(&self) -> Result<Vec<VesselOption>> {
        self.coordinator.fetch_vessels().await
    }

    pub async fn unit_types(&self) -> Result<Vec<UnitType>> {
        self.coordinator.fetch_unit_types().await
    }

    pub async fn submit_create(&mut self) -> SubmitOutcome {
        self.coordinator
            .submit_create(&mut self.session, &mut self.cache)
            .await
    }

    pub async fn submit_delete(&mut self, voyage_id: &str) -> SubmitOutcome {
        self.coordinator
            .submit_delete(voyage_id, &mut self.cache)
            .await
    }
}
