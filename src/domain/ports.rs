use crate::domain::model::{CreateVoyageBody, Notification, UnitType, VesselOption, Voyage};
use crate::utils::error::Result;
use async_trait::async_trait;

/// The remote data service at its wire boundary (§6 of the contract).
/// Implementations map non-2xx responses to `ConsoleError::RemoteError`.
#[async_trait]
pub trait RemoteService: Send + Sync {
    async fn create_voyage(&self, body: &CreateVoyageBody) -> Result<()>;
    async fn delete_voyage(&self, voyage_id: &str) -> Result<()>;
    async fn list_voyages(&self) -> Result<Vec<Voyage>>;
    async fn list_vessels(&self) -> Result<Vec<VesselOption>>;
    async fn list_unit_types(&self) -> Result<Vec<UnitType>>;
}

/// Sink for user-facing notifications (toasts).
pub trait Notifier: Send {
    fn notify(&mut self, notification: Notification);
}

/// Fault-injection seam for the delete path. Consulted once per delete,
/// before the real request is dispatched; an injected failure must be
/// indistinguishable from a genuine one downstream.
pub trait DeleteFaultPolicy: Send {
    fn inject_failure(&mut self) -> bool;
}

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn request_timeout_secs(&self) -> u64;
    fn delete_failure_rate(&self) -> f64;
}
