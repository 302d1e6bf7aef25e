pub mod cache;
pub mod console;
pub mod coordinator;
pub mod datetime;
pub mod selection;
pub mod session;
pub mod validation;

pub use crate::domain::model::{CreateVoyageBody, Notification, UnitType, VesselOption, Voyage};
pub use crate::domain::ports::{ConfigProvider, DeleteFaultPolicy, Notifier, RemoteService};
pub use crate::utils::error::Result;
