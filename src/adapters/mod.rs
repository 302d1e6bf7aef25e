// Adapters layer: concrete implementations for external systems (http,
// notifications, fault injection).

pub mod fault;
pub mod http;
pub mod notify;
