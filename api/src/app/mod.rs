//! Application layer
//!
//! Contains use cases and service orchestration.
//! The request gate applies the route policy; the loan service coordinates
//! repositories and the collateral service.

pub mod loan_service;
pub mod request_gate;
pub mod route_policy;

pub use loan_service::LoanManagementService;
pub use request_gate::RequestGate;
pub use route_policy::{Operation, RoutePolicy};
