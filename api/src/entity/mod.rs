//! SeaORM entities
//!
//! Table mappings used by the PostgreSQL adapters. The schema lives in
//! `migrations/`.

pub mod customer_loans;
pub mod loan_applications;
