//! Collateral service adapter

pub mod client;

pub use client::HttpCollateralClient;
