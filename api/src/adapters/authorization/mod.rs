//! Authorization service adapter

pub mod client;

pub use client::HttpAuthorizationClient;
