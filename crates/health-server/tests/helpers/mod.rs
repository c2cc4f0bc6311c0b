//! Test helpers for health-server.

#![allow(dead_code, unused_imports)]

pub mod assertions;
pub mod client;

pub use assertions::*;
pub use client::{TestClient, TestResponse, client};
