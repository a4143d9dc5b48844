//! Angel One SmartAPI HTTP surface.
//!
//! Only the session-generation endpoint is modeled. Order placement, market
//! data and token refresh are out of scope for this tool.

pub mod auth;
pub mod client;
pub mod constants;
pub mod models;

pub use client::SmartApiClient;
pub use models::{LoginRequest, LoginResponse, SessionTokens};
