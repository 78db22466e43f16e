//! Data models for Hover API resources.
//!
//! - `ActionRequest` / `ActionDetails`: request bodies for creating and
//!   updating actions
//! - `Action`, `ActionListResponse`, `ActionResponse`: response shapes

pub mod action;

pub use action::{Action, ActionDetails, ActionListResponse, ActionRequest, ActionResponse};
