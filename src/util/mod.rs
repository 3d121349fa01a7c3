//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep route-guard behavior out of individual pages so every
//! protected route redirects the same way.

pub mod auth;
