//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared page chrome; pages own the session and gate logic.

pub mod loading_screen;
