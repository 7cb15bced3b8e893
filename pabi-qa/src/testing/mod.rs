//! Test doubles for the suite executor boundary.

mod mocks;

pub use mocks::{ScriptedExecutor, ScriptedResponse};
