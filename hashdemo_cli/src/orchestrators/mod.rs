//! Command orchestrators for business logic
//!
//! This module provides orchestrators that coordinate between the CLI layer
//! and the core library services.

pub mod crack_orchestrator;
