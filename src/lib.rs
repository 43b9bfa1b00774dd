//! nugbot - NuGet dependency update advisor library
//!
//! This library provides the core functionality for checking NuGet package
//! updates declared in .csproj project files:
//! - .csproj parsing into declared package references
//! - NuGet registration index access
//! - a pure version resolver that applies the selected update policy

pub mod cli;
pub mod domain;
pub mod error;
pub mod manifest;
pub mod orchestrator;
pub mod output;
pub mod progress;
pub mod registry;
pub mod resolve;
