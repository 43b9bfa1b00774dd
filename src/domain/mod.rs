//! Core domain models for nugbot
//!
//! This module contains the fundamental types used throughout the application:
//! - Package references declared in a project file
//! - The update policy selecting how much of a version may change
//! - Update decisions emitted for the final report

mod package;
mod policy;
mod update;

pub use package::PackageReference;
pub use policy::UpdatePolicy;
pub use update::PackageUpdate;
