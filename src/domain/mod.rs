//! Domain Layer
//!
//! The template resolution core: no direct I/O.
//!
//! ## Structure
//!
//! - `entities/` - Theme manifests, template roots, the path catalog
//! - `value_objects/` - Logical template paths, runtime environment
//! - `services/` - Theme chain, catalog merge, import expansion
//! - `ports/` - Interface definitions for infrastructure

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
