//! Common test infrastructure for imagevector tests
//!
//! # Usage
//!
//! In your test file, add:
//! ```ignore
//! mod common;
//! use common::*;
//! ```
//!
//! # Modules
//!
//! - `constants`: Names, repositories, versions and architectures
//! - `builders`: Fluent builder for image vectors
//! - `assertions`: Semantic assertions on resolved images and merged vectors
//! - `fixtures`: Paths of the YAML fixture vectors
//! - `mocks`: Catalog readers standing in for the external file parser

#![allow(dead_code)]
#![allow(unused_imports)]

pub mod assertions;
pub mod builders;
pub mod constants;
pub mod fixtures;
pub mod mocks;

pub use assertions::*;
pub use builders::*;
pub use constants::*;
pub use fixtures::*;
pub use mocks::*;
