//! diam-proto-compiler
//!
//! This crate implements:
//!  1) AVP resolution with vendor, application and global fallbacks,
//!  2) The field tree builder turning command rules into message trees,
//!  3) Enum zero-value synthesis and the shared type registry,
//!  4) Deterministic ordering and field numbering,
//!  5) `.proto` rendering (`render_schema` → `String`),
//!  6) Error types (`GenerateError`) and generator configuration.

pub mod error;
pub mod types;
pub mod utils;
pub mod config;
pub mod naming;
pub mod resolver;
pub mod enums;
pub mod registry;
pub mod builder;
pub mod order;
pub mod gen_proto;
pub mod compiler;

pub use compiler::{compile_dictionary, generate};
pub use config::{resolve_interfaces, GeneratorConfig, NumberingPolicy, RenderOptions};
pub use error::GenerateError;
pub use gen_proto::{render_blocks, render_schema};
pub use types::{CompositeField, Schema};
