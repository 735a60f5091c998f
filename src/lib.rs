//! # service-map
//!
//! Renders the local import relationships between TypeScript services as a
//! Graphviz dependency map.
//!
//! The pipeline is a single pass: list the `.ts` files of one directory
//! (test files excluded), name each service after its file stem, collect the
//! `./` imports of every file with a regular expression, and emit a `digraph`
//! whose node ids are short MD5 hashes of the service names.
//!
//! Imports that do not name a known service are dropped. Matching is textual,
//! so re-exports, dynamic imports and aliased paths are not followed.
//!
//! ## Output Formats
//!
//! - **DOT**: Graphviz description with layout directives (default)
//! - **JSON-Compact**: node and edge lists for programmatic consumption

pub mod core;
pub mod formatters;
pub mod logging;
pub mod parsers;
