//! ischema-core - Marked interface extraction and JSON Schema compilation
//!
//! Turns interface declarations fenced by `/* SCHEMA */` ... `/* END SCHEMA */`
//! into JSON Schema (draft-07) documents.
//!
//! # Architecture
//!
//! ```text
//! ischema-core/src/
//! ├── lib.rs       # Re-exports (this file)
//! ├── error.rs     # SchemaError
//! ├── config.rs    # GrammarConfig, IndexEncoding
//! ├── model.rs     # Fields, Interface, PropValue, IndexEntry
//! ├── extract.rs   # Block extraction between markers
//! ├── tokenize.rs  # Declaration tokenizer
//! ├── parser.rs    # Structural parser (state machine + frame stack)
//! ├── schema.rs    # Schema, PropertySchema
//! └── compile.rs   # SchemaCompiler
//! ```
//!
//! # Pipeline
//!
//! ```text
//! text ─► extract_blocks ─► tokenize ─► InterfaceParser ─► SchemaCompiler ─► Schema
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use ischema_core::{GrammarConfig, SchemaCompiler, parse_source};
//!
//! let grammar = GrammarConfig::default();
//! for interface in parse_source(&text, &grammar) {
//!     let schema = SchemaCompiler::default().compile(&interface)?;
//!     println!("{}", schema.title);
//! }
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

mod compile;
mod config;
mod error;
mod extract;
mod model;
mod parser;
mod schema;
mod tokenize;

// ============================================================================
// Public Re-exports
// ============================================================================

pub use compile::{SchemaCompiler, compile, encode_index_signatures};
pub use config::{
    DEFAULT_END_MARKER, DEFAULT_INDEX_OPENER, DEFAULT_START_MARKER, GrammarConfig, IndexEncoding,
};
pub use error::SchemaError;
pub use extract::{Block, extract_blocks};
pub use model::{Fields, IndexEntry, Interface, PropValue};
pub use parser::{InterfaceParser, parse_block, parse_declaration, parse_source};
pub use schema::{DRAFT_07, PropertySchema, Schema};
pub use tokenize::{Declaration, tokenize};
