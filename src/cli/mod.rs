//! # CLI Module
//!
//! Command-line interface for annotating entity classes.
//!
//! ## Commands
//!
//! ### `annotate`
//!
//! Merge `@property` annotations into an entity class file:
//!
//! ```bash
//! entity-annotator annotate --schema schema/articles.yaml --file src/Model/Entity/Article.php
//! ```
//!
//! Options:
//! - `--schema <FILE>` - Table schema description, YAML or JSON (required)
//! - `--file <FILE>` - Entity class source file (required)
//! - `--config <FILE>` - Annotator config; auto-detected next to the schema or in the app root
//! - `--app-root <DIR>` - Application root used for class lookups (default: `.`)
//! - `--dry-run` - Report what would change without writing
//!
//! ### `hints`
//!
//! Print the computed hints without touching any file:
//!
//! ```bash
//! entity-annotator hints --schema schema/articles.yaml --format json
//! ```
//!
//! ## Usage from Code
//!
//! ```rust,ignore
//! use entity_annotator::cli::{execute, Cli};
//! use clap::Parser;
//!
//! execute(Cli::parse())?;
//! ```

mod commands;


pub use commands::{execute, run_cli, Cli, Commands, OutputFormat};
