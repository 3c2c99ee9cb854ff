//! # Foldertree Architecture
//!
//! Foldertree replays a small folder command language against an in-memory
//! folder tree:
//!
//! ```text
//! CREATE fruits
//! CREATE fruits/apples
//! MOVE fruits/apples vegetables
//! DELETE fruits
//! LIST
//! ```
//!
//! The library is the tree engine. The binary is one client of it that reads
//! commands from a file or stdin and prints the resulting events.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, loads config, sets up tracing          │
//! │  - The ONLY place that writes to stdout/stderr              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Source + Parser (source.rs, parser.rs)                     │
//! │  - Turns input lines into typed `Command`s                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the store, dispatches commands, orders events       │
//! │  - Turns command failures into error events                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - CREATE, LIST, MOVE, DELETE against the store             │
//! │  - Returns `Result<CmdResult>`, never prints                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Depth buckets, (name, depth) lookup, walks, audit        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Errors Never End a Run
//!
//! A missing parent, an unknown source or target, or a malformed line turns
//! into an error event and the next line runs as usual. Only failures outside
//! the engine (an unreadable command file or config) stop the process.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade every client goes through
//! - [`commands`]: One module per command, plus event types
//! - [`store`]: The depth-bucketed tree store
//! - [`model`]: `Node`, `NodeId`, `FolderPath`
//! - [`parser`]: The command grammar
//! - [`source`]: Reading command lines from files, stdin or inline text
//! - [`config`]: `config.json` handling
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod source;
pub mod store;
