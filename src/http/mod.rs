//! HTTP protocol implementation.
//!
//! This module implements a minimal HTTP/1.x request processor for one
//! connection at a time, parsing with a fixed-size scratch buffer.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`processor`**: Orchestrates one request end to end and dispatches it
//! - **`connection`**: Byte-oriented transport seam over any async stream
//! - **`headers`**: Character-at-a-time header state machine and the set of
//!   captured header names
//! - **`buffer`**: The fixed 160-byte scratch buffer
//! - **`fields`**: Ordinal fields of the whitespace-delimited request line
//! - **`url`**: Percent-decoding and filename derivation
//! - **`mime`**: MIME type resolution from a packed extension table
//! - **`routes`**: Ordered route table with first-match-wins dispatch
//! - **`request`**: Request methods and the per-request context
//! - **`response`** / **`writer`**: Status codes and the wire-level
//!   response protocol
//! - **`body`**: Streaming body consumption for upload handlers
//!
//! # Request Pipeline
//!
//! Each accepted connection flows through one pass of the pipeline:
//!
//! ```text
//!        ┌──────────────────┐
//!        │  Request line    │ ← bounded read into the scratch buffer
//!        └──────┬───────────┘
//!               │ method + raw path extracted
//!               ▼
//!        ┌──────────────────┐
//!        │  Header machine  │ ← one byte at a time, captures filtered
//!        └──────┬───────────┘   header values into the request context
//!               │ blank line reached
//!               ▼
//!        ┌──────────────────┐
//!        │  Route dispatch  │ ← first matching (pattern, method) entry
//!        └──────┬───────────┘
//!               │ handler answers (and may drain a body)
//!               ▼
//!        ┌──────────────────┐
//!        │  Close / release │ ← per-request state dropped on every path
//!        └──────────────────┘
//! ```
//!
//! Parse failures short-circuit the pipeline: an over-long request line
//! answers 414, a malformed header block answers 417, an unmatched route
//! answers 404, and in each case the connection is closed.

pub mod body;
pub mod buffer;
pub mod connection;
pub mod fields;
pub mod headers;
pub mod mime;
pub mod processor;
pub mod request;
pub mod response;
pub mod routes;
pub mod url;
pub mod writer;
