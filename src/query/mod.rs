//! Record query engine: search, filter and sort over in-memory record
//! collections.
//!
//! `run_query` is pure. It reads the supplied slice, never mutates it, and
//! returns an owned `Vec` of clones ordered by the query's sort key. The
//! sort is stable, so records that tie on the key keep their input order.
//! Invalid sort keys or filters are rejected when raw string parameters
//! are parsed into a typed `Query`, before any record is touched.

mod engine;
mod types;

#[cfg(test)]
mod properties;

pub use engine::*;
pub use types::*;
