//! Core library for the simfin-names code generator.
//!
//! The library turns the SimFin columns document into the `names.py` module
//! that maps shortcut constants to data-column names. IO adapters live under
//! [`simfin::codegen::io`], the record types inside [`simfin::codegen::model`],
//! grouping and duplicate detection in [`simfin::codegen::reconcile`], text
//! output in [`simfin::codegen::render`] and [`simfin::codegen::report`], and
//! the end-to-end run under [`simfin::codegen::generate`].

pub mod simfin;

pub use simfin::codegen::{Result, ToolError, error, generate, io, model, reconcile, render, report};
