//! # sinkfmt-core
//!
//! Byte sinks, reliable writes on top of them, and a typed brace-template
//! formatting engine.
//!
//! A [`Sink`] is anything that accepts bytes and reports how many it took.
//! The [`writer`] functions turn that best-effort contract into
//! all-or-error writes, and [`printf::print`] renders templates such as
//! `"{s} has {ud} items at {X}"` through them.
//!
//! Only the file-descriptor sink uses `unsafe`; everything else is safe Rust.

#![deny(unsafe_code)]

pub mod array_list;
pub mod config;
pub mod error;
pub mod printf;
pub mod sink;
pub mod writer;

pub use array_list::ArrayList;
pub use config::ArgPolicy;
pub use error::{ListError, WriterError};
pub use printf::{Arg, ArgKind, aprint, aprint_with, print, print_with};
pub use sink::{FnSink, IoSink, Sink, SliceSink};
#[cfg(unix)]
pub use sink::FdSink;
