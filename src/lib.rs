// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

#![deny(missing_docs)]
#![forbid(unsafe_code)]

//! Simple crate for building and rendering the usage text of a
//! command-line program.
//!
//! This crate does not parse the command-line. It only describes a
//! program's interface and turns that description into word-wrapped
//! help text.
//!
//! ---
//!
//! Table of contents:
//!
//! * [Overview](#overview)
//! * [Quickstart](#quickstart)
//! * [Output format](#output-format)
//! * [Terminology](#terminology)
//! * [Limitations](#limitations)
//!
//! ---
//!
//! # Overview
//!
//! A program is described by a [Usage] value which holds:
//!
//! - The program name.
//! - Program-level options ([Opt]).
//! - _Either_ positional argument placeholders _or_ a set of
//!   entries (subcommands, [Entry]), never both.
//!
//! All constructors and mutators validate their input and return a
//! [Result]. A call that fails leaves its receiver unchanged.
//!
//! # Quickstart
//!
//! ```rust
//! use usage::{Entry, Opt, Result, Usage};
//!
//! fn main() -> Result<()> {
//!     let mut usage = Usage::new("app")?;
//!
//!     usage.add_option(Opt::new(&["-v", "--verbose"], "Show more output.")?)?;
//!
//!     let mut run = Entry::new("run", "Runs the thing.")?;
//!     run.add_arg("target")?;
//!
//!     let mut jobs = Opt::new(&["-j", "--jobs"], "Number of parallel jobs.")?;
//!     jobs.add_arg("n")?;
//!     run.add_option(jobs)?;
//!
//!     usage.add_entry(run)?;
//!
//!     // Top-level help.
//!     println!("{}", usage.global());
//!
//!     // Help for `app run --help`.
//!     if let Some(help) = usage.command_help("run") {
//!         println!("{}", help);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! Try the programs in the `demos/` directory:
//!
//! ```bash
//! $ cargo run --example subcommands
//! $ RUST_LOG=debug cargo run --example positional-args
//! ```
//!
//! # Output format
//!
//! [Usage::global()] generates:
//!
//! ```text
//! Usage:
//!     app <command> [options]. Run 'app <command> --help' to see the
//!     options of a command.
//!
//! Commands:
//!     run <target>
//!         Runs the thing.
//!
//! ```
//!
//! - The summary is wrapped at 68 columns and indented by 4 spaces.
//! - Entries are listed sorted by name, each followed by its description
//!   wrapped at 64 columns and indented by 8 spaces.
//! - For a program without entries, only the `Usage:` block is generated.
//!
//! The widths and indents can be changed with a [Layout] and
//! [Usage::render()].
//!
//! # Terminology
//!
//! - An "option" is a switch with one or more aliases (`-v`, `--verbose`)
//!   which may consume argument placeholders.
//! - An "entry" is a named subcommand with its own description, positional
//!   arguments and options.
//! - A "placeholder" labels an expected value and is shown as `<label>`.
//! - A "paragraph" is a maximal run of text not containing a blank line
//!   or any other line break: one or more consecutive newlines end a
//!   paragraph. Paragraphs are wrapped independently and separated by a
//!   blank line in the output.
//!
//! # Limitations
//!
//! - Entries cannot contain other entries.
//! - A word longer than the wrap width is dropped from the output.
//! - Widths are counted in `char`s, not display columns.
//!
//! # Logging
//!
//! Registrations are reported with [tracing](https://docs.rs/tracing)
//! `debug` events. No subscriber is installed by this crate.

mod entry;
mod error;
mod opt;
mod render;
mod usage;

pub use error::{Error, Result};

pub use entry::Entry;
pub use opt::Opt;
pub use render::{
    chop_multiple_paragraphs, chop_single_paragraph, Layout, DESCRIPTION_WIDTH, SUMMARY_WIDTH,
};
pub use usage::{DuplicatePolicy, Settings, Usage};
