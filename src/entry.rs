// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::fmt;

use tracing::debug;

use crate::error::{Error, Result};
use crate::opt::{placeholders, Opt};

/// A named subcommand ("entry") of a program.
///
/// An entry has its own description, positional argument placeholders
/// and options. Registering an entry with a [crate::Usage] stores a copy,
/// so changes made to the entry afterwards are not seen by the usage.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub struct Entry {
    name: String,
    description: String,
    args: Vec<String>,
    options: Vec<Opt>,
}

impl Entry {
    /// Create a new entry.
    ///
    /// Fails with [Error::EmptyNameString] if `name` is empty.
    pub fn new(name: &str, description: &str) -> Result<Self> {
        if name.is_empty() {
            return Err(Error::EmptyNameString);
        }

        Ok(Entry {
            name: name.into(),
            description: description.into(),
            args: Vec::new(),
            options: Vec::new(),
        })
    }

    /// Append a positional argument placeholder.
    pub fn add_arg(&mut self, placeholder: &str) -> Result<()> {
        if placeholder.is_empty() {
            return Err(Error::EmptyArgString);
        }

        self.args.push(placeholder.into());

        debug!(entry = %self.name, arg = placeholder, "added entry argument");

        Ok(())
    }

    /// Append an option.
    ///
    /// Accepts either an [Opt] or an `Option<Opt>`; `None` fails with
    /// [Error::NilOptionProvided].
    pub fn add_option<O: Into<Option<Opt>>>(&mut self, option: O) -> Result<()> {
        let option = option.into().ok_or(Error::NilOptionProvided)?;

        debug!(entry = %self.name, option = %option, "added entry option");

        self.options.push(option);

        Ok(())
    }

    /// The entry name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Free text describing the entry (may be empty).
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The positional argument placeholders in declaration order.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// The options in declaration order.
    pub fn options(&self) -> &[Opt] {
        &self.options
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.name, placeholders(&self.args))
    }
}
