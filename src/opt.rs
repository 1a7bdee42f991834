// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::fmt;

use tracing::debug;

use crate::error::{Error, Result};

/// Separator used between aliases when an option is displayed.
const ALIAS_SEPARATOR: &str = ", ";

/// Render a list of argument placeholders, each as `" <label>"`.
pub(crate) fn placeholders(args: &[String]) -> String {
    args.iter().map(|a| format!(" <{}>", a)).collect()
}

/// A named switch, for example `-o`/`--output`.
///
/// An option has one or more aliases (the names it can be invoked by), an
/// optional description and an ordered list of argument placeholders it
/// consumes.
///
/// Aliases are stored and rendered verbatim, so include any dashes:
///
/// ```rust
/// # use usage::{Opt, Result};
/// # fn main() -> Result<()> {
/// let mut opt = Opt::new(&["-o", "--output"], "Write the result to a file.")?;
/// opt.add_arg("file")?;
///
/// assert_eq!(opt.to_string(), "-o, --output <file>");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub struct Opt {
    aliases: Vec<String>,
    description: String,
    args: Vec<String>,
}

impl Opt {
    /// Create a new option.
    ///
    /// # Errors
    ///
    /// - [Error::NoAliasProvided] if `aliases` is empty.
    /// - [Error::EmptyAliasString] if any alias is `""`.
    pub fn new<I>(aliases: I, description: &str) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let aliases: Vec<String> = aliases
            .into_iter()
            .map(|a| a.as_ref().to_string())
            .collect();

        if aliases.is_empty() {
            return Err(Error::NoAliasProvided);
        }

        if aliases.iter().any(|a| a.is_empty()) {
            return Err(Error::EmptyAliasString);
        }

        Ok(Opt {
            aliases,
            description: description.into(),
            args: Vec::new(),
        })
    }

    /// Append an argument placeholder that the option consumes.
    pub fn add_arg(&mut self, placeholder: &str) -> Result<()> {
        if placeholder.is_empty() {
            return Err(Error::EmptyArgString);
        }

        self.args.push(placeholder.into());

        debug!(option = %self, arg = placeholder, "added option argument");

        Ok(())
    }

    /// The argument placeholders, in the order they were added.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// The aliases, in the order they were specified.
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Free text describing the option (may be empty).
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Display for Opt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}{}",
            self.aliases.join(ALIAS_SEPARATOR),
            placeholders(&self.args)
        )
    }
}
