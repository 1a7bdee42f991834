// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use thiserror::Error;

/// The error type.
///
/// All errors are returned by the validating constructors and mutators.
/// When an error is returned the receiver is left untouched.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum Error {
    //------------------------------
    // Invalid values
    //------------------------------
    /// An argument placeholder must have a label.
    #[error("empty argument string")]
    EmptyArgString,

    /// An option needs at least one alias.
    #[error("no alias provided")]
    NoAliasProvided,

    /// Every alias of an option must be non-empty.
    #[error("empty alias string")]
    EmptyAliasString,

    /// Programs and entries must be named.
    #[error("empty name string")]
    EmptyNameString,

    //------------------------------
    // Missing values
    //------------------------------
    /// `None` was passed where an option was expected.
    #[error("no option provided")]
    NilOptionProvided,

    /// `None` was passed where an entry was expected.
    #[error("no entry provided")]
    NilEntryProvided,

    //------------------------------
    // Conflicts
    //------------------------------
    /// An entry cannot be added once the program takes positional arguments.
    #[error("program already has positional arguments")]
    ExistingArgsConflict,

    /// A positional argument cannot be added once the program has entries.
    #[error("program already has entries")]
    ExistingEntriesConflict,

    /// An entry of the same name is already registered and the
    /// [crate::DuplicatePolicy] is `Reject`.
    #[error("duplicate entry: {0:?}")]
    DuplicateEntry(String),
}

/// Convenience type that allows a function to be defined as returning a
/// [Result], but which only requires the success type to be specified,
/// defaulting the error type to this crates `Error` type.
pub type Result<T, E = Error> = std::result::Result<T, E>;
