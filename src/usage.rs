// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::collections::btree_map::{self, BTreeMap};
use std::mem;

use tracing::debug;

use crate::entry::Entry;
use crate::error::{Error, Result};
use crate::opt::Opt;

/// What [Usage::add_entry] does when an entry with the same name is
/// already registered.
#[derive(Debug, PartialEq, PartialOrd, Eq, Ord, Clone, Copy)]
pub enum DuplicatePolicy {
    /// Replace the existing entry (last write wins).
    Overwrite,
    /// Fail with [Error::DuplicateEntry].
    Reject,
}

impl Default for DuplicatePolicy {
    fn default() -> Self {
        DuplicatePolicy::Overwrite
    }
}

/// Settings used to control how a [Usage] accepts registrations.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialOrd, Default, PartialEq)]
pub struct Settings {
    duplicate_entries: DuplicatePolicy,
}

impl Settings {
    /// Create a new settings object.
    pub fn new() -> Self {
        Settings::default()
    }

    /// Specify that registering a second entry with an existing name is an
    /// error (by default the new entry silently replaces the old one).
    pub fn reject_duplicate_entries(self) -> Self {
        Settings {
            duplicate_entries: DuplicatePolicy::Reject,
        }
    }

    /// The policy applied to duplicate entry names.
    pub fn duplicate_entries(&self) -> DuplicatePolicy {
        self.duplicate_entries
    }
}

/// Positional operands of the program itself: either argument
/// placeholders or entries, never both.
#[derive(Clone, Debug, Eq, PartialEq)]
enum Operands {
    Nothing,
    Args(Vec<String>),
    Entries(BTreeMap<String, Entry>),
}

impl Default for Operands {
    fn default() -> Self {
        Operands::Nothing
    }
}

/// The root of a usage tree: the program, its options and either its
/// positional arguments or its entries (subcommands).
///
/// A `Usage` is built once by a single owner and then rendered; see
/// [Usage::global()] and [Usage::help()].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Usage {
    name: String,
    settings: Settings,
    options: Vec<Opt>,
    operands: Operands,
}

impl Usage {
    /// Create a new usage for the program called `name`.
    ///
    /// Fails with [Error::EmptyNameString] if `name` is empty.
    pub fn new(name: &str) -> Result<Self> {
        if name.is_empty() {
            return Err(Error::EmptyNameString);
        }

        Ok(Usage {
            name: name.into(),
            settings: Settings::default(),
            options: Vec::new(),
            operands: Operands::default(),
        })
    }

    /// Create a new usage with the specified settings.
    pub fn with_settings(name: &str, settings: Settings) -> Result<Self> {
        Usage::new(name).map(|u| u.settings(settings))
    }

    /// Specify any settings for the usage.
    pub fn settings(self, settings: Settings) -> Self {
        Usage { settings, ..self }
    }

    /// Returns the current settings.
    pub fn settings_ref(&self) -> &Settings {
        &self.settings
    }

    /// The program name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a positional argument placeholder for the program itself.
    ///
    /// # Errors
    ///
    /// - [Error::EmptyArgString] if `placeholder` is empty.
    /// - [Error::ExistingEntriesConflict] if any entries are registered.
    pub fn add_arg(&mut self, placeholder: &str) -> Result<()> {
        if placeholder.is_empty() {
            return Err(Error::EmptyArgString);
        }

        match self.operands {
            Operands::Entries(_) => return Err(Error::ExistingEntriesConflict),
            Operands::Args(ref mut args) => args.push(placeholder.into()),
            Operands::Nothing => self.operands = Operands::Args(vec![placeholder.into()]),
        }

        debug!(usage = %self.name, arg = placeholder, "added argument");

        Ok(())
    }

    /// Append a program-level option.
    ///
    /// Accepts either an [Opt] or an `Option<Opt>`; `None` fails with
    /// [Error::NilOptionProvided].
    pub fn add_option<O: Into<Option<Opt>>>(&mut self, option: O) -> Result<()> {
        let option = option.into().ok_or(Error::NilOptionProvided)?;

        debug!(usage = %self.name, option = %option, "added option");

        self.options.push(option);

        Ok(())
    }

    /// Register a copy of an entry, keyed by its name.
    ///
    /// Accepts either an [Entry] or an `Option<Entry>`.
    ///
    /// # Errors
    ///
    /// - [Error::NilEntryProvided] if `None` is passed.
    /// - [Error::ExistingArgsConflict] if the program takes positional
    ///   arguments.
    /// - [Error::DuplicateEntry] if the name is already registered and the
    ///   settings reject duplicates. Otherwise the old entry is replaced.
    pub fn add_entry<E: Into<Option<Entry>>>(&mut self, entry: E) -> Result<()> {
        let entry = entry.into().ok_or(Error::NilEntryProvided)?;

        let mut entries = match mem::take(&mut self.operands) {
            Operands::Args(args) => {
                self.operands = Operands::Args(args);
                return Err(Error::ExistingArgsConflict);
            }
            Operands::Entries(entries) => entries,
            Operands::Nothing => BTreeMap::new(),
        };

        let result = match entries.entry(entry.name().to_string()) {
            btree_map::Entry::Vacant(slot) => {
                debug!(usage = %self.name, entry = %entry.name(), "added entry");
                slot.insert(entry);
                Ok(())
            }
            btree_map::Entry::Occupied(mut slot) => {
                if self.settings.duplicate_entries == DuplicatePolicy::Reject {
                    Err(Error::DuplicateEntry(entry.name().into()))
                } else {
                    debug!(usage = %self.name, entry = %entry.name(), "replaced entry");
                    slot.insert(entry);
                    Ok(())
                }
            }
        };

        // A rejected duplicate implies the map was already non-empty, so
        // restoring it leaves the usage unchanged.
        self.operands = Operands::Entries(entries);

        result
    }

    /// Returns a snapshot of all entries, sorted by name.
    pub fn entries(&self) -> Vec<Entry> {
        self.entries_iter().cloned().collect()
    }

    /// Iterate over the entries in name order without copying them.
    pub(crate) fn entries_iter(&self) -> impl Iterator<Item = &Entry> {
        let entries = match &self.operands {
            Operands::Entries(entries) => Some(entries.values()),
            _ => None,
        };

        entries.into_iter().flatten()
    }

    /// Returns the entry called `name`, if registered.
    pub fn entry(&self, name: &str) -> Option<&Entry> {
        match &self.operands {
            Operands::Entries(entries) => entries.get(name),
            _ => None,
        }
    }

    /// Determine if the program has any entries.
    pub fn has_entries(&self) -> bool {
        matches!(&self.operands, Operands::Entries(entries) if !entries.is_empty())
    }

    /// The program's positional argument placeholders in declaration order.
    pub fn args(&self) -> &[String] {
        match &self.operands {
            Operands::Args(args) => args,
            _ => &[],
        }
    }

    /// The program-level options in declaration order.
    pub fn options(&self) -> &[Opt] {
        &self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str) -> Entry {
        Entry::new(name, "").unwrap()
    }

    #[test]
    fn test_settings() {
        let new_settings = Settings::new();
        let def_settings = Settings::default();

        assert_eq!(new_settings.duplicate_entries(), DuplicatePolicy::Overwrite);
        assert_eq!(new_settings, def_settings);

        let settings = Settings::new().reject_duplicate_entries();
        assert_eq!(settings.duplicate_entries(), DuplicatePolicy::Reject);
    }

    #[test]
    fn test_new_usage() {
        assert_eq!(Usage::new(""), Err(Error::EmptyNameString));
        assert_eq!(
            Usage::with_settings("", Settings::new()),
            Err(Error::EmptyNameString)
        );

        let usage = Usage::new("app").unwrap();

        let expected = Usage {
            name: "app".into(),
            settings: Settings::default(),
            options: vec![],
            operands: Operands::Nothing,
        };

        assert_eq!(usage, expected);
        assert_eq!(usage.name(), "app");
        assert!(usage.args().is_empty());
        assert!(usage.options().is_empty());
        assert!(usage.entries().is_empty());
        assert!(!usage.has_entries());

        let usage =
            Usage::with_settings("app", Settings::new().reject_duplicate_entries()).unwrap();
        assert_eq!(
            usage.settings_ref().duplicate_entries(),
            DuplicatePolicy::Reject
        );
    }

    #[test]
    fn test_usage_add_arg() {
        let mut usage = Usage::new("cat").unwrap();

        assert_eq!(usage.add_arg(""), Err(Error::EmptyArgString));
        assert_eq!(usage.operands, Operands::Nothing);

        assert_eq!(usage.add_arg("file"), Ok(()));
        assert_eq!(usage.add_arg("more"), Ok(()));
        assert_eq!(usage.args(), &["file", "more"]);
    }

    #[test]
    fn test_usage_add_option() {
        let mut usage = Usage::new("app").unwrap();
        let opt = Opt::new(&["-v"], "verbose").unwrap();

        assert_eq!(usage.add_option(None::<Opt>), Err(Error::NilOptionProvided));
        assert_eq!(usage.add_option(opt.clone()), Ok(()));

        // Options can be mixed with either kind of operand.
        assert_eq!(usage.add_entry(entry("run")), Ok(()));
        assert_eq!(usage.add_option(Some(opt.clone())), Ok(()));

        assert_eq!(usage.options(), &[opt.clone(), opt]);
    }

    #[test]
    fn test_usage_add_entry() {
        let mut usage = Usage::new("app").unwrap();

        assert_eq!(usage.add_entry(None::<Entry>), Err(Error::NilEntryProvided));
        assert_eq!(usage.operands, Operands::Nothing);

        assert_eq!(usage.add_entry(entry("run")), Ok(()));
        assert!(usage.has_entries());
        assert_eq!(usage.entry("run"), Some(&entry("run")));
        assert_eq!(usage.entry("walk"), None);
    }

    #[test]
    fn test_args_and_entries_are_exclusive() {
        let mut usage = Usage::new("app").unwrap();
        usage.add_entry(entry("run")).unwrap();

        let before = usage.clone();
        assert_eq!(usage.add_arg("x"), Err(Error::ExistingEntriesConflict));
        assert_eq!(usage, before);

        let mut usage = Usage::new("app").unwrap();
        usage.add_arg("x").unwrap();

        let before = usage.clone();
        assert_eq!(usage.add_entry(entry("run")), Err(Error::ExistingArgsConflict));
        assert_eq!(usage, before);

        // Validation of the value comes first.
        assert_eq!(usage.add_entry(None::<Entry>), Err(Error::NilEntryProvided));
    }

    #[test]
    fn test_entries_sorted() {
        let mut usage = Usage::new("app").unwrap();

        for name in &["zeta", "alpha", "mid", "Zulu", "alpha2"] {
            usage.add_entry(entry(name)).unwrap();
        }

        let names: Vec<String> = usage
            .entries()
            .iter()
            .map(|e| e.name().to_string())
            .collect();

        assert_eq!(names, vec!["Zulu", "alpha", "alpha2", "mid", "zeta"]);
    }

    #[test]
    fn test_duplicate_entries() {
        #[derive(Debug)]
        struct TestData {
            settings: Settings,
            result: Result<()>,
            description: &'static str,
        }

        let tests = &[
            TestData {
                settings: Settings::new(),
                result: Ok(()),
                description: "second",
            },
            TestData {
                settings: Settings::new().reject_duplicate_entries(),
                result: Err(Error::DuplicateEntry("run".into())),
                description: "first",
            },
        ];

        for (i, d) in tests.iter().enumerate() {
            let mut usage = Usage::with_settings("app", d.settings).unwrap();

            usage.add_entry(Entry::new("run", "first").unwrap()).unwrap();

            let result = usage.add_entry(Entry::new("run", "second").unwrap());

            let msg = format!("test[{}]: {:?}, result: {:?}", i, d, result);

            assert_eq!(result, d.result, "{}", msg);
            assert_eq!(usage.entries().len(), 1, "{}", msg);
            assert_eq!(
                usage.entry("run").unwrap().description(),
                d.description,
                "{}",
                msg
            );
        }
    }

    #[test]
    fn test_failed_add_entry_leaves_usage_unchanged() {
        let settings = Settings::new().reject_duplicate_entries();

        let mut usage = Usage::with_settings("app", settings).unwrap();
        usage.add_entry(Entry::new("run", "first").unwrap()).unwrap();
        usage.add_entry(entry("stop")).unwrap();

        let before = usage.clone();

        assert_eq!(
            usage.add_entry(Entry::new("run", "second").unwrap()),
            Err(Error::DuplicateEntry("run".into()))
        );
        assert_eq!(usage, before);

        let mut usage = Usage::with_settings("app", settings).unwrap();
        usage.add_arg("file").unwrap();

        let before = usage.clone();

        assert_eq!(usage.add_entry(entry("run")), Err(Error::ExistingArgsConflict));
        assert_eq!(usage, before);
        assert_eq!(usage.args(), &["file"]);

        // The first entry moves the usage from no operands to entries.
        let mut usage = Usage::new("app").unwrap();
        assert_eq!(usage.add_entry(entry("run")), Ok(()));
        assert_eq!(usage.add_arg("file"), Err(Error::ExistingEntriesConflict));
        assert_eq!(usage.entries(), vec![entry("run")]);
    }

    #[test]
    fn test_entry_is_copied() {
        let mut usage = Usage::new("app").unwrap();
        let mut run = entry("run");

        usage.add_entry(run.clone()).unwrap();
        run.add_arg("target").unwrap();

        assert!(usage.entry("run").unwrap().args().is_empty());

        let mut snapshot = usage.entries();
        snapshot[0].add_arg("other").unwrap();

        assert!(usage.entry("run").unwrap().args().is_empty());
    }

    #[test]
    fn test_usage_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}

        assert_send_sync::<Usage>();
        assert_send_sync::<Entry>();
        assert_send_sync::<Opt>();
    }
}
