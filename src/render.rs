// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::fmt;

use tracing::trace;

use crate::opt::{placeholders, Opt};
use crate::usage::Usage;

const USAGE_HEADER: &str = "Usage:";
const COMMANDS_HEADER: &str = "Commands:";
const OPTIONS_HEADER: &str = "Options:";

const COMMAND_PLACEHOLDER: &str = " <command>";
const OPTIONS_PLACEHOLDER: &str = " [options]";
const ARGS_PLACEHOLDER: &str = " <args>";

/// Column width of the summary block.
pub const SUMMARY_WIDTH: usize = 68;

/// Column width of entry and option descriptions.
pub const DESCRIPTION_WIDTH: usize = 64;

const INDENT: usize = 4;
const DESCRIPTION_INDENT: usize = 8;

/// Widths and indents used when rendering help text.
///
/// The default layout wraps the summary at [SUMMARY_WIDTH] columns with a
/// 4 space indent and descriptions at [DESCRIPTION_WIDTH] columns with an
/// 8 space indent.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialOrd, PartialEq)]
pub struct Layout {
    summary_width: usize,
    description_width: usize,
    indent: usize,
    description_indent: usize,
}

impl Default for Layout {
    fn default() -> Self {
        Layout {
            summary_width: SUMMARY_WIDTH,
            description_width: DESCRIPTION_WIDTH,
            indent: INDENT,
            description_indent: DESCRIPTION_INDENT,
        }
    }
}

impl Layout {
    /// Create a new default layout.
    pub fn new() -> Self {
        Layout::default()
    }

    /// Specify the column width of the summary block.
    pub fn summary_width(self, summary_width: usize) -> Self {
        Layout {
            summary_width,
            ..self
        }
    }

    /// Specify the column width of descriptions.
    pub fn description_width(self, description_width: usize) -> Self {
        Layout {
            description_width,
            ..self
        }
    }

    /// Specify the number of spaces before summary, entry and option lines.
    pub fn indent(self, indent: usize) -> Self {
        Layout { indent, ..self }
    }

    /// Specify the number of spaces before description lines.
    pub fn description_indent(self, description_indent: usize) -> Self {
        Layout {
            description_indent,
            ..self
        }
    }
}

/// Word-wrap a single paragraph so that no line is longer than `width`
/// characters.
///
/// Words are separated by any run of whitespace. A word that is longer than
/// `width` on its own is dropped. The result always contains at least one
/// (possibly empty) line.
///
/// ```rust
/// use usage::chop_single_paragraph;
///
/// assert_eq!(chop_single_paragraph("foo bar baz", 7), vec!["foo bar", "baz"]);
/// ```
pub fn chop_single_paragraph(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::<String>::new();

    // Words are added with a trailing space, so its length is that of the
    // line plus the separator the next word would need.
    let mut line = String::new();
    let mut line_len = 0;

    for word in text.trim().split_whitespace() {
        let word_len = word.chars().count();

        if word_len > width {
            trace!(word, width, "dropping word wider than line");
            continue;
        }

        if line_len + word_len > width {
            lines.push(line.trim_end().to_string());
            line.clear();
            line_len = 0;
        }

        line.push_str(word);
        line.push(' ');
        line_len += word_len + 1;
    }

    lines.push(line.trim_end().to_string());

    lines
}

/// Word-wrap text containing multiple paragraphs.
///
/// Paragraphs are separated by one or more newlines and are wrapped
/// independently using [chop_single_paragraph]. An empty line is placed
/// between consecutive paragraphs. A paragraph of only whitespace wraps to
/// a single empty line.
///
/// ```rust
/// use usage::chop_multiple_paragraphs;
///
/// assert_eq!(
///     chop_multiple_paragraphs("a b\n\nc d", 10),
///     vec!["a b", "", "c d"]
/// );
/// ```
pub fn chop_multiple_paragraphs(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::<String>::new();

    let paragraphs = text.split('\n').filter(|p| !p.is_empty());

    for (i, paragraph) in paragraphs.enumerate() {
        if i > 0 {
            lines.push(String::new());
        }

        lines.extend(chop_single_paragraph(paragraph, width));
    }

    lines
}

/// Append each line to `out`, indented. Empty lines are indented too.
fn push_lines<S: AsRef<str>>(out: &mut String, lines: &[S], indent: usize) {
    for line in lines {
        out.push_str(&" ".repeat(indent));
        out.push_str(line.as_ref());
        out.push('\n');
    }
}

/// Append an `Options:` section listing each option and its description.
fn push_options(out: &mut String, options: &[Opt], layout: &Layout) {
    out.push_str(OPTIONS_HEADER);
    out.push('\n');

    for option in options {
        push_lines(out, &[option.to_string()], layout.indent);

        if !option.description().is_empty() {
            let lines = chop_multiple_paragraphs(option.description(), layout.description_width);
            push_lines(out, &lines, layout.description_indent);
        }

        out.push('\n');
    }
}

impl Usage {
    /// Generate the usage summary and, for programs with entries, the list
    /// of commands using the default [Layout].
    ///
    /// ```rust
    /// # use usage::{Entry, Result, Usage};
    /// # fn main() -> Result<()> {
    /// let mut usage = Usage::new("app")?;
    /// usage.add_entry(Entry::new("run", "Runs the thing.")?)?;
    ///
    /// let help = usage.global();
    ///
    /// assert!(help.starts_with("Usage:\n    app <command>"));
    /// assert!(help.contains("Commands:\n    run\n        Runs the thing.\n"));
    /// # Ok(())
    /// # }
    /// ```
    pub fn global(&self) -> String {
        self.render(&Layout::default())
    }

    /// Like [Usage::global()] but using the specified layout.
    pub fn render(&self, layout: &Layout) -> String {
        let has_entries = self.has_entries();

        let mut summary = self.name().to_string();

        if has_entries {
            summary.push_str(COMMAND_PLACEHOLDER);
        }

        if !self.options().is_empty() {
            summary.push_str(OPTIONS_PLACEHOLDER);
        }

        if !self.args().is_empty() {
            summary.push_str(ARGS_PLACEHOLDER);
        }

        if has_entries {
            summary.push_str(&format!(
                ". Run '{} <command> --help' to see the options of a command.",
                self.name()
            ));
        }

        let mut out = String::new();

        out.push_str(USAGE_HEADER);
        out.push('\n');

        let lines = chop_single_paragraph(&summary, layout.summary_width);
        push_lines(&mut out, &lines, layout.indent);

        if !has_entries {
            return out;
        }

        out.push('\n');
        out.push_str(COMMANDS_HEADER);
        out.push('\n');

        for entry in self.entries_iter() {
            push_lines(&mut out, &[entry.to_string()], layout.indent);

            if !entry.description().is_empty() {
                let lines =
                    chop_multiple_paragraphs(entry.description(), layout.description_width);
                push_lines(&mut out, &lines, layout.description_indent);
            }

            out.push('\n');
        }

        out
    }

    /// Generate the full help for the program: the output of
    /// [Usage::global()] followed by the program options, if any.
    pub fn help(&self) -> String {
        let layout = Layout::default();

        let mut out = self.render(&layout);

        if self.options().is_empty() {
            return out;
        }

        // The command list already ends with a blank line.
        if !self.has_entries() {
            out.push('\n');
        }

        push_options(&mut out, self.options(), &layout);

        out
    }

    /// Generate the help for the entry called `name`, as shown by
    /// `<program> <name> --help`.
    ///
    /// Returns `None` if no such entry is registered.
    pub fn command_help(&self, name: &str) -> Option<String> {
        let entry = self.entry(name)?;
        let layout = Layout::default();

        let mut summary = format!("{} {}", self.name(), entry.name());

        if !entry.options().is_empty() {
            summary.push_str(OPTIONS_PLACEHOLDER);
        }

        summary.push_str(&placeholders(entry.args()));

        let mut out = String::new();

        out.push_str(USAGE_HEADER);
        out.push('\n');

        let lines = chop_single_paragraph(&summary, layout.summary_width);
        push_lines(&mut out, &lines, layout.indent);

        if !entry.description().is_empty() {
            out.push('\n');

            let lines = chop_multiple_paragraphs(entry.description(), layout.summary_width);
            push_lines(&mut out, &lines, layout.indent);
        }

        if !entry.options().is_empty() {
            out.push('\n');
            push_options(&mut out, entry.options(), &layout);
        }

        Some(out)
    }
}

impl fmt::Display for Usage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.global())
    }
}
