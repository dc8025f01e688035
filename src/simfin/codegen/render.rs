//! Rendering of the reconciled name groups into the generated `names.py`
//! module.
//!
//! Every group becomes a block of optional `# ` description lines, a single
//! assignment line chaining its shortcuts onto the quoted name, and a blank
//! separator line. Groups are emitted in name order so the output is stable
//! across runs and can be reviewed with a plain diff.

use std::collections::{BTreeMap, BTreeSet};

use textwrap::{Options, WordSeparator, WrapAlgorithm};

use crate::simfin::codegen::model::NameGroup;

/// Maximum width of a description comment line, prefix included.
pub const WRAP_WIDTH: usize = 80;

/// Prefix written in front of every description line.
pub const COMMENT_PREFIX: &str = "# ";

/// Section separator written after the last group.
pub const SEPARATOR: &str =
    "##########################################################################";

/// Banner written at the top of the generated module unless overridden.
pub const DEFAULT_HEADER: &str = "\
##########################################################################
#
# Names that makes it easier to address individual data-columns.
# For example, you can write df[SGA] instead of
# df['Selling, General & Administrative'] to get the same data.
#
# For a better overview of the datasets and their data-columns, see:
# https://simfin.com/data/access/bulk
#
# This file was auto-generated by the simfin-names tool.
#
##########################################################################
# SimFin - Simple financial data for Python.
# www.simfin.com - www.github.com/simfin/simfin
# See README.md for instructions and LICENSE.txt for license details.
##########################################################################

# Import all the extra names that have been manually defined. This makes
# them available for import through this auto-generated module as well.
from simfin.names_extra import *

##########################################################################
";

/// Renders the full module: header, a blank line, then every group.
pub fn render_document(header: &str, groups: &BTreeMap<String, NameGroup>) -> String {
    let mut document = String::with_capacity(header.len() + groups.len() * 128);
    document.push_str(header.trim_end_matches('\n'));
    document.push_str("\n\n");
    for line in render(groups) {
        document.push_str(&line);
        document.push('\n');
    }
    document
}

/// Renders the groups in ascending name order, followed by the separator.
pub fn render(groups: &BTreeMap<String, NameGroup>) -> Vec<String> {
    let options = wrap_options();
    let mut lines = Vec::new();

    for (name, group) in groups {
        if let Some(description) = combined_description(&group.descriptions) {
            lines.extend(
                textwrap::wrap(&description, &options)
                    .into_iter()
                    .map(|line| line.into_owned()),
            );
        }
        lines.push(assignment_line(name, &group.shortcuts));
        lines.push(String::new());
    }

    lines.push(SEPARATOR.to_string());
    lines
}

/// Joins a group's descriptions into the text that gets wrapped.
///
/// A single description is used as is; several are numbered `(1) .. (2) ..`.
/// Returns `None` when nothing but whitespace remains.
pub fn combined_description(descriptions: &[String]) -> Option<String> {
    let combined = match descriptions {
        [] => return None,
        [single] => single.trim().to_string(),
        many => many
            .iter()
            .enumerate()
            .map(|(idx, description)| format!("({}) {}", idx + 1, description.trim()))
            .collect::<Vec<_>>()
            .join(" "),
    };

    let combined: String = combined
        .trim()
        .chars()
        .map(|ch| if ch.is_whitespace() { ' ' } else { ch })
        .collect();

    (!combined.is_empty()).then_some(combined)
}

/// Builds `A = B = 'Name'` from the group's shortcuts, deduplicated and sorted.
pub fn assignment_line(name: &str, shortcuts: &[String]) -> String {
    let unique: BTreeSet<&str> = shortcuts.iter().map(String::as_str).collect();
    let mut line = String::new();
    for shortcut in unique {
        line.push_str(shortcut);
        line.push_str(" = ");
    }
    line.push('\'');
    line.push_str(name);
    line.push('\'');
    line
}

fn wrap_options() -> Options<'static> {
    Options::new(WRAP_WIDTH)
        .initial_indent(COMMENT_PREFIX)
        .subsequent_indent(COMMENT_PREFIX)
        .word_separator(WordSeparator::AsciiSpace)
        .wrap_algorithm(WrapAlgorithm::FirstFit)
}
