use std::collections::{BTreeMap, HashSet};

use proptest::prelude::*;
use simfin_names::model::InputRecord;
use simfin_names::reconcile::{aggregate, find_duplicates};
use simfin_names::render::{WRAP_WIDTH, render};

fn entry_strategy() -> impl Strategy<Value = (Vec<String>, Option<String>)> {
    (
        prop::collection::vec("[A-F]{1,2}", 0..4),
        prop::option::of("[a-z ]{0,40}"),
    )
}

/// Records with pairwise distinct names, together with a shuffled copy.
fn shuffled_records() -> impl Strategy<Value = (Vec<InputRecord>, Vec<InputRecord>)> {
    prop::collection::btree_map("[A-Z][a-z]{0,6}", entry_strategy(), 0..16).prop_flat_map(
        |entries: BTreeMap<String, (Vec<String>, Option<String>)>| {
            let records: Vec<InputRecord> = entries
                .into_iter()
                .map(|(name, (shortcuts, description))| InputRecord {
                    name,
                    shortcuts,
                    description,
                })
                .collect();
            (Just(records.clone()), Just(records).prop_shuffle())
        },
    )
}

proptest! {
    #[test]
    fn render_ignores_input_order((records, shuffled) in shuffled_records()) {
        prop_assert_eq!(
            render(&aggregate(&records).groups),
            render(&aggregate(&shuffled).groups)
        );
    }

    #[test]
    fn every_name_renders_exactly_once_in_order((records, _) in shuffled_records()) {
        let lines = render(&aggregate(&records).groups);
        let rendered_names: Vec<&str> = lines
            .iter()
            .filter(|line| line.ends_with('\''))
            .map(|line| {
                let quoted = line.rsplit(" = ").next().unwrap_or(line);
                quoted.trim_matches('\'')
            })
            .collect();

        let expected: Vec<&str> = records.iter().map(|record| record.name.as_str()).collect();
        prop_assert_eq!(rendered_names, expected);
    }

    #[test]
    fn assignment_lines_hold_unique_shortcuts((records, _) in shuffled_records()) {
        let lines = render(&aggregate(&records).groups);
        for (record, line) in records
            .iter()
            .zip(lines.iter().filter(|line| line.ends_with('\'')))
        {
            let shortcuts: Vec<&str> = line.split(" = ").collect();
            let shortcuts = &shortcuts[..shortcuts.len() - 1];
            let unique: HashSet<&str> = record.shortcuts.iter().map(String::as_str).collect();
            prop_assert_eq!(shortcuts.len(), unique.len());
            prop_assert!(shortcuts.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }

    #[test]
    fn comment_lines_fit_the_wrap_width((records, _) in shuffled_records()) {
        let lines = render(&aggregate(&records).groups);
        for line in lines.iter().filter(|line| line.starts_with("# ")) {
            prop_assert!(line.chars().count() <= WRAP_WIDTH, "line too long: {line:?}");
        }
    }

    #[test]
    fn find_duplicates_yields_one_entry_per_extra_occurrence(
        items in prop::collection::vec("[a-c]", 0..24)
    ) {
        let duplicates = find_duplicates(&items);
        let unique: HashSet<&String> = items.iter().collect();

        prop_assert_eq!(duplicates.len(), items.len() - unique.len());
        for duplicate in &duplicates {
            let occurrences = items.iter().filter(|item| *item == duplicate).count();
            prop_assert!(occurrences > 1);
        }
    }
}
