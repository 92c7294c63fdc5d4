//! The `mockdrill topics` command.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use mockdrill_core::model::Topic;

use crate::commands::resolve_bank;

pub fn execute(bank: Option<PathBuf>) -> Result<()> {
    let questions = resolve_bank(bank.as_deref())?;

    let mut counts: BTreeMap<Topic, usize> = BTreeMap::new();
    for question in &questions {
        *counts.entry(question.topic).or_default() += 1;
    }

    let mut table = Table::new();
    table.set_header(vec!["Topic", "Questions"]);
    for (topic, count) in &counts {
        table.add_row(vec![Cell::new(topic), Cell::new(count)]);
    }

    println!("{table}");
    println!(
        "{} question(s) across {} topic(s).",
        questions.len(),
        counts.len()
    );

    Ok(())
}
