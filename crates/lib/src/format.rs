//! # Prose Formatting for Query Results
//!
//! Converts tabular rows into English sentences using a fixed set of
//! per-column templates. Only the well-known employee columns contribute
//! clauses; anything else is silently omitted.

use crate::types::QueryOutput;
use serde_json::Value;
use std::collections::HashMap;

/// Fixed sentence for a valid execution that matched nothing.
pub const NO_RESULTS_MESSAGE: &str =
    "I looked, but I couldn't find any matching results for that query.";

/// Trailing disclaimer when the question itself mentions LIMIT.
pub const LIMIT_DISCLAIMER: &str =
    "These are just a few of the results. Let me know if you'd like to see more!";

/// Renders query output as prose.
///
/// A single row with a single column is treated as an aggregate; numeric
/// values get two decimal places. Otherwise each row is scanned for the
/// known employee columns in a fixed order, and each present column appends
/// its clause. Pronouns follow the `gender` value: 'M' selects He/His,
/// anything else She/Her.
pub fn format_results(output: &QueryOutput, question: &str) -> String {
    if output.rows.is_empty() {
        return NO_RESULTS_MESSAGE.to_string();
    }

    let mut formatted = String::from("Here's what I found:\n\n");

    if output.rows.len() == 1 && output.rows[0].len() == 1 {
        let value = &output.rows[0][0];
        match value.as_f64() {
            Some(n) => formatted.push_str(&format!("The result is: {n:.2}\n")),
            None => formatted.push_str(&format!("The result is: {}\n", display_value(value))),
        }
    } else {
        for row in &output.rows {
            formatted.push_str(&row_sentence(&output.columns, row));
            formatted.push_str("\n\n");
        }
    }

    if question.to_uppercase().contains("LIMIT") {
        formatted.push_str(LIMIT_DISCLAIMER);
    }

    formatted
}

/// Builds one sentence for one row.
fn row_sentence(columns: &[String], row: &[Value]) -> String {
    let info: HashMap<&str, &Value> = columns
        .iter()
        .map(String::as_str)
        .zip(row.iter())
        .collect();

    let male = info
        .get("gender")
        .map(|v| v.as_str() == Some("M"))
        .unwrap_or(false);
    let (subject, possessive) = if male { ("He", "His") } else { ("She", "Her") };

    let mut sentence = String::new();

    if let (Some(first), Some(last)) = (info.get("first_name"), info.get("last_name")) {
        sentence.push_str(&format!(
            "{} {} ",
            display_value(first),
            display_value(last)
        ));
    }
    if let Some(birth) = info.get("birth_date") {
        sentence.push_str(&format!("was born on {}. ", display_value(birth)));
    }
    if info.contains_key("gender") {
        let noun = if male { "male" } else { "female" };
        sentence.push_str(&format!("{subject} is {noun}. "));
    }
    if let Some(hired) = info.get("hire_date") {
        sentence.push_str(&format!("{subject} was hired on {}. ", display_value(hired)));
    }
    if let Some(salary) = info.get("salary") {
        sentence.push_str(&format!(
            "{possessive} salary is ${}. ",
            display_value(salary)
        ));
    }
    if let Some(dept) = info.get("dept_name") {
        sentence.push_str(&format!(
            "{subject} works in the {} department. ",
            display_value(dept)
        ));
    }
    if let Some(title) = info.get("title") {
        sentence.push_str(&format!(
            "{possessive} job title is {}. ",
            display_value(title)
        ));
    }

    sentence
}

/// Renders a JSON value without quoting strings.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
