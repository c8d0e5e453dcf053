//! Choosing one candidate out of the suggest results.

use crate::app::ports::ConsolePort;
use crate::error::{LocatorError, Result};
use crate::types::{Candidate, Suggestions};

#[derive(Debug, PartialEq, Eq)]
pub enum Selection<'a> {
    NoResults,
    Single(&'a Candidate),
    Choose(&'a [Candidate]),
}

/// Decide how to proceed from the service's hit count.
///
/// `num_found` drives the decision while the list shown is whatever the
/// service returned (capped by `rows`).
pub fn classify(suggestions: &Suggestions) -> Result<Selection<'_>> {
    if suggestions.num_found == 0 {
        return Ok(Selection::NoResults);
    }
    let first = suggestions
        .candidates
        .first()
        .ok_or_else(|| LocatorError::MissingField("response.docs is empty".into()))?;
    if suggestions.num_found == 1 {
        Ok(Selection::Single(first))
    } else {
        Ok(Selection::Choose(&suggestions.candidates))
    }
}

/// Interpret a typed choice against a list of `count` entries.
///
/// Returns the zero-based index, `None` for 0 or any out-of-range number, and
/// an error when the input is not a number at all.
pub fn parse_choice(input: &str, count: usize) -> Result<Option<usize>> {
    let trimmed = input.trim();
    let n: i64 = match trimmed.parse() {
        Ok(n) => n,
        // too many digits for i64 is still a number, just never a valid one
        Err(_) if is_integer_literal(trimmed) => return Ok(None),
        Err(_) => return Err(LocatorError::InvalidSelection(trimmed.to_string())),
    };
    if n >= 1 && (n as u64) <= count as u64 {
        Ok(Some(n as usize - 1))
    } else {
        Ok(None)
    }
}

fn is_integer_literal(s: &str) -> bool {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Print the numbered list and read one validated choice.
pub fn choose(console: &mut dyn ConsolePort, candidates: &[Candidate]) -> Result<Option<usize>> {
    console.say("Multiple options were found:");
    for (i, candidate) in candidates.iter().enumerate() {
        console.say(&format!("{}: {}", i + 1, candidate.display_name));
    }
    let answer = console.prompt(&format!(
        "Please select an entry (1-{}) from the list, or press 0 to quit",
        candidates.len()
    ))?;
    parse_choice(&answer, candidates.len())
}
