use crate::{CardError, Px, Result, TextMetrics};

/// Breaks text into lines that each fit within `max_width` when rendered at `size`.
///
/// The text is split on whitespace first, so newlines, tabs, and runs of spaces in the
/// input are not preserved: words on a line are always joined by a single space.
///
/// # Wrapping Behavior
///
/// This is a greedy, single pass wrap. Each word is tentatively appended to the last
/// line and the _whole_ candidate block is measured. If the block is still no wider
/// than `max_width` the candidate is kept, otherwise the word starts a new line. Lines
/// already laid out are never revisited.
///
/// Words are never split. A word which is wider than `max_width` on its own is placed
/// on a line by itself and allowed to overflow.
///
/// Returns [CardError::EmptyInput] if the text has no words in it.
pub fn wrap<M: TextMetrics + ?Sized>(
    text: &str,
    size: u32,
    max_width: Px,
    metrics: &M,
) -> Result<Vec<String>> {
    let mut words = text.split_whitespace();
    let first = words.next().ok_or(CardError::EmptyInput)?;

    let mut settled: Vec<String> = Vec::new();
    let mut last = first.to_string();
    for word in words {
        let joined = format!("{last} {word}");
        let mut candidate = settled.clone();
        candidate.push(joined.clone());

        if metrics.measure(&candidate, size).width > max_width {
            settled.push(std::mem::replace(&mut last, word.to_string()));
        } else {
            last = joined;
        }
    }

    let mut lines = settled;
    lines.push(last);
    Ok(lines)
}
