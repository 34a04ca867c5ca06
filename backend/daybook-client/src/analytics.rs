//! Mood analytics transforms.
//!
//! Pure functions over journal entries producing the aggregates the
//! analytics views chart: a time-ordered mood score series, the mood
//! distribution, the rounded average score, and the most common mood.
//! Chart rendering is the caller's concern.
use crate::models::JournalEntry;

/// One point of the mood-over-time series.
#[derive(Debug, Clone, PartialEq)]
pub struct MoodSeriesPoint {
    /// Short date label, e.g. "Mar 1".
    pub label: String,
    /// Mood score in 0..=100.
    pub score: i32,
}

/// Time-ordered mood score series. `None` when there is nothing to chart.
pub fn mood_time_series(entries: &[JournalEntry]) -> Option<Vec<MoodSeriesPoint>> {
    if entries.is_empty() {
        return None;
    }

    let mut sorted: Vec<&JournalEntry> = entries.iter().collect();
    sorted.sort_by_key(|e| e.created_at);

    Some(
        sorted
            .into_iter()
            .map(|e| MoodSeriesPoint {
                label: e.created_at.format("%b %-d").to_string(),
                score: e.normalized_sentiment,
            })
            .collect(),
    )
}

/// Count of entries per mood, in first-seen order.
pub fn mood_distribution(entries: &[JournalEntry]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for entry in entries {
        match counts.iter_mut().find(|(mood, _)| mood == &entry.mood) {
            Some((_, n)) => *n += 1,
            None => counts.push((entry.mood.clone(), 1)),
        }
    }
    counts
}

/// Average mood score rounded to the nearest whole percent.
pub fn average_score(entries: &[JournalEntry]) -> Option<i32> {
    if entries.is_empty() {
        return None;
    }
    let sum: i64 = entries
        .iter()
        .map(|e| i64::from(e.normalized_sentiment))
        .sum();
    Some((sum as f64 / entries.len() as f64).round() as i32)
}

/// The most frequent mood; ties resolve to the mood seen first.
pub fn most_common_mood(entries: &[JournalEntry]) -> Option<String> {
    let mut best: Option<(String, usize)> = None;
    for (mood, count) in mood_distribution(entries) {
        match &best {
            Some((_, best_count)) if *best_count >= count => {}
            _ => best = Some((mood, count)),
        }
    }
    best.map(|(mood, _)| mood)
}
