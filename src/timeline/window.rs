use crate::timeline::row::{ClassificationResult, Row};
use std::collections::VecDeque;

pub const DEFAULT_WINDOW: usize = 15;

/// Bounded, append-only sequence of rows with FIFO eviction.
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    rows: VecDeque<Row>,
    window: usize,
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}

impl Timeline {
    /// A window of 0 is clamped to 1.
    pub fn new(window: usize) -> Self {
        let window = window.max(1);
        Self {
            rows: VecDeque::with_capacity(window + 1),
            window,
        }
    }

    pub fn ingest(&mut self, result: &ClassificationResult) -> Row {
        let row = match self.rows.back() {
            Some(last) => last.carry_forward(result),
            None => Row::baseline().carry_forward(result),
        };

        self.rows.push_back(row.clone());
        while self.rows.len() > self.window {
            self.rows.pop_front();
        }

        row
    }

    #[allow(dead_code)]
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter()
    }

    pub fn snapshot(&self) -> Vec<Row> {
        self.rows.iter().cloned().collect()
    }

    #[allow(dead_code)]
    pub fn last(&self) -> Option<&Row> {
        self.rows.back()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[allow(dead_code)]
    pub fn window(&self) -> usize {
        self.window
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::category::Category;

    fn result(label: Category, confidence: f64, observed_at: &str) -> ClassificationResult {
        ClassificationResult {
            label,
            confidence,
            observed_at: observed_at.to_string(),
        }
    }

    #[test]
    fn test_first_ingest_defaults_unobserved_to_zero() {
        let mut timeline = Timeline::default();

        let row = timeline.ingest(&result(Category::Happy, 82.5, "10:00:00"));

        assert_eq!(row, Row::new("10:00:00", [0.0, 0.0, 82.5, 0.0, 0.0, 0.0]));
        assert_eq!(timeline.snapshot(), vec![row]);
    }

    #[test]
    fn test_second_ingest_carries_previous_values() {
        let mut timeline = Timeline::default();
        timeline.ingest(&result(Category::Happy, 82.5, "10:00:00"));

        let row = timeline.ingest(&result(Category::Sad, 40.0, "10:00:01"));

        assert_eq!(row, Row::new("10:00:01", [0.0, 0.0, 82.5, 0.0, 40.0, 0.0]));
        assert_eq!(timeline.len(), 2);
    }

    #[test]
    fn test_carry_forward_over_long_sequence() {
        let sequence = [
            (Category::Angry, 10.0),
            (Category::Fear, 20.0),
            (Category::Angry, 30.0),
            (Category::Surprise, 99.0),
            (Category::Neutral, 5.5),
            (Category::Fear, 0.0),
            (Category::Happy, 71.25),
        ];
        let mut timeline = Timeline::new(100);
        let mut expected = [0.0; 6];

        for (i, (label, confidence)) in sequence.iter().enumerate() {
            let before = timeline.last().cloned().unwrap_or_else(Row::baseline);
            let row = timeline.ingest(&result(*label, *confidence, &format!("t{}", i)));
            expected[label.index()] = *confidence;

            let changed = Category::ALL
                .iter()
                .filter(|c| row.value(**c) != before.value(**c))
                .count();
            assert!(changed <= 1);
            for category in Category::ALL {
                assert_eq!(row.value(category), expected[category.index()]);
            }
        }
    }

    #[test]
    fn test_same_value_for_same_label_changes_nothing() {
        let mut timeline = Timeline::default();
        let first = timeline.ingest(&result(Category::Sad, 40.0, "10:00:00"));
        let second = timeline.ingest(&result(Category::Sad, 40.0, "10:00:01"));

        assert!(first.values().eq(second.values()));
        assert_eq!(timeline.len(), 2);
    }

    #[test]
    fn test_window_evicts_oldest_first() {
        let mut timeline = Timeline::new(15);

        for i in 0..16 {
            timeline.ingest(&result(Category::Happy, i as f64, &format!("10:00:{:02}", i)));
        }

        assert_eq!(timeline.len(), 15);
        let times: Vec<String> = timeline.rows().map(|row| row.time.clone()).collect();
        let expected: Vec<String> = (1..16).map(|i| format!("10:00:{:02}", i)).collect();
        assert_eq!(times, expected);
    }

    #[test]
    fn test_window_stays_bounded_under_many_ingests() {
        let mut timeline = Timeline::new(3);

        for i in 0..50 {
            timeline.ingest(&result(Category::ALL[i % 6], i as f64, &i.to_string()));
            assert!(timeline.len() <= 3);
        }

        let times: Vec<&str> = timeline.rows().map(|row| row.time.as_str()).collect();
        assert_eq!(times, vec!["47", "48", "49"]);
    }

    #[test]
    fn test_evicted_rows_do_not_reset_carried_values() {
        let mut timeline = Timeline::new(2);
        timeline.ingest(&result(Category::Angry, 12.0, "a"));
        timeline.ingest(&result(Category::Fear, 34.0, "b"));
        let row = timeline.ingest(&result(Category::Sad, 56.0, "c"));

        assert_eq!(row.value(Category::Angry), 12.0);
        assert_eq!(row.value(Category::Fear), 34.0);
        assert_eq!(row.value(Category::Sad), 56.0);
    }

    #[test]
    fn test_zero_window_is_clamped() {
        let mut timeline = Timeline::new(0);
        timeline.ingest(&result(Category::Happy, 1.0, "a"));
        timeline.ingest(&result(Category::Happy, 2.0, "b"));

        assert_eq!(timeline.window(), 1);
        assert_eq!(timeline.len(), 1);
        assert_eq!(timeline.last().map(|row| row.time.as_str()), Some("b"));
    }
}
