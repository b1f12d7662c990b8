use crate::timeline::category::Category;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// One successful classification, stamped with the time it completed.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationResult {
    pub label: Category,
    pub confidence: f64,
    pub observed_at: String,
}

/// One point of the timeline: a display time plus one value per category.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub time: String,
    values: [f64; Category::ALL.len()],
}

impl Row {
    /// Synthetic predecessor of the first row: every category at 0.
    pub fn baseline() -> Self {
        Self {
            time: String::new(),
            values: [0.0; Category::ALL.len()],
        }
    }

    pub fn new(time: impl Into<String>, values: [f64; Category::ALL.len()]) -> Self {
        Self {
            time: time.into(),
            values,
        }
    }

    pub fn value(&self, category: Category) -> f64 {
        self.values[category.index()]
    }

    pub fn values(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        Category::ALL
            .into_iter()
            .map(move |category| (category, self.values[category.index()]))
    }

    /// Next row under the continuity rule: only `result.label` takes a new
    /// value, every other category keeps what it held in `self`.
    pub fn carry_forward(&self, result: &ClassificationResult) -> Row {
        let mut values = [0.0; Category::ALL.len()];
        for category in Category::ALL {
            values[category.index()] = if category == result.label {
                result.confidence
            } else {
                self.value(category)
            };
        }
        Row::new(result.observed_at.clone(), values)
    }
}

impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1 + Category::ALL.len()))?;
        map.serialize_entry("time", &self.time)?;
        for (category, value) in self.values() {
            map.serialize_entry(category.name(), &value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_is_all_zero() {
        let row = Row::baseline();
        assert!(row.values().all(|(_, value)| value == 0.0));
    }

    #[test]
    fn test_carry_forward_updates_only_incoming_label() {
        let previous = Row::new("10:00:00", [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let next = previous.carry_forward(&ClassificationResult {
            label: Category::Neutral,
            confidence: 50.0,
            observed_at: "10:00:01".to_string(),
        });

        assert_eq!(next, Row::new("10:00:01", [1.0, 2.0, 3.0, 50.0, 5.0, 6.0]));
    }

    #[test]
    fn test_serializes_as_flat_object_in_category_order() {
        let row = Row::new("10:00:00", [0.0, 0.0, 82.5, 0.0, 0.0, 0.0]);
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(
            json,
            r#"{"time":"10:00:00","Angry":0.0,"Fear":0.0,"Happy":82.5,"Neutral":0.0,"Sad":0.0,"Surprise":0.0}"#
        );
    }
}
