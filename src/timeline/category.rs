use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Closed set of emotion labels the classifier may report.
///
/// Declaration order is significant: it drives default filling, table
/// columns and chart series order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Angry,
    Fear,
    Happy,
    Neutral,
    Sad,
    Surprise,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Angry,
        Category::Fear,
        Category::Happy,
        Category::Neutral,
        Category::Sad,
        Category::Surprise,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Angry => "Angry",
            Category::Fear => "Fear",
            Category::Happy => "Happy",
            Category::Neutral => "Neutral",
            Category::Sad => "Sad",
            Category::Surprise => "Surprise",
        }
    }

    /// Position of this category inside [`Category::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category: {}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|category| category.name() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
