use chrono::{FixedOffset, Local, Offset, Utc};

/// Zone used for every wall-clock label. `Local` follows the system zone
/// on each read, so daylight-saving changes show up mid-run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Timezone {
    #[default]
    Local,
    Fixed(FixedOffset),
}

impl Timezone {
    pub fn utc() -> Self {
        Timezone::Fixed(Utc.fix())
    }

    pub fn format_now(&self, format: &str) -> String {
        let now = Utc::now();
        match self {
            Timezone::Local => now.with_timezone(&Local).format(format).to_string(),
            Timezone::Fixed(offset) => now.with_timezone(offset).format(format).to_string(),
        }
    }
}
