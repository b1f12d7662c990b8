use crate::device_display::interface::{DeviceDisplay, NO_DATA_MESSAGE};
use crate::timeline::aggregator::Snapshot;
use crate::timeline::category::Category;
use crate::timeline::latest::LatestState;
use std::error::Error;
use std::io::Write;

const TIME_COLUMN: usize = 10;
const VALUE_COLUMN: usize = 9;

pub struct DeviceDisplayConsole<W: Write + Send> {
    writer: W,
}

impl<W: Write + Send> DeviceDisplayConsole<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

fn latest_line(latest: &LatestState) -> String {
    match latest {
        LatestState::Pending => "Emotion: Detecting...".to_string(),
        LatestState::Classified { label, confidence } => {
            format!("Emotion: {}  Confidence: {:.2}%", label, confidence)
        }
        LatestState::Failed { error } => format!("Error: {}", error),
    }
}

fn table_lines(snapshot: &Snapshot) -> Vec<String> {
    if snapshot.timeline.is_empty() {
        return vec![NO_DATA_MESSAGE.to_string()];
    }

    let mut header = format!("{:<width$}", "Time", width = TIME_COLUMN);
    for category in Category::ALL {
        header.push_str(&format!("{:>width$}", category.name(), width = VALUE_COLUMN));
    }

    let mut lines = vec![header];
    for row in &snapshot.timeline {
        let mut line = format!("{:<width$}", row.time, width = TIME_COLUMN);
        for (_, value) in row.values() {
            line.push_str(&format!("{:>width$.2}", value, width = VALUE_COLUMN));
        }
        lines.push(line);
    }
    lines
}

/// Boxed text panel: latest outcome on top, timeline table below.
pub fn format_panel(snapshot: &Snapshot) -> String {
    let top = vec![latest_line(&snapshot.latest)];
    let bottom = table_lines(snapshot);

    let width = top
        .iter()
        .chain(bottom.iter())
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);

    let boxed = |line: &String| {
        let padding = width - line.chars().count();
        format!("│ {}{} │\n", line, " ".repeat(padding))
    };

    let rule = "─".repeat(width + 2);
    let mut panel = format!("┌{}┐\n", rule);
    top.iter().for_each(|line| panel.push_str(&boxed(line)));
    panel.push_str(&format!("├{}┤\n", rule));
    bottom.iter().for_each(|line| panel.push_str(&boxed(line)));
    panel.push_str(&format!("└{}┘", rule));
    panel
}

impl<W: Write + Send> DeviceDisplay for DeviceDisplayConsole<W> {
    fn render(&mut self, snapshot: &Snapshot) -> Result<(), Box<dyn Error + Send + Sync>> {
        writeln!(self.writer, "{}", format_panel(snapshot))?;
        self.writer.flush()?;
        Ok(())
    }
}
