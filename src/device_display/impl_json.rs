use crate::device_display::interface::DeviceDisplay;
use crate::timeline::aggregator::Snapshot;
use std::error::Error;
use std::io::Write;

/// Newline-delimited JSON, one `{"timeline": [...], "latest": ...}`
/// document per render.
pub struct DeviceDisplayJson<W: Write + Send> {
    writer: W,
}

impl<W: Write + Send> DeviceDisplayJson<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> DeviceDisplay for DeviceDisplayJson<W> {
    fn render(&mut self, snapshot: &Snapshot) -> Result<(), Box<dyn Error + Send + Sync>> {
        serde_json::to_writer(&mut self.writer, snapshot)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::aggregator::Aggregator;
    use crate::timeline::category::Category;
    use crate::timeline::row::ClassificationResult;

    #[test]
    fn test_one_line_per_render() {
        let mut aggregator = Aggregator::new(15);
        let mut display = DeviceDisplayJson::new(Vec::new());

        display.render(&aggregator.snapshot()).unwrap();
        aggregator.ingest(&ClassificationResult {
            label: Category::Happy,
            confidence: 82.5,
            observed_at: "10:00:00".to_string(),
        });
        display.render(&aggregator.snapshot()).unwrap();

        let output = String::from_utf8(display.into_inner()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], r#"{"timeline":[],"latest":null}"#);
        assert_eq!(
            lines[1],
            r#"{"timeline":[{"time":"10:00:00","Angry":0.0,"Fear":0.0,"Happy":82.5,"Neutral":0.0,"Sad":0.0,"Surprise":0.0}],"latest":{"label":"Happy","confidence":82.5}}"#
        );
    }
}
