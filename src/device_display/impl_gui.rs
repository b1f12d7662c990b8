use crate::device_display::interface::{DeviceDisplay, NO_DATA_MESSAGE};
use crate::timeline::aggregator::Snapshot;
use crate::timeline::category::Category;
use crate::timeline::latest::LatestState;
use crate::timeline::row::Row;
use eframe::egui;
use std::error::Error;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

const Y_MAX: f64 = 100.0;
const AXIS_MARGIN: f32 = 40.0;
const TOP_MARGIN: f32 = 24.0;
const TIME_CAPTION: &str = "Time (hh:mm:ss)";
const CONFIDENCE_CAPTION: &str = "Confidence (%)";

pub type SharedSnapshot = Arc<Mutex<Snapshot>>;

/// Set once the monitor has stopped; the window closes on its next frame.
pub type MonitorFinished = Arc<AtomicBool>;

pub fn series_color(category: Category) -> egui::Color32 {
    match category {
        Category::Angry => egui::Color32::from_rgb(0xef, 0x44, 0x44),
        Category::Fear => egui::Color32::from_rgb(0x22, 0xc5, 0x5e),
        Category::Happy => egui::Color32::from_rgb(0xff, 0xdd, 0x57),
        Category::Neutral => egui::Color32::from_rgb(0x9c, 0xa3, 0xaf),
        Category::Sad => egui::Color32::from_rgb(0x3b, 0x82, 0xf6),
        Category::Surprise => egui::Color32::from_rgb(0xa8, 0x55, 0xf7),
    }
}

/// Maps every category's values onto `rect`, oldest row on the left,
/// y from 0 (bottom) to 100 (top). Out of range values are clamped.
pub fn series_points(rows: &[Row], rect: egui::Rect) -> Vec<(Category, Vec<egui::Pos2>)> {
    let step = if rows.len() > 1 {
        rect.width() / (rows.len() - 1) as f32
    } else {
        0.0
    };
    let x_at = |i: usize| {
        if rows.len() > 1 {
            rect.left() + step * i as f32
        } else {
            rect.center().x
        }
    };
    let y_at = |value: f64| {
        let ratio = (value.clamp(0.0, Y_MAX) / Y_MAX) as f32;
        rect.bottom() - ratio * rect.height()
    };

    Category::ALL
        .iter()
        .map(|category| {
            let points = rows
                .iter()
                .enumerate()
                .map(|(i, row)| egui::pos2(x_at(i), y_at(row.value(*category))))
                .collect();
            (*category, points)
        })
        .collect()
}

/// Anchors for the axis captions: time centered under the plot, confidence
/// above the y axis labels.
pub fn axis_captions(
    area: egui::Rect,
    plot: egui::Rect,
) -> [(egui::Pos2, egui::Align2, &'static str); 2] {
    [
        (
            egui::pos2(plot.center().x, area.bottom() - 2.0),
            egui::Align2::CENTER_BOTTOM,
            TIME_CAPTION,
        ),
        (
            egui::pos2(area.left(), plot.top() - 4.0),
            egui::Align2::LEFT_BOTTOM,
            CONFIDENCE_CAPTION,
        ),
    ]
}

/// Publishes snapshots to the window through shared state.
pub struct DeviceDisplayGui {
    shared: SharedSnapshot,
}

impl DeviceDisplayGui {
    pub fn new(shared: SharedSnapshot) -> Self {
        Self { shared }
    }
}

impl DeviceDisplay for DeviceDisplayGui {
    fn render(&mut self, snapshot: &Snapshot) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut shared = self.shared.lock().map_err(|e| e.to_string())?;
        *shared = snapshot.clone();
        Ok(())
    }
}

struct TimelineWindow {
    shared: SharedSnapshot,
    finished: MonitorFinished,
}

impl TimelineWindow {
    fn should_close(&self) -> bool {
        self.finished.load(Ordering::SeqCst)
    }

    fn snapshot(&self) -> Snapshot {
        match self.shared.lock() {
            Ok(snapshot) => snapshot.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn draw_latest(ui: &mut egui::Ui, latest: &LatestState) {
        match latest {
            LatestState::Pending => {
                ui.label("Emotion: Detecting...");
            }
            LatestState::Classified { label, confidence } => {
                ui.colored_label(series_color(*label), format!("Emotion: {}", label));
                ui.label(format!("Confidence: {:.2}%", confidence));
            }
            LatestState::Failed { error } => {
                ui.colored_label(egui::Color32::from_rgb(0xef, 0x44, 0x44), error.as_str());
            }
        }
    }

    fn draw_legend(ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            for category in Category::ALL {
                ui.colored_label(series_color(category), format!("■ {}", category));
            }
        });
    }

    fn draw_chart(ui: &mut egui::Ui, rows: &[Row]) {
        let size = ui.available_size();
        let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
        let plot = egui::Rect::from_min_max(
            response.rect.min + egui::vec2(AXIS_MARGIN, TOP_MARGIN),
            response.rect.max - egui::vec2(10.0, AXIS_MARGIN),
        );
        let axis_color = egui::Color32::from_gray(120);
        let font = egui::FontId::proportional(12.0);

        for tick in [0.0, 25.0, 50.0, 75.0, 100.0] {
            let y = plot.bottom() - (tick / Y_MAX) as f32 * plot.height();
            painter.line_segment(
                [egui::pos2(plot.left(), y), egui::pos2(plot.right(), y)],
                egui::Stroke::new(0.5, egui::Color32::from_gray(60)),
            );
            painter.text(
                egui::pos2(plot.left() - 6.0, y),
                egui::Align2::RIGHT_CENTER,
                format!("{}", tick),
                font.clone(),
                axis_color,
            );
        }
        painter.rect_stroke(plot, 0.0, egui::Stroke::new(1.0, axis_color));

        for (anchor, align, caption) in axis_captions(response.rect, plot) {
            painter.text(anchor, align, caption, font.clone(), axis_color);
        }

        for (category, points) in series_points(rows, plot) {
            painter.add(egui::Shape::line(
                points,
                egui::Stroke::new(2.0, series_color(category)),
            ));
        }

        if let (Some(first), Some(last)) = (rows.first(), rows.last()) {
            painter.text(
                egui::pos2(plot.left(), plot.bottom() + 6.0),
                egui::Align2::LEFT_TOP,
                &first.time,
                font.clone(),
                axis_color,
            );
            painter.text(
                egui::pos2(plot.right(), plot.bottom() + 6.0),
                egui::Align2::RIGHT_TOP,
                &last.time,
                font,
                axis_color,
            );
        }
    }
}

impl eframe::App for TimelineWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.should_close() {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let snapshot = self.snapshot();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Real-Time Emotion Detection");
            Self::draw_latest(ui, &snapshot.latest);
            ui.separator();

            if snapshot.timeline.is_empty() {
                ui.label(NO_DATA_MESSAGE);
                return;
            }

            Self::draw_legend(ui);
            Self::draw_chart(ui, &snapshot.timeline);
        });

        ctx.request_repaint_after(Duration::from_millis(250));
    }
}

/// Blocks the calling thread, which must be the main thread, until the
/// window is closed by the user or `finished` is set.
pub fn run_window(
    shared: SharedSnapshot,
    finished: MonitorFinished,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([900.0, 520.0]),
        ..Default::default()
    };

    let window = TimelineWindow { shared, finished };

    eframe::run_native(
        "Emotion Timeline",
        options,
        Box::new(|_cc| Box::new(window)),
    )
    .map_err(|e| e.to_string())?;

    Ok(())
}
