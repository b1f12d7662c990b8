use super::fixture::{
    wait_for_renders, DeviceCameraScripted, Fixture, ImageClassifierScripted, SCRIPT_EXHAUSTED,
};
use crate::device_camera::interface::EncodedFrame;
use crate::image_classifier::interface::{Classification, ClassifyError};
use crate::timeline::category::Category;
use crate::timeline::latest::LatestState;
use std::time::Duration;

const TIMEOUT: Duration = Duration::from_secs(5);

#[test]
fn test_runs_cycles_until_stopped() {
    let fixture = Fixture::new(
        DeviceCameraScripted::new(vec![]),
        ImageClassifierScripted::new(vec![
            Ok(Classification {
                label: Category::Happy,
                confidence: 82.5,
            }),
            Err(ClassifyError::Connection("refused".to_string())),
            Ok(Classification {
                label: Category::Sad,
                confidence: 40.0,
            }),
        ]),
        Duration::from_millis(10),
    );
    let stop = fixture.monitor.stop_handle();
    let handle = std::thread::spawn(move || fixture.monitor.run());

    let rendered = wait_for_renders(&fixture.device_display, TIMEOUT, |rendered| {
        rendered.len() >= 5
    });
    stop.stop();
    let model = handle.join().unwrap().unwrap();

    assert!(rendered.len() >= 5, "only {} renders", rendered.len());

    // Initial empty render.
    assert!(rendered[0].timeline.is_empty());
    assert_eq!(rendered[0].latest, LatestState::Pending);

    assert_eq!(rendered[1].timeline.len(), 1);
    assert_eq!(rendered[1].timeline[0].value(Category::Happy), 82.5);

    assert_eq!(rendered[2].timeline, rendered[1].timeline);
    assert_eq!(
        rendered[2].latest.error(),
        Some("Cannot connect to classification service")
    );

    assert_eq!(rendered[3].timeline.len(), 2);
    assert_eq!(rendered[3].timeline[1].value(Category::Happy), 82.5);
    assert_eq!(rendered[3].timeline[1].value(Category::Sad), 40.0);

    assert_eq!(rendered[4].timeline, rendered[3].timeline);
    assert_eq!(rendered[4].latest.error(), Some(SCRIPT_EXHAUSTED));

    assert_eq!(model.aggregator.timeline().len(), 2);
}

#[test]
fn test_no_frame_cycles_render_nothing() {
    let fixture = Fixture::new(
        DeviceCameraScripted::new(vec![None, None, None, Some(EncodedFrame::jpeg(vec![1]))]),
        ImageClassifierScripted::new(vec![Ok(Classification {
            label: Category::Neutral,
            confidence: 64.0,
        })]),
        Duration::from_millis(10),
    );
    let stop = fixture.monitor.stop_handle();
    let handle = std::thread::spawn(move || fixture.monitor.run());

    let rendered = wait_for_renders(&fixture.device_display, TIMEOUT, |rendered| {
        rendered.len() >= 2
    });
    stop.stop();
    handle.join().unwrap().unwrap();

    assert!(rendered.len() >= 2);
    assert!(rendered[0].timeline.is_empty());
    assert_eq!(
        rendered[1].latest,
        LatestState::Classified {
            label: Category::Neutral,
            confidence: 64.0,
        }
    );
}

#[test]
fn test_slow_classifier_serializes_cycles() {
    let results = (0..4)
        .map(|i| {
            Ok(Classification {
                label: Category::Angry,
                confidence: i as f64,
            })
        })
        .collect();
    let fixture = Fixture::new(
        DeviceCameraScripted::new(vec![]),
        ImageClassifierScripted::new(results).with_delay(Duration::from_millis(40)),
        Duration::from_millis(5),
    );
    let stop = fixture.monitor.stop_handle();
    let handle = std::thread::spawn(move || fixture.monitor.run());

    let rendered = wait_for_renders(&fixture.device_display, TIMEOUT, |rendered| {
        rendered
            .last()
            .map(|snapshot| snapshot.timeline.len() >= 4)
            .unwrap_or(false)
    });
    stop.stop();
    let model = handle.join().unwrap().unwrap();

    assert!(model.skipped_ticks > 0);
    let last = rendered.last().unwrap();
    let angry: Vec<f64> = last
        .timeline
        .iter()
        .map(|row| row.value(Category::Angry))
        .collect();
    assert_eq!(angry, vec![0.0, 1.0, 2.0, 3.0]);
}

#[test]
fn test_stop_before_first_tick() {
    let fixture = Fixture::new(
        DeviceCameraScripted::new(vec![]),
        ImageClassifierScripted::new(vec![]),
        Duration::from_secs(60),
    );
    fixture.monitor.stop_handle().stop();

    let model = fixture.monitor.run().unwrap();

    assert!(model.aggregator.timeline().is_empty());
    assert_eq!(fixture.device_display.rendered().len(), 1);
    assert_eq!(fixture.config.tick_rate, Duration::from_secs(60));
}
