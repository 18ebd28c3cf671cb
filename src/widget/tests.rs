use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::*;
use crate::draw::recording::{RecordingSurface, SurfaceOp};
use crate::draw::{CairoCanvas, StrokeStyle};
use crate::persistence::{
    DrawingService, GalleryElement, GalleryView, HtmlGalleryView, NameInput, Notifier,
};

#[derive(Clone, Default)]
struct MockService {
    saved: Arc<Mutex<Vec<DrawingRecord>>>,
    list_calls: Arc<Mutex<usize>>,
    listing: Vec<DrawingRecord>,
    fail_save: bool,
    fail_list: bool,
}

#[async_trait]
impl DrawingService for MockService {
    async fn save(&self, record: &DrawingRecord) -> Result<serde_json::Value, PersistError> {
        self.saved.lock().unwrap().push(record.clone());
        if self.fail_save {
            Err(PersistError::Parse(
                serde_json::from_str::<serde_json::Value>("boom").unwrap_err(),
            ))
        } else {
            Ok(serde_json::json!({ "status": "saved" }))
        }
    }

    async fn list(&self) -> Result<Vec<DrawingRecord>, PersistError> {
        *self.list_calls.lock().unwrap() += 1;
        if self.fail_list {
            Err(PersistError::Parse(
                serde_json::from_str::<serde_json::Value>("<html>").unwrap_err(),
            ))
        } else {
            Ok(self.listing.clone())
        }
    }
}

#[derive(Clone, Default)]
struct MockNameInput {
    value: Arc<Mutex<String>>,
}

impl MockNameInput {
    fn with_value(value: &str) -> Self {
        Self {
            value: Arc::new(Mutex::new(value.to_string())),
        }
    }
}

impl NameInput for MockNameInput {
    fn value(&self) -> String {
        self.value.lock().unwrap().clone()
    }

    fn set_value(&self, value: &str) {
        *self.value.lock().unwrap() = value.to_string();
    }
}

#[derive(Clone, Default)]
struct MockNotifier {
    alerts: Arc<Mutex<Vec<String>>>,
}

impl Notifier for MockNotifier {
    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }
}

struct Harness<S: DrawingSurface> {
    pad: Sketchpad<S>,
    service: MockService,
    name: MockNameInput,
    notifier: MockNotifier,
    gallery: Arc<HtmlGalleryView>,
}

fn harness<S: DrawingSurface>(surface: S, service: MockService, name: &str) -> Harness<S> {
    let name = MockNameInput::with_value(name);
    let notifier = MockNotifier::default();
    let gallery = Arc::new(HtmlGalleryView::new());
    let deps = SketchpadDependencies {
        service: Arc::new(service.clone()),
        name_input: Arc::new(name.clone()),
        notifier: Arc::new(notifier.clone()),
        gallery: gallery.clone(),
    };
    Harness {
        pad: Sketchpad::new(StrokeCapture::new(surface, StrokeStyle::default()), deps),
        service,
        name,
        notifier,
        gallery,
    }
}

fn draw_line<S: DrawingSurface>(pad: &mut Sketchpad<S>) {
    let _ = pad.handle_pointer(PointerPhase::Down, Some(&PointerEvent::mouse(10.0, 10.0)));
    let _ = pad.handle_pointer(PointerPhase::Move, Some(&PointerEvent::mouse(50.0, 10.0)));
    let _ = pad.handle_pointer(PointerPhase::Up, None);
}

fn record(owner: &str, drawing: &str) -> DrawingRecord {
    DrawingRecord {
        owner_name: owner.to_string(),
        drawing: drawing.to_string(),
    }
}

#[tokio::test]
async fn save_with_empty_name_alerts_and_sends_nothing() {
    for name in ["", "   ", "\t\n"] {
        let mut h = harness(RecordingSurface::new(), MockService::default(), name);
        draw_line(&mut h.pad);

        assert_eq!(h.pad.save().await, SaveOutcome::Rejected);
        assert!(h.service.saved.lock().unwrap().is_empty());
        assert_eq!(
            *h.notifier.alerts.lock().unwrap(),
            vec!["Please enter your name".to_string()]
        );
        // Nothing exported, nothing cleared.
        assert!(!h.pad.capture().surface().is_blank());
        assert!(!h.pad.capture().surface().ops.contains(&SurfaceOp::Export));
    }
}

#[tokio::test]
async fn save_posts_once_with_raw_name_and_data_uri() {
    let canvas = CairoCanvas::new(64, 32).unwrap();
    let mut h = harness(canvas, MockService::default(), " Ada ");
    draw_line(&mut h.pad);

    let outcome = h.pad.save().await;
    assert_eq!(
        outcome,
        SaveOutcome::Submitted(serde_json::json!({ "status": "saved" }))
    );

    let saved = h.service.saved.lock().unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].owner_name, " Ada ");
    assert!(saved[0].drawing.starts_with("data:image/png;base64,iVBORw0KGgo"));
    assert!(h.notifier.alerts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn successful_save_clears_canvas_and_name() {
    let canvas = CairoCanvas::new(64, 32).unwrap();
    let mut h = harness(canvas, MockService::default(), "Ada");
    draw_line(&mut h.pad);
    assert!(!h.pad.capture_mut().surface_mut().is_blank().unwrap());

    let _ = h.pad.save().await;
    assert!(h.pad.capture_mut().surface_mut().is_blank().unwrap());
    assert_eq!(h.name.value(), "");
}

#[tokio::test]
async fn failed_save_keeps_canvas_and_is_silent() {
    let service = MockService {
        fail_save: true,
        ..MockService::default()
    };
    let mut h = harness(RecordingSurface::new(), service, "Ada");
    draw_line(&mut h.pad);

    let outcome = h.pad.save().await;
    assert!(matches!(outcome, SaveOutcome::Failed(ref msg) if msg.contains("Invalid response body")));
    assert_eq!(h.service.saved.lock().unwrap().len(), 1);
    assert!(!h.pad.capture().surface().ops.contains(&SurfaceOp::Clear));
    assert!(h.notifier.alerts.lock().unwrap().is_empty());
    assert_eq!(h.name.value(), "Ada");
}

#[tokio::test]
async fn export_failure_skips_network_call() {
    let surface = RecordingSurface {
        fail_export: true,
        ..RecordingSurface::new()
    };
    let mut h = harness(surface, MockService::default(), "Ada");

    let outcome = h.pad.save().await;
    assert!(matches!(outcome, SaveOutcome::Failed(_)));
    assert!(h.service.saved.lock().unwrap().is_empty());
}

#[tokio::test]
async fn clear_always_empties_canvas_and_name() {
    let canvas = CairoCanvas::new(64, 32).unwrap();
    let mut h = harness(canvas, MockService::default(), "Someone");

    h.pad.clear();
    assert!(h.pad.capture_mut().surface_mut().is_blank().unwrap());
    assert_eq!(h.name.value(), "");

    draw_line(&mut h.pad);
    h.name.set_value("Again");
    h.pad.clear();
    assert!(h.pad.capture_mut().surface_mut().is_blank().unwrap());
    assert_eq!(h.name.value(), "");
}

#[tokio::test]
async fn gallery_renders_heading_and_image_per_record_in_order() {
    let service = MockService {
        listing: vec![
            record("Ada", "data:image/png;base64,AAAA"),
            record("Bo", "data:image/png;base64,BBBB"),
            record("Cy", "data:image/png;base64,CCCC"),
        ],
        ..MockService::default()
    };
    let mut h = harness(RecordingSurface::new(), service, "");
    h.gallery.append_heading("stale");
    assert_eq!(h.pad.mode(), ViewMode::Drawing);

    assert_eq!(h.pad.load_gallery().await, GalleryOutcome::Loaded(3));
    assert_eq!(h.pad.mode(), ViewMode::Gallery);
    assert!(h.gallery.drawing_surface_hidden());
    assert!(h.gallery.is_visible());

    let elements = h.gallery.elements();
    let headings: Vec<_> = elements
        .iter()
        .filter_map(|e| match e {
            GalleryElement::Heading(t) => Some(t.as_str()),
            _ => None,
        })
        .collect();
    let images: Vec<_> = elements
        .iter()
        .filter_map(|e| match e {
            GalleryElement::Image(src) => Some(src.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(headings, vec!["Ada", "Bo", "Cy"]);
    assert_eq!(
        images,
        vec![
            "data:image/png;base64,AAAA",
            "data:image/png;base64,BBBB",
            "data:image/png;base64,CCCC"
        ]
    );
}

#[tokio::test]
async fn failed_gallery_load_still_hides_surface_and_renders_empty() {
    let service = MockService {
        fail_list: true,
        ..MockService::default()
    };
    let mut h = harness(RecordingSurface::new(), service, "");
    h.gallery.append_heading("stale");

    let outcome = h.pad.load_gallery().await;
    assert!(matches!(outcome, GalleryOutcome::Fallback(_)));
    assert_eq!(*h.service.list_calls.lock().unwrap(), 1);
    assert!(h.gallery.drawing_surface_hidden());
    assert!(h.gallery.elements().is_empty());
    assert_eq!(h.pad.mode(), ViewMode::Gallery);
    assert!(h.notifier.alerts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn instances_do_not_share_stroke_state() {
    let mut first = harness(RecordingSurface::new(), MockService::default(), "");
    let second = harness(RecordingSurface::new(), MockService::default(), "");

    let _ = first
        .pad
        .handle_pointer(PointerPhase::Down, Some(&PointerEvent::mouse(1.0, 1.0)));
    assert!(first.pad.capture().is_drawing());
    assert!(!second.pad.capture().is_drawing());
}
