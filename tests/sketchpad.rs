mod common;

use std::sync::Arc;
use std::time::Duration;

use sketchwall::draw::{CairoCanvas, StrokeStyle};
use sketchwall::input::{PointerEvent, PointerPhase, StrokeCapture};
use sketchwall::persistence::{
    FixedNameInput, GalleryElement, GalleryOutcome, HtmlGalleryView, HttpDrawingService,
    NameInput, SaveOutcome, SketchpadDependencies, StderrNotifier, ViewMode,
};
use sketchwall::util::decode_data_uri;
use sketchwall::widget::Sketchpad;
use url::Url;

struct Fixture {
    pad: Sketchpad<CairoCanvas>,
    name: Arc<FixedNameInput>,
    gallery: Arc<HtmlGalleryView>,
}

fn fixture(base_url: &str, name: &str) -> Fixture {
    let service = HttpDrawingService::new(
        Url::parse(&format!("{}/data/save", base_url)).unwrap(),
        Url::parse(&format!("{}/data/getData", base_url)).unwrap(),
        Duration::from_secs(5),
    )
    .unwrap();
    let name = Arc::new(FixedNameInput::new(name));
    let gallery = Arc::new(HtmlGalleryView::new());
    let deps = SketchpadDependencies {
        service: Arc::new(service),
        name_input: name.clone(),
        notifier: Arc::new(StderrNotifier),
        gallery: gallery.clone(),
    };
    let canvas = CairoCanvas::new(120, 80).unwrap();
    Fixture {
        pad: Sketchpad::new(StrokeCapture::new(canvas, StrokeStyle::default()), deps),
        name,
        gallery,
    }
}

fn png_dimensions(png: &[u8]) -> (u32, u32) {
    let width = u32::from_be_bytes([png[16], png[17], png[18], png[19]]);
    let height = u32::from_be_bytes([png[20], png[21], png[22], png[23]]);
    (width, height)
}

#[tokio::test]
async fn drawn_stroke_is_posted_as_png_data_uri() {
    let server = common::serve(vec![(200, r#"{"ok":true}"#)]);
    let mut f = fixture(&server.base_url, "Ada");

    let _ = f
        .pad
        .handle_pointer(PointerPhase::Down, Some(&PointerEvent::touch(&[(10.0, 10.0)])));
    let _ = f
        .pad
        .handle_pointer(PointerPhase::Move, Some(&PointerEvent::touch(&[(90.0, 40.0)])));
    let _ = f.pad.handle_pointer(PointerPhase::Up, None);

    let outcome = f.pad.save().await;
    assert_eq!(outcome, SaveOutcome::Submitted(serde_json::json!({ "ok": true })));

    let requests = server.finish();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].form_field("ownerName").as_deref(), Some("Ada"));

    let drawing = requests[0].form_field("drawing").unwrap();
    let image = decode_data_uri(&drawing).unwrap();
    assert_eq!(image.mime, "image/png");
    assert_eq!(png_dimensions(&image.bytes), (120, 80));

    assert_eq!(f.name.value(), "");
    assert!(f.pad.capture_mut().surface_mut().is_blank().unwrap());
}

#[tokio::test]
async fn unreachable_service_leaves_drawing_in_place() {
    let mut f = fixture(&common::unreachable_base_url(), "Ada");
    let _ = f
        .pad
        .handle_pointer(PointerPhase::Down, Some(&PointerEvent::mouse(10.0, 10.0)));
    let _ = f
        .pad
        .handle_pointer(PointerPhase::Move, Some(&PointerEvent::mouse(50.0, 10.0)));
    let _ = f.pad.handle_pointer(PointerPhase::Leave, None);

    assert!(matches!(f.pad.save().await, SaveOutcome::Failed(_)));
    assert!(!f.pad.capture_mut().surface_mut().is_blank().unwrap());
    assert_eq!(f.name.value(), "Ada");
}

#[tokio::test]
async fn json_reply_with_error_status_still_clears_the_canvas() {
    let server = common::serve(vec![(500, r#"{"error":"db down"}"#)]);
    let mut f = fixture(&server.base_url, "Ada");
    let _ = f
        .pad
        .handle_pointer(PointerPhase::Down, Some(&PointerEvent::mouse(10.0, 10.0)));
    let _ = f
        .pad
        .handle_pointer(PointerPhase::Move, Some(&PointerEvent::mouse(50.0, 10.0)));
    let _ = f.pad.handle_pointer(PointerPhase::Up, None);

    let outcome = f.pad.save().await;
    assert_eq!(
        outcome,
        SaveOutcome::Submitted(serde_json::json!({ "error": "db down" }))
    );
    assert!(f.pad.capture_mut().surface_mut().is_blank().unwrap());
    assert_eq!(f.name.value(), "");
    server.finish();
}

#[tokio::test]
async fn gallery_renders_listing_served_with_error_status() {
    let server = common::serve(vec![(
        500,
        r#"{"data":[{"ownerName":"Ada","drawing":"data:image/png;base64,AA=="}]}"#,
    )]);
    let mut f = fixture(&server.base_url, "");

    assert_eq!(f.pad.load_gallery().await, GalleryOutcome::Loaded(1));
    assert_eq!(
        f.gallery.elements(),
        vec![
            GalleryElement::Heading("Ada".to_string()),
            GalleryElement::Image("data:image/png;base64,AA==".to_string()),
        ]
    );
    server.finish();
}

#[tokio::test]
async fn gallery_switches_view_and_renders_records() {
    let server = common::serve(vec![(
        200,
        r#"{"data":[{"ownerName":"Ada","drawing":"data:image/png;base64,AA=="},{"ownerName":"Bo","drawing":"data:image/png;base64,AQ=="}]}"#,
    )]);
    let mut f = fixture(&server.base_url, "");

    assert_eq!(f.pad.load_gallery().await, GalleryOutcome::Loaded(2));
    assert_eq!(f.pad.mode(), ViewMode::Gallery);
    assert!(f.gallery.drawing_surface_hidden());
    assert_eq!(
        f.gallery.elements(),
        vec![
            GalleryElement::Heading("Ada".to_string()),
            GalleryElement::Image("data:image/png;base64,AA==".to_string()),
            GalleryElement::Heading("Bo".to_string()),
            GalleryElement::Image("data:image/png;base64,AQ==".to_string()),
        ]
    );
    server.finish();
}
