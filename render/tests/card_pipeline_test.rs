//! End-to-end card rendering: contact to QR, composite, PNG on disk.

use bizcard_render::{
    BizCard, CanvasSize, DirectoryExporter, ExportOutcome, FALLBACK_BACKGROUND, GestureController, Placement,
    TouchPhase, TouchTracker, encode_png, export, export_file_name,
};
use bizcard_vcard::{Contact, EncodeOptions, Profile, VersionChoice};
use image::{Rgba, RgbaImage};

const BLUE: Rgba<u8> = Rgba([20, 40, 200, 255]);

fn card_with_background() -> BizCard {
    let contact = Contact::new("欧阳娜娜")
        .with_org("北京某某科技有限公司")
        .with_tel("13800000000");
    let mut card = BizCard::new(contact, EncodeOptions::for_profile(Profile::Legacy, VersionChoice::Auto));
    card.qr_style.size = 256;
    card.background = Some(RgbaImage::from_pixel(400, 300, BLUE));
    card
}

#[test]
fn test_card_places_qr_over_background() {
    let mut card = card_with_background();
    card.regenerate().expect("regenerate");

    let placement = Placement::default();
    let canvas = card.render(300, 500, placement, None);
    assert_eq!(canvas.dimensions(), (300, 500));

    // Far from the QR the cover-fitted background shows through.
    assert_eq!(*canvas.get_pixel(5, 490), BLUE);

    // The QR's quiet zone sits at the rect's top-left corner.
    let rect = placement.qr_rect(300, 500);
    let (left, top) = (rect.left as u32, rect.top as u32);
    let quiet = canvas.get_pixel(left + 1, top + 1);
    assert!(quiet[0] > 240 && quiet[2] > 240, "quiet zone {quiet:?}");

    // Between the card edge and the QR the translucent card tints the blue.
    let card_edge = canvas.get_pixel(left - 5, top + rect.pixel_size() / 2);
    assert!(card_edge[0] > 200, "card {card_edge:?}");
}

#[test]
fn test_payload_uses_legacy_encoding() {
    let card = card_with_background();
    let payload = card.payload().expect("payload");
    assert!(payload.starts_with("BEGIN:VCARD\r\nVERSION:2.1\r\n"), "{payload}");
    assert!(payload.contains("ENCODING=QUOTED-PRINTABLE"), "{payload}");
    assert!(payload.contains("TEL;CELL:13800000000"), "{payload}");
}

#[test]
fn test_without_qr_only_background_is_drawn() {
    let card = BizCard::default();
    let canvas = card.render(40, 30, Placement::default(), None);
    assert!(canvas.pixels().all(|p| *p == FALLBACK_BACKGROUND));
}

#[test]
fn test_drag_then_export_to_directory() {
    let mut card = card_with_background();
    card.regenerate().expect("regenerate");

    let canvas_size = CanvasSize::new(300, 500);
    let mut gestures = GestureController::default();
    let mut touches = TouchTracker::new();
    gestures.set_locked(false);
    gestures.handle(&mut touches, TouchPhase::Start, 7, 200.0, 300.0, canvas_size);
    gestures.handle(&mut touches, TouchPhase::Move, 7, 140.0, 200.0, canvas_size);
    gestures.handle(&mut touches, TouchPhase::End, 7, 140.0, 200.0, canvas_size);

    let placement = gestures.placement();
    assert!((placement.x - 0.55).abs() < 1e-4, "{placement:?}");
    assert!((placement.y - 0.50).abs() < 1e-4, "{placement:?}");

    let canvas = card.render(300, 500, placement, None);
    let png = encode_png(&canvas).expect("encode");

    let dir = tempfile::tempdir().expect("tempdir");
    let mut exporter = DirectoryExporter::new(dir.path());
    let now = chrono::DateTime::from_timestamp_millis(1_700_000_000_000).expect("timestamp");
    let name = export_file_name(now);
    let outcome = export(&mut exporter, &png, &name).expect("export");

    let expected = dir.path().join("bizcard_1700000000000.png");
    assert_eq!(outcome, ExportOutcome::Downloaded(expected.clone()));
    let saved = image::open(&expected).expect("saved png").to_rgba8();
    assert_eq!(saved, canvas);
}
