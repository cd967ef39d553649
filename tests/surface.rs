use cairo::{Context, ImageSurface};
use cezi::draw::{Point, StrokeStyle, Surface, render};
use cezi::util::Bounds;

fn surface_with_context(width: i32, height: i32) -> (ImageSurface, Context) {
    let surface = ImageSurface::create(cairo::Format::ARgb32, width, height).unwrap();
    let ctx = Context::new(&surface).unwrap();
    (surface, ctx)
}

fn surface_has_pixels(surface: &mut ImageSurface) -> bool {
    surface
        .data()
        .map(|data| data.iter().any(|byte| *byte != 0))
        .unwrap_or(false)
}

fn stroke(surface: &mut Surface, from: Point, to: Point) {
    surface.begin(from);
    assert!(surface.extend(to).unwrap());
    surface.end();
}

/// Decodes a snapshot and returns (width, height, pixel lookup as RGBA).
fn decode(png: &[u8]) -> (i32, i32, impl Fn(i32, i32) -> [u8; 4] + use<>) {
    let mut image = ImageSurface::create_from_png(&mut &png[..]).unwrap();
    let (width, height, stride) = (image.width(), image.height(), image.stride());
    let data = image.data().unwrap().to_vec();
    let pixel = move |x: i32, y: i32| {
        let offset = (y * stride + x * 4) as usize;
        // ARGB32 is stored as native-endian u32: B, G, R, A on little-endian
        let value = u32::from_ne_bytes([
            data[offset],
            data[offset + 1],
            data[offset + 2],
            data[offset + 3],
        ]);
        [
            (value >> 16) as u8,
            (value >> 8) as u8,
            value as u8,
            (value >> 24) as u8,
        ]
    };
    (width, height, pixel)
}

#[test]
fn render_segment_draws_pixels() {
    let (mut surface, ctx) = surface_with_context(200, 100);
    render::render_segment(
        &ctx,
        Point::new(10.0, 10.0),
        Point::new(150.0, 80.0),
        &StrokeStyle::default(),
    )
    .unwrap();
    drop(ctx);
    assert!(surface_has_pixels(&mut surface));
}

#[test]
fn begin_without_extend_draws_nothing() {
    let mut surface = Surface::new(Bounds::new(0.0, 0.0, 50.0, 50.0), 1.0).unwrap();
    let blank = surface.snapshot_png().unwrap();
    surface.begin(Point::new(5.0, 5.0));
    surface.end();
    assert!(!surface.has_content());
    assert_eq!(surface.snapshot_png().unwrap(), blank);
}

#[test]
fn snapshot_contains_ink_stroke_on_opaque_background() {
    let mut surface = Surface::new(Bounds::new(0.0, 0.0, 100.0, 100.0), 2.0).unwrap();
    stroke(&mut surface, Point::new(10.0, 10.0), Point::new(90.0, 10.0));

    let (width, height, pixel) = decode(&surface.snapshot_png().unwrap());
    assert_eq!((width, height), (200, 200));
    // Logical (50, 10) lies on the stroke centre line
    assert_eq!(pixel(100, 20), [0x1a, 0x10, 0x25, 0xff]);
    assert_eq!(pixel(190, 190), [0xff, 0xff, 0xff, 0xff]);
}

#[test]
fn cleared_snapshot_matches_blank_snapshot() {
    let mut surface = Surface::new(Bounds::new(0.0, 0.0, 64.0, 48.0), 1.0).unwrap();
    let blank = surface.snapshot().unwrap();

    stroke(&mut surface, Point::new(0.0, 0.0), Point::new(64.0, 48.0));
    assert_ne!(surface.snapshot().unwrap(), blank);

    surface.clear().unwrap();
    assert_eq!(surface.snapshot().unwrap(), blank);
}

#[test]
fn encoded_snapshot_round_trips_through_data_uri() {
    let surface = Surface::new(Bounds::new(0.0, 0.0, 10.0, 10.0), 1.0).unwrap();
    let image = surface.snapshot().unwrap();
    let restored = cezi::draw::EncodedImage::from_base64(&image.data_uri());
    assert_eq!(restored, image);
    assert_eq!(restored.to_png().unwrap(), surface.snapshot_png().unwrap());
}
