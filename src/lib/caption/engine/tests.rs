//! Tests for the captioning engine.

use std::fs;
use std::io::Cursor;
use std::thread;

use image::{ImageFormat, Rgb, RgbImage};
use image::codecs::png::CompressionType;
use rusttype::{point, Scale};
use spectral::prelude::*;
use tempfile::TempDir;

use crate::caption::{CaptionError, ImageSource, OUTLINE_RADIUS};
use crate::model::{Color, FontChoice, Meme, Style};
use crate::resources::{Font, FontLoader};
use super::{Builder, BuildError, Engine};


const BOLD_FONT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../data/fonts/DejaVuSans-Bold.ttf");
const BACKGROUND: Rgb<u8> = Rgb([90, 120, 150]);


/// Font directory containing only the Impact font.
fn font_directory() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::copy(BOLD_FONT, dir.path().join("impact.ttf")).unwrap();
    dir
}

fn source_image(width: u32, height: u32) -> RgbImage {
    RgbImage::from_pixel(width, height, BACKGROUND)
}

fn encode(img: &RgbImage, format: ImageFormat) -> Vec<u8> {
    let mut bytes = Cursor::new(vec![]);
    img.write_to(&mut bytes, format).unwrap();
    bytes.into_inner()
}

fn png_source(width: u32, height: u32) -> ImageSource {
    ImageSource::new(encode(&source_image(width, height), ImageFormat::Png))
        .with_mime(mime::IMAGE_PNG)
}

/// Vertical extent of glyph boxes, relative to the top of the text line.
fn glyph_rows(font: &Font, text: &str, size: u32) -> (i32, i32) {
    let scale = Scale::uniform(size as f32);
    let ascent = font.v_metrics(scale).ascent;
    font.layout(text, scale, point(0.0, ascent))
        .filter_map(|g| g.pixel_bounding_box())
        .fold((i32::MAX, i32::MIN), |(min_y, max_y), bb| (min_y.min(bb.min.y), max_y.max(bb.max.y)))
}

fn inked_rows(img: &RgbImage) -> Vec<u32> {
    (0..img.height())
        .filter(|&y| (0..img.width()).any(|x| *img.get_pixel(x, y) != BACKGROUND))
        .collect()
}


#[test]
fn thread_safe() {
    fn assert_sync<T: Sync>() {}
    fn assert_send<T: Send>() {}

    assert_sync::<Engine>();
    assert_send::<Engine>();
}

#[test]
fn output_has_source_dimensions() {
    let dir = font_directory();
    let engine = Engine::new(dir.path());
    for &(width, height) in &[(600, 400), (123, 457), (1, 1)] {
        let output = engine.caption(png_source(width, height), &Meme::default()).unwrap();
        assert_eq!((width, height), output.dimensions());
        assert_eq!(mime::IMAGE_PNG, output.mime_type());
        assert_eq!("custom_meme.png", output.file_name());

        let decoded = image::load_from_memory(output.bytes()).unwrap();
        assert_eq!((width, height), (decoded.width(), decoded.height()));
    }
}

#[test]
fn captions_are_anchored_to_edges() {
    let dir = font_directory();
    let engine = Engine::new(dir.path());
    let output = engine.caption(png_source(600, 400), &Meme::default()).unwrap();
    let decoded = image::load_from_memory(output.bytes()).unwrap().to_rgb8();
    assert_eq!(output.image(), &decoded);

    let rows = inked_rows(&decoded);
    let top_font = Font::from_bytes("impact", fs::read(BOLD_FONT).unwrap()).unwrap();
    let bottom_font = Font::builtin();  // no Arial in the font directory

    // Top caption line starts at y=6 (10 scaled by 400/600).
    let (top_ink, _) = glyph_rows(&top_font, "TOP TEXT", 40);
    let first = *rows.first().unwrap() as i32;
    let expected_first = 6 + top_ink - OUTLINE_RADIUS;
    assert!(first == expected_first || first == expected_first + 1,
        "top caption starts at row {}, expected {}", first, expected_first);

    // Bottom caption line starts at 400 - 40 - 6 = 354.
    let (_, bottom_ink) = glyph_rows(&bottom_font, "BOTTOM TEXT", 40);
    let last = *rows.last().unwrap() as i32;
    let expected_last = 354 + bottom_ink - 1 + OUTLINE_RADIUS;
    assert!(last == expected_last || last == expected_last - 1,
        "bottom caption ends at row {}, expected {}", last, expected_last);

    // Nothing in between.
    assert_that!(rows.iter().any(|&y| y > 100 && y < 300)).is_false();

    let pixels: Vec<_> = decoded.pixels().cloned().collect();
    assert!(pixels.contains(&Rgb([255, 255, 255])));
    assert!(pixels.contains(&Rgb([0, 0, 0])));
}

#[test]
fn extreme_offsets_push_captions_off_the_image() {
    let dir = font_directory();
    let engine = Engine::new(dir.path());
    let source = encode(&source_image(600, 600), ImageFormat::Png);

    let mut top = Style::top();
    top.x_offset = i32::MAX;
    top.y_offset = i32::MIN;
    let mut bottom = Style::bottom();
    bottom.x_offset = i32::MIN;
    bottom.y_offset = i32::MIN;
    let output = engine.generate_meme(&source, &top, &bottom).unwrap();
    assert_eq!(&source_image(600, 600), output.image());

    let mut top = Style::top();
    top.y_offset = i32::MAX;
    let mut bottom = Style::bottom();
    bottom.y_offset = i32::MAX;
    let output = engine.generate_meme(&source, &top, &bottom).unwrap();
    assert_eq!(&source_image(600, 600), output.image());
}

#[test]
fn custom_colors() {
    let dir = font_directory();
    let engine = Engine::new(dir.path());
    let mut top = Style::top();
    top.color = Color(255, 0, 0);
    let meme = Meme::new(top, Style::bottom().with_text(""));

    let output = engine.caption(png_source(300, 300), &meme).unwrap();
    let pixels: Vec<_> = output.image().pixels().cloned().collect();
    assert!(pixels.contains(&Rgb([255, 0, 0])));
    assert!(!pixels.contains(&Rgb([255, 255, 255])));
}

#[test]
fn empty_captions_leave_image_intact() {
    let dir = font_directory();
    let engine = Engine::new(dir.path());
    let output = engine.caption(png_source(200, 100), &Meme::with_texts("", "")).unwrap();
    assert_eq!(&source_image(200, 100), output.image());
}

#[test]
fn unavailable_fonts_fall_back() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("comic.ttf"), b"not really a font").unwrap();
    let engine = Engine::new(dir.path());

    let mut meme = Meme::default();
    meme.top.font = FontChoice::ComicSans;
    meme.bottom.font = FontChoice::Arial;
    let output = engine.caption(png_source(600, 600), &meme).unwrap();
    assert!(!inked_rows(output.image()).is_empty());
}

#[test]
fn rendering_is_deterministic() {
    let dir = font_directory();
    let engine = Engine::new(dir.path());
    let bytes = encode(&source_image(320, 240), ImageFormat::Png);
    let (top, bottom) = (Style::top(), Style::bottom().with_text("SAME OUTPUT"));

    let first = engine.generate_meme(&bytes, &top, &bottom).unwrap();
    let second = engine.generate_meme(&bytes, &top, &bottom).unwrap();
    assert_eq!(first.bytes(), second.bytes());
}

#[test]
fn jpeg_source() {
    let dir = font_directory();
    let engine = Engine::new(dir.path());
    let bytes = encode(&source_image(160, 90), ImageFormat::Jpeg);

    let output = engine.generate_meme(&bytes, &Style::top(), &Style::bottom()).unwrap();
    assert_eq!((160, 90), output.dimensions());
    let source = ImageSource::new(bytes).with_mime(mime::IMAGE_JPEG);
    assert_that!(engine.caption(source, &Meme::default())).is_ok();
}

#[test]
fn undecodable_source() {
    let engine = Engine::new(font_directory().path());
    match engine.generate_meme(b"GIF89a but not really", &Style::top(), &Style::bottom()) {
        Err(CaptionError::Decode(e)) => assert!(!e.to_string().is_empty()),
        other => panic!("expected decode error, got {:?}", other.map(|_| ())),
    }
    let source = png_source(10, 10).with_mime(mime::APPLICATION_OCTET_STREAM);
    match engine.caption(source, &Meme::default()) {
        Err(CaptionError::UnsupportedType(_)) => {},
        other => panic!("expected unsupported type, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn concurrent_renders_share_fonts() {
    let dir = font_directory();
    let engine = Engine::new(dir.path());
    let bytes = encode(&source_image(200, 200), ImageFormat::Png);

    let handles: Vec<_> = (0..4).map(|_| {
        let engine = engine.clone();
        let bytes = bytes.clone();
        thread::spawn(move || {
            engine.generate_meme(&bytes, &Style::top(), &Style::bottom())
                .unwrap().into_bytes()
        })
    }).collect();
    let outputs: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(outputs.windows(2).all(|w| w[0] == w[1]));

    let cache = engine.font_cache().unwrap();
    assert_eq!(1, cache.len());  // only Impact could be loaded
}

#[test]
fn preload_font() {
    let dir = font_directory();
    let engine = Engine::new(dir.path());
    assert_that!(engine.preload_font(FontChoice::Impact)).is_ok();
    assert_that!(engine.preload_font(FontChoice::Arial)).is_err();

    let cache = engine.font_cache().unwrap();
    assert_eq!(1, cache.len());
    assert_eq!(0, cache.hits());

    engine.caption(png_source(100, 100), &Meme::with_texts("TOP", "")).unwrap();
    assert_eq!(1, engine.font_cache().unwrap().hits());
}

#[test]
fn raw_loader_has_no_cache() {
    let dir = font_directory();
    let engine = Engine::with_raw_loader(FontLoader::new(dir.path()));
    assert_that!(engine.font_cache()).is_none();
    assert_that!(engine.preload_font(FontChoice::Arial)).is_ok();
    assert_that!(engine.caption(png_source(50, 50), &Meme::default())).is_ok();
}

#[test]
fn builder() {
    let dir = font_directory();
    let engine = Builder::new()
        .font_directory(dir.path())
        .font_cache_size(2)
        .font_file(FontChoice::Arial, "impact")
        .png_compression(CompressionType::Best)
        .build().unwrap();
    assert_eq!(2, engine.font_cache().unwrap().capacity());
    assert_eq!("impact", engine.font_catalog().resource_name(FontChoice::Arial));
    assert_eq!(CompressionType::Best, engine.config().png_compression);
    assert_that!(engine.preload_font(FontChoice::Arial)).is_ok();
}

#[test]
fn builder_errors() {
    let dir = font_directory();
    let result = Builder::<FontLoader>::new().build();
    assert_that!(result.map(|_| ())).is_err_containing(BuildError::NoLoader);

    let result = Builder::new()
        .font_directory(dir.path())
        .font_loader(FontLoader::new(dir.path()))
        .build();
    assert_that!(result.map(|_| ())).is_err_containing(BuildError::LoaderBuilderConflict);

    let result = Builder::new()
        .raw_font_loader(FontLoader::new(dir.path()))
        .font_cache_size(8)
        .build();
    assert_that!(result.map(|_| ())).is_err_containing(BuildError::LoaderBuilderConflict);
}

#[test]
fn config_changes_apply_to_later_renders() {
    let dir = font_directory();
    let engine = Engine::new(dir.path());
    let bytes = encode(&source_image(300, 300), ImageFormat::Png);

    let default = engine.generate_meme(&bytes, &Style::top(), &Style::bottom()).unwrap();
    engine.config_mut().png_compression = CompressionType::Best;
    let best = engine.generate_meme(&bytes, &Style::top(), &Style::bottom()).unwrap();

    assert_eq!(CompressionType::Best, engine.config().png_compression);
    assert_eq!(default.image(), best.image());
    let decoded = image::load_from_memory(best.bytes()).unwrap().to_rgb8();
    assert_eq!(default.image(), &decoded);
}
