use std::fs;
use std::path::PathBuf;

use memeify::{Color, FontChoice, Meme, Style};
use spectral::prelude::*;

use crate::NAME;
use super::{parse_from_argv, ArgsError, Stream};


#[test]
fn no_args() {
    assert_that!(parse_from_argv(Vec::<&str>::new())).is_err();
    assert_that!(parse_from_argv(vec![*NAME])).is_err();
}

#[test]
fn just_image() {
    let opts = parse_from_argv(vec![*NAME, "doge.jpg"]).unwrap();
    assert_eq!(Stream::File(PathBuf::from("doge.jpg")), opts.image);
    assert_eq!(Stream::File(PathBuf::from("custom_meme.png")), opts.output);
    assert_eq!(PathBuf::from("data/fonts"), opts.font_directory);
    assert_eq!(None, opts.mime);
    assert_eq!(0, opts.verbosity);
    assert_eq!(Meme::default(), opts.meme);
}

#[test]
fn standard_streams() {
    let opts = parse_from_argv(vec![*NAME, "-", "-o", "-"]).unwrap();
    assert!(opts.image.is_standard());
    assert!(opts.output.is_standard());
}

#[test]
fn texts_are_uppercased() {
    let opts = parse_from_argv(vec![
        *NAME, "doge.jpg", "--top", "such caption", "--bottom", "very wow"]).unwrap();
    assert_eq!("SUCH CAPTION", opts.meme.top.text);
    assert_eq!("VERY WOW", opts.meme.bottom.text);
}

#[test]
fn full_styling() {
    let opts = parse_from_argv(vec![
        *NAME, "doge.jpg",
        "--top-size", "60", "--top-color", "#ff0000", "--top-font", "comic sans",
        "--top-x", "-20", "--top-y", "0",
        "--bottom-size", "100", "--bottom-color", "0x00ff00", "--bottom-font", "Impact",
        "--bottom-x", "300", "--bottom-y", "300",
    ]).unwrap();

    let top = &opts.meme.top;
    assert_eq!("TOP TEXT", top.text);
    assert_eq!(60, top.font_size);
    assert_eq!(Color(255, 0, 0), top.color);
    assert_eq!(FontChoice::ComicSans, top.font);
    assert_eq!(-20, top.x_offset);
    assert_eq!(0, top.y_offset);

    let bottom = &opts.meme.bottom;
    assert_eq!(100, bottom.font_size);
    assert_eq!(Color(0, 255, 0), bottom.color);
    assert_eq!(FontChoice::Impact, bottom.font);
    assert_eq!((300, 300), (bottom.x_offset, bottom.y_offset));
}

#[test]
fn invalid_values() {
    for &(flag, value) in &[("--top-size", "big"), ("--top-color", "#zzzzzz"),
                            ("--bottom-font", "Papyrus"), ("--bottom-y", "-5.5"),
                            ("--mime", "not a mime")] {
        match parse_from_argv(vec![*NAME, "doge.jpg", flag, value]) {
            Err(ArgsError::Parse(_)) => {},
            other => panic!("expected parse error for {} {}, got {:?}", flag, value, other),
        }
    }
}

#[test]
fn out_of_bounds_values() {
    for &(flag, value) in &[("--top-size", "19"), ("--bottom-size", "101"),
                            ("--top-x", "-301"), ("--bottom-x", "301"), ("--top-y", "301")] {
        match parse_from_argv(vec![*NAME, "doge.jpg", flag, value]) {
            Err(ArgsError::Style(_)) => {},
            other => panic!("expected style error for {} {}, got {:?}", flag, value, other),
        }
    }
}

#[test]
fn verbosity() {
    assert_eq!(2, parse_from_argv(vec![*NAME, "-vv", "doge.jpg"]).unwrap().verbosity);
    assert_eq!(-1, parse_from_argv(vec![*NAME, "-q", "doge.jpg"]).unwrap().verbosity);
    assert_that!(parse_from_argv(vec![*NAME, "-v", "-q", "doge.jpg"])).is_err();
}

#[test]
fn resources() {
    let opts = parse_from_argv(vec![
        *NAME, "doge", "--mime", "image/jpeg", "--fonts", "/usr/share/fonts"]).unwrap();
    assert_eq!(Some(mime::IMAGE_JPEG), opts.mime);
    assert_eq!(PathBuf::from("/usr/share/fonts"), opts.font_directory);
}

#[test]
fn json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("meme.json");
    fs::write(&path, r#"{"top": "one does not simply", "bottom": {"text": "walk", "size": 50}}"#)
        .unwrap();

    let opts = parse_from_argv(vec![
        *NAME, "boromir.png", "--json", path.to_str().unwrap()]).unwrap();
    assert_eq!("ONE DOES NOT SIMPLY", opts.meme.top.text);
    let mut bottom = Style::bottom().with_text("WALK");
    bottom.font_size = 50;
    assert_eq!(bottom, opts.meme.bottom);
}

#[test]
fn json_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("meme.json");
    let path_arg = path.to_str().unwrap();

    match parse_from_argv(vec![*NAME, "boromir.png", "--json", path_arg]) {
        Err(ArgsError::Io(_)) => {},
        other => panic!("expected I/O error, got {:?}", other),
    }

    fs::write(&path, r#"{"top": {"txet": "typo"}}"#).unwrap();
    match parse_from_argv(vec![*NAME, "boromir.png", "--json", path_arg]) {
        Err(ArgsError::Json(_)) => {},
        other => panic!("expected JSON error, got {:?}", other),
    }

    fs::write(&path, r#"{"bottom": {"size": 10}}"#).unwrap();
    match parse_from_argv(vec![*NAME, "boromir.png", "--json", path_arg]) {
        Err(ArgsError::Style(_)) => {},
        other => panic!("expected style error, got {:?}", other),
    }
}

#[test]
fn json_conflicts() {
    assert_that!(parse_from_argv(vec![
        *NAME, "boromir.png", "--json", "meme.json", "--top", "text"])).is_err();
    match parse_from_argv(vec![*NAME, "-", "--json", "-"]) {
        Err(ArgsError::Parse(_)) => {},
        other => panic!("expected parse error, got {:?}", other),
    }
}
