//! Data structures for command-line arguments.

use std::convert::TryFrom;
use std::fmt::Display;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::PathBuf;
use std::str::FromStr;

use clap::{self, ArgMatches};
use memeify::{Meme, MemeError, Side, Style};
use mime::Mime;
use thiserror::Error;

use super::parser::{CaptionFlags, ARG_IMAGE, OPT_FONTS, OPT_JSON, OPT_MIME,
                    OPT_OUTPUT, OPT_QUIET, OPT_VERBOSE};


/// Where a file is read from, or written to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Stream {
    /// Standard input or output.
    Standard,
    File(PathBuf),
}

impl Stream {
    fn from_arg(value: &str) -> Self {
        match value.trim() {
            "-" => Stream::Standard,
            path => Stream::File(PathBuf::from(path)),
        }
    }

    #[inline]
    pub fn is_standard(&self) -> bool {
        *self == Stream::Standard
    }
}


/// Structure to hold options received from the command line.
#[derive(Clone, Debug, PartialEq)]
pub struct Options {
    /// Verbosity of the logging output.
    ///
    /// Corresponds to the number of times the -v flag has been passed.
    /// If -q has been used instead, this will be negative.
    pub verbosity: isize,

    /// The meme to create.
    pub meme: Meme,
    /// Source image of the meme.
    pub image: Stream,
    /// Declared MIME type of the source image.
    pub mime: Option<Mime>,
    /// Where to write the finished meme to.
    pub output: Stream,
    /// Directory to load the fonts from.
    pub font_directory: PathBuf,
}

#[allow(dead_code)]
impl Options {
    #[inline]
    pub fn verbose(&self) -> bool { self.verbosity > 0 }
    #[inline]
    pub fn quiet(&self) -> bool { self.verbosity < 0 }
}

impl<'a> TryFrom<ArgMatches<'a>> for Options {
    type Error = ArgsError;

    fn try_from(matches: ArgMatches<'a>) -> Result<Self, Self::Error> {
        let verbose_count = matches.occurrences_of(OPT_VERBOSE) as isize;
        let quiet_count = matches.occurrences_of(OPT_QUIET) as isize;
        let verbosity = verbose_count - quiet_count;

        let image = Stream::from_arg(matches.value_of(ARG_IMAGE).unwrap_or("-"));
        let mime = parse_value(&matches, OPT_MIME)?;
        let output = Stream::from_arg(matches.value_of(OPT_OUTPUT).unwrap_or("-"));
        let font_directory = PathBuf::from(
            matches.value_of(OPT_FONTS).unwrap_or(memeify::DEFAULT_FONT_DIRECTORY));

        let meme = match matches.value_of(OPT_JSON).map(Stream::from_arg) {
            Some(json) => {
                if json.is_standard() && image.is_standard() {
                    return Err(ArgsError::Parse(clap::Error::with_description(
                        "the image and --json cannot both be read from standard input",
                        clap::ErrorKind::ArgumentConflict)));
                }
                read_json(&json)?
            }
            None => {
                let mut meme = Meme::default();
                for &side in Side::all() {
                    *meme.caption_mut(side) = parse_style(&matches, side)?;
                }
                meme
            }
        };
        let meme = meme.uppercased();
        meme.validate()?;

        Ok(Options{verbosity, meme, image, mime, output, font_directory})
    }
}

/// Parse the flags styling a caption at given side of the meme.
/// Styling not given explicitly is left at its default.
fn parse_style(matches: &ArgMatches, side: Side) -> Result<Style, ArgsError> {
    let flags = CaptionFlags::for_side(side);
    let mut style = match side {
        Side::Top => Style::top(),
        Side::Bottom => Style::bottom(),
    };
    if let Some(text) = matches.value_of(flags.text) {
        style.text = text.to_owned();
    }
    if let Some(size) = parse_value(matches, flags.size)? {
        style.font_size = size;
    }
    if let Some(color) = parse_value(matches, flags.color)? {
        style.color = color;
    }
    if let Some(font) = parse_value(matches, flags.font)? {
        style.font = font;
    }
    if let Some(x) = parse_value(matches, flags.x)? {
        style.x_offset = x;
    }
    if let Some(y) = parse_value(matches, flags.y)? {
        style.y_offset = y;
    }
    Ok(style)
}

/// Parse the value of an optional flag.
fn parse_value<T>(matches: &ArgMatches, name: &str) -> Result<Option<T>, ArgsError>
    where T: FromStr, T::Err: Display
{
    match matches.value_of(name) {
        Some(value) => value.trim().parse().map(Some).map_err(|e| {
            ArgsError::Parse(clap::Error::with_description(
                &format!("invalid value for --{}: {}", name, e),
                clap::ErrorKind::InvalidValue))
        }),
        None => Ok(None),
    }
}

/// Read the whole `Meme` as JSON.
fn read_json(stream: &Stream) -> Result<Meme, ArgsError> {
    let reader: Box<dyn Read> = match *stream {
        Stream::Standard => Box::new(io::stdin()),
        Stream::File(ref path) => Box::new(File::open(path)?),
    };
    let meme = serde_json::from_reader(BufReader::new(reader))?;
    Ok(meme)
}


/// Error that can occur while parsing of command line arguments.
#[derive(Debug, Error)]
pub enum ArgsError {
    /// General error when parsing the arguments.
    #[error("invalid arguments: {0}")]
    Parse(#[from] clap::Error),
    /// Caption style outside of the accepted bounds.
    #[error("{0}")]
    Style(#[from] MemeError),
    /// Meme --json parsing error.
    #[error("meme JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Meme --json file couldn't be read.
    #[error("cannot read meme JSON: {0}")]
    Io(#[from] io::Error),
}
