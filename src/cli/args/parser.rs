//! Module defining the command line parser.

use std::fmt::Display;
use std::str::FromStr;

use clap::{self, AppSettings, Arg};
use memeify::{Color, FontChoice, Side, DEFAULT_FONT_DIRECTORY, DOWNLOAD_FILE_NAME};

use crate::{NAME, VERSION};


/// Type of the argument parser object
/// (which is called an "App" in clap's silly nomenclature).
pub type Parser<'p> = clap::App<'p, 'p>;


lazy_static! {
    static ref ABOUT: &'static str = option_env!("CARGO_PKG_DESCRIPTION").unwrap_or("");
}

pub const ARG_IMAGE: &str = "image";
pub const OPT_OUTPUT: &str = "output";
pub const OPT_JSON: &str = "json";
pub const OPT_MIME: &str = "mime";
pub const OPT_FONTS: &str = "fonts";
pub const OPT_VERBOSE: &str = "verbose";
pub const OPT_QUIET: &str = "quiet";

/// Names & help strings of the flags that style a single caption.
#[derive(Debug)]
pub struct CaptionFlags {
    pub text: &'static str,
    pub size: &'static str,
    pub color: &'static str,
    pub font: &'static str,
    pub x: &'static str,
    pub y: &'static str,
    help: [&'static str; 6],
}

impl CaptionFlags {
    pub fn for_side(side: Side) -> &'static CaptionFlags {
        match side {
            Side::Top => &TOP_CAPTION,
            Side::Bottom => &BOTTOM_CAPTION,
        }
    }

    fn all(&self) -> [&'static str; 6] {
        [self.text, self.size, self.color, self.font, self.x, self.y]
    }
}

macro_rules! caption_flags {
    ($side:literal) => {
        CaptionFlags{
            text: $side,
            size: concat!($side, "-size"),
            color: concat!($side, "-color"),
            font: concat!($side, "-font"),
            x: concat!($side, "-x"),
            y: concat!($side, "-y"),
            help: [
                concat!("Text of the ", $side, " caption (uppercased)"),
                concat!("Font size of the ", $side, " caption (20-100)"),
                concat!("Text color of the ", $side, " caption (like #ffffff)"),
                concat!("Font of the ", $side, " caption (Impact, Arial, Comic Sans)"),
                concat!("Horizontal offset of the ", $side, " caption (-300 to 300)"),
                concat!("Vertical offset of the ", $side, " caption from the image edge (0-300)"),
            ],
        }
    };
}

const TOP_CAPTION: CaptionFlags = caption_flags!("top");
const BOTTOM_CAPTION: CaptionFlags = caption_flags!("bottom");


/// Create the parser for application's command line.
#[allow(unknown_lints, dangerous_implicit_autorefs)]
pub fn create_parser<'p>() -> Parser<'p> {
    let mut parser = Parser::new(*NAME);
    if let Some(version) = *VERSION {
        parser = parser.version(version);
    }
    parser = parser
        .about(*ABOUT)
        .author(crate_authors!(", "))

        .setting(AppSettings::StrictUtf8)

        .setting(AppSettings::UnifiedHelpMessage)
        .setting(AppSettings::DontCollapseArgsInUsage)
        .setting(AppSettings::DeriveDisplayOrder)

        // Source image.
        .arg(Arg::with_name(ARG_IMAGE)
            .value_name("IMAGE")
            .required(true)
            .help("Image to put the captions on")
            .long_help(concat!(
                "Path to the JPEG or PNG image to put the captions on.\n\n",
                "When set to `-` (single dash), the image is read from standard input.")))

        // Output flags.
        .arg(Arg::with_name(OPT_OUTPUT)
            .long("output").short("o")
            .value_name("PATH")
            .default_value(DOWNLOAD_FILE_NAME)
            .help("File to write the meme to")
            .long_help(concat!(
                "What file should the final PNG image be written to.\n\n",
                "When this flag is set to `-` (single dash), the image is written ",
                "to standard output so it can be e.g. piped to the ImageMagick `display` program.")));

    // Caption flags.
    for &side in Side::all() {
        parser = add_caption_args(parser, side);
    }

    let styling_args: Vec<&'static str> = Side::all().iter()
        .flat_map(|&s| CaptionFlags::for_side(s).all().to_vec())
        .collect();
    parser
        .arg(Arg::with_name(OPT_JSON)
            .long("json")
            .value_name("PATH")
            .conflicts_with_all(&styling_args)
            .help("Read the captions from a JSON file")
            .long_help(concat!(
                "Read the whole meme description (both captions and their styles) ",
                "from a JSON file, or standard input if set to `-` (single dash).\n\n",
                "Example: {\"top\": \"ONE DOES NOT SIMPLY\", ",
                "\"bottom\": {\"text\": \"WALK INTO MORDOR\", \"font\": \"Impact\", \"size\": 50}}")))

        // Resource flags.
        .arg(Arg::with_name(OPT_MIME)
            .long("mime")
            .value_name("TYPE")
            .validator(validate::<mime::Mime>)
            .help("MIME type of the source image (default: detected)"))
        .arg(Arg::with_name(OPT_FONTS)
            .long("fonts")
            .value_name("DIR")
            .default_value(DEFAULT_FONT_DIRECTORY)
            .help("Directory with the font files")
            .long_help(concat!(
                "Directory to load the font files from: impact.ttf, arial.ttf, and comic.ttf.\n\n",
                "Fonts that are missing from it are replaced with a built-in one.")))

        // Verbosity flags.
        .arg(Arg::with_name(OPT_VERBOSE)
            .long("verbose").short("v")
            .multiple(true)
            .conflicts_with(OPT_QUIET)
            .help("Increase logging verbosity"))
        .arg(Arg::with_name(OPT_QUIET)
            .long("quiet").short("q")
            .multiple(true)
            .conflicts_with(OPT_VERBOSE)
            .help("Decrease logging verbosity"))

        .help_short("H")
        .version_short("V")
}

/// Add the flags styling a caption at given side of the meme.
fn add_caption_args<'p>(parser: Parser<'p>, side: Side) -> Parser<'p> {
    let flags = CaptionFlags::for_side(side);
    parser
        .arg(Arg::with_name(flags.text)
            .long(flags.text)
            .value_name("TEXT")
            .help(flags.help[0]))
        .arg(Arg::with_name(flags.size)
            .long(flags.size)
            .value_name("N")
            .validator(validate::<u32>)
            .help(flags.help[1]))
        .arg(Arg::with_name(flags.color)
            .long(flags.color)
            .value_name("HEX")
            .validator(validate::<Color>)
            .help(flags.help[2]))
        .arg(Arg::with_name(flags.font)
            .long(flags.font)
            .value_name("NAME")
            .validator(validate::<FontChoice>)
            .help(flags.help[3]))
        .arg(Arg::with_name(flags.x)
            .long(flags.x)
            .value_name("N")
            .allow_hyphen_values(true)
            .validator(validate::<i32>)
            .help(flags.help[4]))
        .arg(Arg::with_name(flags.y)
            .long(flags.y)
            .value_name("N")
            .validator(validate::<i32>)
            .help(flags.help[5]))
}

/// Validator for arguments that must parse into given type.
fn validate<T>(value: String) -> Result<(), String>
    where T: FromStr, T::Err: Display
{
    value.trim().parse::<T>().map(|_| ()).map_err(|e| e.to_string())
}
