//!
//! memeify -- Top text, bottom text, in the shell
//!

#[macro_use] extern crate clap;
#[macro_use] extern crate lazy_static;
#[macro_use] extern crate log;


mod args;
mod logging;


use std::env;
use std::fs::File;
use std::io::{self, Read, Write};
use std::process::exit;

use memeify::{CaptionError, Engine, EngineBuilder, ImageSource, Meme, RenderedMeme};

use crate::args::{ArgsError, Options, Stream};


lazy_static! {
    /// Application name, as filled out by Cargo.
    static ref NAME: &'static str = option_env!("CARGO_BIN_NAME").unwrap_or("memeify");

    /// Application version, as filled out by Cargo.
    static ref VERSION: Option<&'static str> = option_env!("CARGO_PKG_VERSION");
}


fn main() {
    let opts = args::parse().unwrap_or_else(|e| {
        let code = print_args_error(&e);
        exit(code);
    });

    let _guard = logging::init(opts.verbosity).unwrap_or_else(|e| {
        eprintln!("Failed to initialize logging: {}", e);
        exit(exitcode::SOFTWARE);
    });
    if cfg!(debug_assertions) {
        warn!("Debug mode! The program will likely be much slower.");
    }
    for (i, arg) in env::args().enumerate() {
        debug!("argv[{}] = {:?}", i, arg);
    }
    trace!("Options parsed from argv:\n{:#?}", opts);

    let source = read_source(&opts).unwrap_or_else(|e| {
        error!("Failed to read the source image: {}", e);
        exit(exitcode::NOINPUT);
    });

    let engine = EngineBuilder::new()
        .font_directory(&opts.font_directory)
        .build().unwrap_or_else(|e| {
            error!("Failed to set up the captioning engine: {}", e);
            exit(exitcode::SOFTWARE);
        });
    let meme = render(&engine, source, &opts.meme).unwrap_or_else(|e| {
        error!("Error while rendering meme: {}", e);
        exit(if e.is_decode() { exitcode::DATAERR } else { exitcode::UNAVAILABLE });
    });

    let output: Box<dyn Write> = match opts.output {
        Stream::File(ref path) => {
            trace!("Opening --output file {}...", path.display());
            let file = File::create(path).unwrap_or_else(|e| {
                error!("Failed to open output file {} for writing: {}", path.display(), e);
                exit(exitcode::CANTCREAT);
            });
            debug!("File {} opened successfully", path.display());
            Box::new(file)
        }
        Stream::Standard => {
            trace!("Writing the meme to standard output");
            if isatty::stdout_isatty() {
                warn!("Standard output is a terminal.");
            }
            Box::new(io::stdout())
        }
    };
    write_output(&meme, output).unwrap_or_else(|e| {
        error!("Failed to write the meme: {}", e);
        exit(exitcode::IOERR);
    });
}

/// Print an error that may occur while parsing arguments.
/// Returns the exit code for the program.
fn print_args_error(e: &ArgsError) -> exitcode::ExitCode {
    match *e {
        // Help and version "errors" aren't really errors.
        ArgsError::Parse(ref e) if !e.use_stderr() => {
            println!("{}", e.message);
            exitcode::OK
        }
        // In case of generic parse error,
        // message provided by the clap library will be the usage string.
        ArgsError::Parse(ref e) => {
            eprintln!("{}", e.message);
            exitcode::USAGE
        }
        ref e => {
            eprintln!("Failed to parse arguments: {}", e);
            exitcode::USAGE
        }
    }
}


/// Read the source image given on the command line.
fn read_source(opts: &Options) -> io::Result<ImageSource> {
    let source = match opts.image {
        Stream::File(ref path) => ImageSource::from_path(path)?,
        Stream::Standard => {
            trace!("Reading the source image from standard input...");
            let mut bytes = vec![];
            io::stdin().read_to_end(&mut bytes)?;
            debug!("Read {} bytes of source image from standard input", bytes.len());
            ImageSource::new(bytes)
        }
    };
    Ok(match opts.mime {
        Some(ref mime) => source.with_mime(mime.clone()),
        None => source,
    })
}

/// Render given `Meme` over the source image.
fn render(engine: &Engine, source: ImageSource, meme: &Meme) -> Result<RenderedMeme, CaptionError> {
    trace!("Rendering meme {:#?} over {:?}", meme, source);
    let rendered = engine.caption(source, meme)?;
    let (width, height) = rendered.dimensions();
    debug!("Rendered {}x{} meme into {} bytes", width, height, rendered.len());
    Ok(rendered)
}

fn write_output<W: Write>(meme: &RenderedMeme, mut output: W) -> io::Result<()> {
    output.write_all(meme.bytes())?;
    output.flush()
}
