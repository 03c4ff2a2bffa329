//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::fs;
use std::process::ExitCode;

use log::{error, info, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};

use kzip::tools::cli::{kzopts_init, KzOpts, Mode};
use kzip::{compress, decompress, KzipError};

fn main() -> ExitCode {
    // Available log levels are Error, Warn, Info, Debug, Trace
    if TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .is_err()
    {
        eprintln!("Unable to start the terminal logger.");
    }

    let options = kzopts_init();

    //----- Figure how what we need to do and go do it
    match run(&options) {
        Ok(()) => {
            info!("Done.\n");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Read the input file, run the requested transform, and write the result.
fn run(opts: &KzOpts) -> Result<(), KzipError> {
    // Check the name first so a bad extension fails before any I/O
    let out_name = opts.output_name()?;
    let input = fs::read(&opts.file)?;
    let output = match opts.op_mode {
        Mode::Zip => compress(&input),
        Mode::Unzip => decompress(&input)?,
    };
    fs::write(&out_name, &output)?;
    info!(
        "{} {} ({} bytes) into {} ({} bytes).",
        opts.op_mode,
        opts.file,
        input.len(),
        out_name,
        output.len()
    );
    Ok(())
}
