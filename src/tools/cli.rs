use clap::Parser;
use log::{info, LevelFilter};
use std::{fmt::Display, fmt::Formatter};

use crate::error::KzipError;

/// Extension of every kzip container.
pub const EXTENSION: &str = ".kzip";
/// Prefix given to the file name of decompressed output.
pub const DECOMPRESSED_PREFIX: &str = "DECOMPRESSED_";

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "kzip, a static huffman file compressor",
    long_about = None)]
pub struct Args {
    /// Compress FILE, writing FILE.kzip
    #[clap(
        short = 'c',
        long = "compress",
        value_name = "FILE",
        conflicts_with = "decompress",
        required_unless_present = "decompress"
    )]
    compress: Option<String>,

    /// Decompress FILE.kzip, writing DECOMPRESSED_FILE
    #[clap(short = 'd', long = "decompress", value_name = "FILE")]
    decompress: Option<String>,

    /// Sets verbosity. -v0 is silent, -v5 is chatty
    #[clap(short = 'v', long = "verbosity", default_value_t = 1)]
    verbosity: u8,
}

/// Zip, Unzip
#[derive(Debug, PartialEq, Eq)]
pub enum Mode {
    Zip,
    Unzip,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug)]
pub struct KzOpts {
    /// Compress/Decompress
    pub op_mode: Mode,
    /// Name of the file to read for input
    pub file: String,
    /// Log level requested on the command line
    pub verbose: LevelFilter,
}

impl KzOpts {
    /// Build options from an argument list (program name first).
    pub fn try_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let args = Args::try_parse_from(args)?;
        let (op_mode, file) = match (args.compress, args.decompress) {
            (Some(file), _) => (Mode::Zip, file),
            (None, Some(file)) => (Mode::Unzip, file),
            (None, None) => {
                return Err(clap::Error::raw(
                    clap::ErrorKind::MissingRequiredArgument,
                    "one of --compress or --decompress is required\n",
                ))
            }
        };
        let verbose = match args.verbosity {
            0 => LevelFilter::Off,
            1 => LevelFilter::Error,
            2 => LevelFilter::Warn,
            3 => LevelFilter::Info,
            4 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };
        Ok(Self {
            op_mode,
            file,
            verbose,
        })
    }

    /// Name of the file this run writes.
    pub fn output_name(&self) -> Result<String, KzipError> {
        match self.op_mode {
            Mode::Zip => Ok(compressed_name(&self.file)),
            Mode::Unzip => decompressed_name(&self.file),
        }
    }
}

/// Parse the command line and set the log level. Usage errors print and exit with 1;
/// --help and --version print and exit with 0.
pub fn kzopts_init() -> KzOpts {
    let cli = match KzOpts::try_from_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            std::process::exit(1);
        }
        Err(e) => e.exit(),
    };

    // Set the log level
    log::set_max_level(cli.verbose);

    info!("---- kzip Initialization Start ----");
    info!("Verbosity set to {}", log::max_level());
    info!("Operational mode set to {}", cli.op_mode);
    info!("Getting input from the file {}", cli.file);
    info!("---- kzip Initialization End ----\n");
    cli
}

/// path.kzip
pub fn compressed_name(path: &str) -> String {
    format!("{}{}", path, EXTENSION)
}

/// dir/name.kzip -> dir/DECOMPRESSED_name. Fails unless the path ends in .kzip
/// with a file name in front of it.
pub fn decompressed_name(path: &str) -> Result<String, KzipError> {
    let stripped = path
        .strip_suffix(EXTENSION)
        .ok_or_else(|| KzipError::BadExtension(path.to_string()))?;
    let split = stripped
        .rfind(|c: char| c == '/' || c == std::path::MAIN_SEPARATOR)
        .map_or(0, |i| i + 1);
    let (dir, name) = stripped.split_at(split);
    if name.is_empty() {
        return Err(KzipError::BadExtension(path.to_string()));
    }
    Ok(format!("{}{}{}", dir, DECOMPRESSED_PREFIX, name))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn compress_args_test() {
        let opts = KzOpts::try_from_args(["kzip", "-c", "notes.txt"]).unwrap();
        assert_eq!(opts.op_mode, Mode::Zip);
        assert_eq!(opts.file, "notes.txt");
        assert_eq!(opts.verbose, LevelFilter::Error);
        assert_eq!(opts.output_name().unwrap(), "notes.txt.kzip");
    }

    #[test]
    fn decompress_args_test() {
        let opts = KzOpts::try_from_args(["kzip", "-d", "notes.txt.kzip", "-v", "4"]).unwrap();
        assert_eq!(opts.op_mode, Mode::Unzip);
        assert_eq!(opts.verbose, LevelFilter::Debug);
        assert_eq!(opts.output_name().unwrap(), "DECOMPRESSED_notes.txt");
    }

    #[test]
    fn usage_error_test() {
        assert!(KzOpts::try_from_args(["kzip"]).is_err());
        assert!(KzOpts::try_from_args(["kzip", "notes.txt"]).is_err());
        assert!(KzOpts::try_from_args(["kzip", "-x", "notes.txt"]).is_err());
        assert!(KzOpts::try_from_args(["kzip", "-c", "a", "-d", "b.kzip"]).is_err());
    }

    #[test]
    fn decompressed_name_test() {
        assert_eq!(
            decompressed_name("dir/sub/file.bin.kzip").unwrap(),
            "dir/sub/DECOMPRESSED_file.bin"
        );
        assert!(matches!(
            decompressed_name("file.zip"),
            Err(KzipError::BadExtension(_))
        ));
        assert!(matches!(
            decompressed_name("dir/.kzip"),
            Err(KzipError::BadExtension(_))
        ));
    }
}
