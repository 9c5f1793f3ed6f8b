use std::{fmt::Display, fmt::Formatter};

use clap::Parser;
use log::{debug, info, LevelFilter};

use crate::huffman_coding::tree::MergeStrategy;

/// Default text the code tree is built from.
pub const DEFAULT_SOURCE: &str = "book.txt";
/// Default bitstream file, written by encode and read by decode.
pub const DEFAULT_ENCODED: &str = "encrypted.txt";
/// Default decoded text file.
pub const DEFAULT_DECODED: &str = "decrypted.txt";

/// Verbosity of user information
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet,
    Errors,
    Warnings,
    Info,
    Debug,
    Trace,
}

impl Verbosity {
    pub fn level_filter(self) -> LevelFilter {
        match self {
            Verbosity::Quiet => LevelFilter::Off,
            Verbosity::Errors => LevelFilter::Error,
            Verbosity::Warnings => LevelFilter::Warn,
            Verbosity::Info => LevelFilter::Info,
            Verbosity::Debug => LevelFilter::Debug,
            Verbosity::Trace => LevelFilter::Trace,
        }
    }
}

/// Encode, Decode, Test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Encode,
    Decode,
    Test,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone)]
pub struct HuffOpts {
    /// Text the code tree is built from. Encoder and decoder must use the same one.
    pub source: String,
    /// Text to encode, or bitstream to decode. None picks the default for the mode.
    pub input: Option<String>,
    /// Where the result goes. None picks the default for the mode.
    pub output: Option<String>,
    /// Encode/Decode/Test
    pub op_mode: Mode,
    /// How the tree builder finds the two lightest nodes
    pub strategy: MergeStrategy,
    /// Log the frequency and code tables
    pub report: bool,
    /// Log an indented dump of the code tree
    pub dump_tree: bool,
    /// Verbosity of user information
    pub verbose: Verbosity,
}

impl HuffOpts {
    pub fn new() -> Self {
        Self {
            source: DEFAULT_SOURCE.to_string(),
            input: None,
            output: None,
            op_mode: Mode::Encode,
            strategy: MergeStrategy::StableResort,
            report: false,
            dump_tree: false,
            verbose: Verbosity::Info,
        }
    }

    /// Input file for the current mode. Encoding reads the source itself unless told otherwise.
    pub fn input_path(&self) -> &str {
        match (&self.input, self.op_mode) {
            (Some(path), _) => path,
            (None, Mode::Decode) => DEFAULT_ENCODED,
            (None, _) => &self.source,
        }
    }

    /// Output file for the current mode. Test mode writes nothing.
    pub fn output_path(&self) -> Option<&str> {
        match (&self.output, self.op_mode) {
            (_, Mode::Test) => None,
            (Some(path), _) => Some(path),
            (None, Mode::Encode) => Some(DEFAULT_ENCODED),
            (None, Mode::Decode) => Some(DEFAULT_DECODED),
        }
    }
}

impl Default for HuffOpts {
    fn default() -> Self {
        Self::new()
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "A symbol-frequency prefix-code text encoder and decoder",
    long_about = "
    Builds a code tree from the character frequencies of a source text, then rewrites
    text as a string of '0' and '1' characters, or turns such a string back into text.

    The encoded file holds no tree. Decoding rebuilds the tree from the same source
    text, so both sides must use an identical source file."
)]
pub struct Args {
    /// Encode the input text (default)
    #[clap(short = 'e', long = "encode", conflicts_with_all = &["decode", "test"])]
    encode: bool,

    /// Decode the input bitstream
    #[clap(short = 'd', long = "decode", conflicts_with = "test")]
    decode: bool,

    /// Encode the source, decode it again and check the result
    #[clap(short = 't', long = "test")]
    test: bool,

    /// Text file the code tree is built from
    #[clap(short = 's', long = "source", default_value = DEFAULT_SOURCE)]
    source: String,

    /// Input file ("-" for stdin). Defaults to the source when encoding, encrypted.txt when decoding
    #[clap(short = 'i', long = "input")]
    input: Option<String>,

    /// Output file ("-" for stdout). Defaults to encrypted.txt or decrypted.txt
    #[clap(short = 'o', long = "output")]
    output: Option<String>,

    /// How the two lightest nodes are picked while building the tree
    #[clap(long = "strategy", value_enum, default_value_t = MergeStrategy::StableResort)]
    strategy: MergeStrategy,

    /// Print the frequency table and the code table
    #[clap(short = 'r', long = "report")]
    report: bool,

    /// Print the code tree
    #[clap(long = "tree")]
    tree: bool,

    /// Be more verbose (-v debug, -vv trace)
    #[clap(short = 'v', long = "verbose", parse(from_occurrences))]
    verbose: u8,

    /// Only report errors
    #[clap(short = 'q', long = "quiet", conflicts_with = "verbose")]
    quiet: bool,
}

impl From<Args> for HuffOpts {
    fn from(args: Args) -> Self {
        let mut opts = HuffOpts::new();
        if args.decode {
            opts.op_mode = Mode::Decode
        };
        if args.test {
            opts.op_mode = Mode::Test
        };
        opts.source = args.source;
        opts.input = args.input;
        opts.output = args.output;
        opts.strategy = args.strategy;
        opts.report = args.report;
        opts.dump_tree = args.tree;
        opts.verbose = match (args.quiet, args.verbose) {
            (true, _) => Verbosity::Errors,
            (false, 0) => Verbosity::Info,
            (false, 1) => Verbosity::Debug,
            (false, _) => Verbosity::Trace,
        };
        opts
    }
}

/// Parse the process arguments. Exits with a usage message on bad arguments.
pub fn huffopts_init() -> HuffOpts {
    HuffOpts::from(Args::parse())
}

/// Report the settings to the user. Call once the logger is up.
pub fn log_settings(opts: &HuffOpts) {
    info!("---- huffcode settings ----");
    info!("Verbosity set to {}", log::max_level());
    info!("Operational mode set to {}", opts.op_mode);
    info!("Building the code tree from {}", opts.source);
    info!("Reading input from {}", opts.input_path());
    match opts.output_path() {
        Some(path) => info!("Writing output to {}", path),
        None => info!("No output file in test mode"),
    }
    debug!("Merge strategy {}", opts.strategy);
}

/// Parse an explicit argument list. The first item is the program name.
pub fn huffopts_from<I, T>(args: I) -> Result<HuffOpts, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Args::try_parse_from(args).map(HuffOpts::from)
}
