//! File level operations: encode a text file, decode a bitstream file, or run a round
//! trip self check. Each one rebuilds the code tree from the source text first.

use log::{debug, error, info};

use crate::error::{HuffError, Result};
use crate::tools::cli::{HuffOpts, Mode};
use crate::tools::report::{log_tables, tree_lines, Stats};
use crate::tools::text_io::{read_all, write_all};

use super::codec::Codec;

/// Run whatever `opts.op_mode` asks for.
pub fn run(opts: &HuffOpts) -> Result<()> {
    match opts.op_mode {
        Mode::Encode => encode_file(opts).map(|_| ()),
        Mode::Decode => decode_file(opts).map(|_| ()),
        Mode::Test => self_test(opts).map(|_| ()),
    }
}

/// Read the source and build the codec, logging the tables if requested.
/// The source text is handed back so it need not be read twice.
pub fn load_codec(opts: &HuffOpts) -> Result<(Codec, String)> {
    let source = read_all(&opts.source)?;
    let codec = Codec::from_text(&source, opts.strategy)?;
    if opts.report {
        log_tables(codec.frequencies(), codec.code_book());
    }
    if opts.dump_tree {
        info!("Code tree:");
        tree_lines(codec.tree()).iter().for_each(|line| info!("{}", line));
    }
    Ok((codec, source))
}

/// The text to encode: the source itself unless another input was named.
fn input_text(opts: &HuffOpts, source: String) -> Result<String> {
    if opts.input_path() == opts.source {
        Ok(source)
    } else {
        Ok(read_all(opts.input_path())?)
    }
}

/// Encode the input text and write the bitstream. Returns the size figures.
pub fn encode_file(opts: &HuffOpts) -> Result<Stats> {
    let (codec, source) = load_codec(opts)?;
    let text = input_text(opts, source)?;
    let bits = codec.encode(&text)?;
    let stats = Stats {
        chars: text.chars().count(),
        symbols: codec.code_book().len(),
        bits: bits.len(),
    };
    if let Some(path) = opts.output_path() {
        write_all(path, &bits)?;
        info!("Encoded file {} created successfully!", path);
    }
    info!("{}", stats);
    Ok(stats)
}

/// Decode the input bitstream and write the text. Returns the decoded character count.
pub fn decode_file(opts: &HuffOpts) -> Result<usize> {
    let (codec, _) = load_codec(opts)?;
    let bits = read_all(opts.input_path())?;
    let text = codec.decode(&bits)?;
    let chars = text.chars().count();
    if let Some(path) = opts.output_path() {
        write_all(path, &text)?;
        info!("Decoded file {} created successfully!", path);
    }
    debug!("Decoded {} bits into {} characters", bits.len(), chars);
    Ok(chars)
}

/// Encode the input, decode the result and compare with the original. Writes nothing.
pub fn self_test(opts: &HuffOpts) -> Result<Stats> {
    let (codec, source) = load_codec(opts)?;
    let text = input_text(opts, source)?;
    let bits = codec.encode(&text)?;
    let decoded = codec.decode(&bits)?;
    if let Some(position) = first_difference(&text, &decoded) {
        error!("Round trip failed at character {}", position);
        return Err(HuffError::Mismatch { position });
    }
    let stats = Stats {
        chars: text.chars().count(),
        symbols: codec.code_book().len(),
        bits: bits.len(),
    };
    info!("Round trip ok: {}", stats);
    Ok(stats)
}

/// Character index of the first place the two texts differ, None if they are equal.
fn first_difference(a: &str, b: &str) -> Option<usize> {
    let mut left = a.chars();
    let mut right = b.chars();
    let mut position = 0;
    loop {
        match (left.next(), right.next()) {
            (None, None) => return None,
            (x, y) if x != y => return Some(position),
            _ => position += 1,
        }
    }
}
