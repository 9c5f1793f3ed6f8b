//! Byte source and byte sink for the orchestration layer.
//!
//! Text is read whole and decoded as UTF-8, so multi-byte characters arrive as single
//! symbols. Writes replace whatever the sink held before. The path "-" means stdin/stdout.

use std::fs;
use std::io::{self, Read, Write};

use log::debug;

/// Path that selects the standard streams.
pub const STD_STREAM: &str = "-";

/// Read the entire text from `path`. Invalid UTF-8 is reported as an I/O error.
pub fn read_all(path: &str) -> io::Result<String> {
    let text = if path == STD_STREAM {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        text
    } else {
        fs::read_to_string(path)?
    };
    debug!("Read {} bytes from {}", text.len(), path);
    Ok(text)
}

/// Write `content` to `path`, fully overwriting any existing file.
pub fn write_all(path: &str, content: &str) -> io::Result<()> {
    if path == STD_STREAM {
        let mut out = io::stdout().lock();
        out.write_all(content.as_bytes())?;
        out.flush()?;
    } else {
        fs::write(path, content)?;
    }
    debug!("Wrote {} bytes to {}", content.len(), path);
    Ok(())
}
