/// Writes a textual bitstream. Every bit is one character, '0' or '1'; nothing is packed
/// and there is no header.
#[derive(Debug, Default, Clone)]
pub struct BitWriter {
    /// Output buffer holding the bitstream text.
    pub output: String,
}

impl BitWriter {
    /// Create a new BitWriter with room for `capacity` bits.
    pub fn new(capacity: usize) -> Self {
        Self {
            output: String::with_capacity(capacity),
        }
    }

    /// Put one bit on the stream.
    pub fn out_bit(&mut self, bit: bool) {
        self.output.push(if bit { '1' } else { '0' });
    }

    /// Put a whole code (already a string of '0' and '1') on the stream.
    pub fn out_code(&mut self, code: &str) {
        self.output.push_str(code);
    }

    /// Number of bits written so far. One bit is one ASCII byte.
    pub fn len(&self) -> usize {
        self.output.len()
    }

    pub fn is_empty(&self) -> bool {
        self.output.is_empty()
    }

    /// Debugging function. Report current position in the stream.
    pub fn loc(&self) -> String {
        format!("[{}]", self.output.len())
    }

    pub fn into_string(self) -> String {
        self.output
    }
}
