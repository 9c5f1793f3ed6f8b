//! Decoder: walk the code tree bit by bit.
//!
//! The cursor starts at the root, takes the left child on '0' and the right child on '1',
//! and on reaching a leaf emits its character and jumps back to the root. The stream is
//! only complete if it ends with the cursor back at the root.

use log::trace;

use crate::bitstream::bitreader::BitReader;
use crate::error::{HuffError, Result};
use crate::huffman_coding::tree::{CodeTree, NodeData};

/// Decode a bitstream produced with this tree's code book.
pub fn decode(bits: &str, tree: &CodeTree) -> Result<String> {
    let root = tree.root();
    let mut br = BitReader::new(bits);
    let mut output = String::with_capacity(bits.len() / 4);

    // A leaf root has no edges. Its character was given the one bit code "0" instead.
    if let NodeData::Leaf(c) = root.node_data {
        while let Some(bit) = br.bool_bit()? {
            if bit {
                return Err(HuffError::InvalidBit {
                    symbol: bit_char(bit),
                    position: br.position() - 1,
                });
            }
            output.push(c);
        }
        return Ok(output);
    }

    let mut node = root;
    let mut depth = 0;
    while let Some(bit) = br.bool_bit()? {
        let next = if bit { node.right() } else { node.left() };
        node = next.ok_or(HuffError::InvalidBit {
            symbol: bit_char(bit),
            position: br.position() - 1,
        })?;
        depth += 1;
        if let Some(c) = node.symbol() {
            output.push(c);
            node = root;
            depth = 0;
        }
    }

    if depth != 0 {
        return Err(HuffError::TruncatedStream {
            position: br.position(),
            depth,
        });
    }
    trace!("Decoded {} bits, reader at {}", bits.len(), br.loc());
    Ok(output)
}

fn bit_char(bit: bool) -> char {
    if bit {
        '1'
    } else {
        '0'
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::compression::encode::encode;
    use crate::huffman_coding::code_book::CodeBook;
    use crate::tools::freq_count::FrequencyTable;

    fn round_trip(text: &str) -> String {
        let tree = CodeTree::build(&FrequencyTable::from_text(text)).unwrap();
        let bits = encode(text, &CodeBook::from_tree(&tree)).unwrap();
        decode(&bits, &tree).unwrap()
    }

    #[test]
    fn aaabbc_test() {
        let tree = CodeTree::build(&FrequencyTable::from_text("aaabbc")).unwrap();
        assert_eq!(decode("000111110", &tree).unwrap(), "aaabbc");
    }

    #[test]
    fn round_trip_test() {
        let texts = [
            "aaabbc",
            "ab",
            "Call me Ishmael. Some years ago - never mind how long precisely -",
            "line one\nline two\r\n\ttabbed\n",
            "日本語のテキストも大丈夫です。",
            "emoji 🦀🦀 and accents éàü",
        ];
        for text in texts {
            assert_eq!(round_trip(text), text);
        }
    }

    #[test]
    fn single_symbol_round_trip() {
        assert_eq!(round_trip("aaaa"), "aaaa");
        assert_eq!(round_trip("z"), "z");
    }

    #[test]
    fn single_symbol_rejects_one_bit() {
        let tree = CodeTree::build(&FrequencyTable::from_text("aaaa")).unwrap();
        match decode("0010", &tree) {
            Err(HuffError::InvalidBit { symbol, position }) => {
                assert_eq!(symbol, '1');
                assert_eq!(position, 2);
            }
            other => panic!("expected an invalid bit, got {:?}", other),
        }
    }

    #[test]
    fn truncated_stream_is_detected() {
        let tree = CodeTree::build(&FrequencyTable::from_text("aaabbc")).unwrap();
        // "aaabbc" encodes to 000111110; drop the final bit.
        match decode("00011111", &tree) {
            Err(HuffError::TruncatedStream { position, depth }) => {
                assert_eq!(position, 8);
                assert_eq!(depth, 1);
            }
            other => panic!("expected a truncated stream, got {:?}", other),
        }
    }

    #[test]
    fn truncating_longer_text_is_detected() {
        // The last character has a multi bit code, so losing a bit leaves a partial code.
        let text = "abracadabra!";
        let tree = CodeTree::build(&FrequencyTable::from_text(text)).unwrap();
        let book = CodeBook::from_tree(&tree);
        assert!(book.code('!').unwrap().len() > 1);
        let mut bits = encode(text, &book).unwrap();
        bits.pop();
        assert!(matches!(
            decode(&bits, &tree),
            Err(HuffError::TruncatedStream { .. })
        ));
    }

    #[test]
    fn foreign_symbol_is_rejected() {
        let tree = CodeTree::build(&FrequencyTable::from_text("aaabbc")).unwrap();
        assert!(matches!(
            decode("00\n", &tree),
            Err(HuffError::InvalidBit {
                symbol: '\n',
                position: 2
            })
        ));
    }

    #[test]
    fn empty_stream_decodes_to_empty_text() {
        let tree = CodeTree::build(&FrequencyTable::from_text("ab")).unwrap();
        assert_eq!(decode("", &tree).unwrap(), "");
    }
}
