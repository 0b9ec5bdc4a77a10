use crate::alphabet::{Alphabet, SYMBOL_BITS};
use crate::armor;
use crate::errors::DecodeError;
use crate::transpose::transpose;

/// Options controlling the encoded presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Wrap the output in an armor envelope. Honored only when `wrap` is
    /// positive, since the envelope width is the wrap column count.
    pub armor: bool,
    /// Descriptor for the armor header and footer; the alphabet's built-in
    /// descriptor is used when unset.
    pub armor_descriptor: Option<String>,
    /// Symbols per line; 0 disables line wrapping.
    pub wrap: usize,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        EncodeOptions {
            armor: false,
            armor_descriptor: None,
            wrap: 32,
        }
    }
}

/// Decoded output representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Map each decoded byte directly to the character of that code point.
    ///
    /// This is not a text decoder: it is only correct for payloads that
    /// were single-byte-per-character text to begin with. Multi-byte UTF-8
    /// payloads come out mojibake; use [`OutputFormat::Binary`] for those.
    #[default]
    Text,
    /// Return the decoded bytes as-is.
    Binary,
}

impl std::str::FromStr for OutputFormat {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(OutputFormat::Text),
            "binary" => Ok(OutputFormat::Binary),
            other => Err(DecodeError::InvalidFormat(other.to_string())),
        }
    }
}

/// Options controlling decoding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Output representation; defaults to [`OutputFormat::Text`].
    pub format: OutputFormat,
    /// Silently drop characters outside the alphabet instead of failing.
    pub ignore_garbage: bool,
}

/// A decoded payload, shaped per [`DecodeOptions::format`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    /// Byte-to-code-point mapped text (see [`OutputFormat::Text`]).
    Text(String),
    /// Raw bytes.
    Bytes(Vec<u8>),
}

impl Decoded {
    /// Returns the payload as bytes regardless of representation.
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Decoded::Bytes(bytes) => bytes,
            Decoded::Text(text) => text.chars().map(|c| c as u8).collect(),
        }
    }

    /// Returns the text, if decoded in text format.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Decoded::Text(text) => Some(text),
            Decoded::Bytes(_) => None,
        }
    }
}

/// Encodes a byte sequence into a base-1024 symbol string.
///
/// Every byte sequence is representable; empty input encodes to an empty
/// string with no padding symbol. Inputs whose length is not a multiple of
/// five bytes gain one final zero-padded code plus a padding marker naming
/// the number of filler bits.
pub fn encode(data: &[u8], alphabet: &Alphabet, options: &EncodeOptions) -> String {
    if data.is_empty() {
        return String::new();
    }

    let mut codes = transpose(data.iter().map(|&b| u16::from(b)), 8, SYMBOL_BITS);
    if codes.bits_remaining > 0 {
        codes.tuples.push(codes.remainder);
    }

    // Symbols are up to four UTF-8 bytes each
    let mut flat = String::with_capacity(codes.tuples.len() * 4 + 4);
    for &code in &codes.tuples {
        flat.push(alphabet.symbol(code as usize));
    }
    if codes.bits_remaining > 0 {
        // Only 2, 4, 6 and 8 filler bits can occur for 8-to-10-bit
        // regrouping, so the lookup always succeeds for a valid alphabet.
        if let Some(marker) = alphabet.padding_for(SYMBOL_BITS - codes.bits_remaining) {
            flat.push(marker);
        }
    }

    if options.armor && options.wrap > 0 {
        armor::armor(&flat, options.armor_descriptor.as_deref(), options.wrap, alphabet)
    } else if options.wrap > 0 {
        armor::wrap(&flat, options.wrap)
    } else {
        flat
    }
}

/// Decodes a base-1024 symbol string back into its payload.
///
/// The input is trimmed, de-armored opportunistically and stripped of line
/// breaks before reconstruction. A trailing padding marker drives removal
/// of filler bits; unknown characters fail with
/// [`DecodeError::InvalidSymbol`] unless `ignore_garbage` is set.
pub fn decode(
    encoded: &str,
    alphabet: &Alphabet,
    options: &DecodeOptions,
) -> Result<Decoded, DecodeError> {
    let mut symbols = armor::dearmor(encoded.trim(), alphabet);

    let mut padding = 0;
    if let Some(&last) = symbols.last()
        && let Some(bits) = alphabet.padding_value(last)
    {
        symbols.pop();
        padding = bits;
    }

    if options.ignore_garbage {
        symbols.retain(|&c| alphabet.index_of(c).is_some());
    }

    let mut codes = Vec::with_capacity(symbols.len());
    for (position, &c) in symbols.iter().enumerate() {
        match alphabet.index_of(c) {
            Some(index) => codes.push(index as u16),
            None => {
                let context: String = symbols.iter().collect();
                return Err(DecodeError::invalid_symbol(c, position, &context));
            }
        }
    }

    let transposed = transpose(codes.into_iter(), SYMBOL_BITS, 8);
    let mut bytes: Vec<u8> = transposed.tuples.into_iter().map(|b| b as u8).collect();

    // A padding value of 8 or more means the final byte is filler bits
    // only, an artifact of the appended remainder code.
    if padding >= 8 {
        bytes.pop();
    }

    Ok(match options.format {
        OutputFormat::Binary => Decoded::Bytes(bytes),
        OutputFormat::Text => Decoded::Text(bytes.into_iter().map(char::from).collect()),
    })
}
