//! Base-1024 emoji codec.
//!
//! Maps arbitrary byte sequences to and from strings of emoji drawn from a
//! fixed 1024-symbol alphabet (ten bits per symbol), with an optional
//! self-describing armor envelope and line wrapping.
//!
//! ```
//! use base_emoji::{AlphabetConfig, DecodeOptions, EncodeOptions, decode, encode};
//!
//! let alphabet = AlphabetConfig::load_default().unwrap().build().unwrap();
//!
//! let encoded = encode(b"hi!", &alphabet, &EncodeOptions::default());
//! assert_eq!(encoded.chars().count(), 4);
//!
//! let decoded = decode(&encoded, &alphabet, &DecodeOptions::default()).unwrap();
//! assert_eq!(decoded.as_text(), Some("hi!"));
//! ```
//!
//! Text-format decoding maps each byte directly to the character of that
//! code point; it is not UTF-8 aware. Decode to [`OutputFormat::Binary`]
//! for anything that is not single-byte-per-character text.

mod alphabet;
mod armor;
mod config;
mod encoding;
mod errors;
mod transpose;

pub use alphabet::{ALPHABET_SIZE, Alphabet, ArmorSymbols, SYMBOL_BITS};
pub use config::{
    AlphabetConfig, ArmorConfig, PaddingConfig, RangeConfig, SpecialConfig, SymbolSetConfig,
};
pub use encoding::{Decoded, DecodeOptions, EncodeOptions, OutputFormat};
pub use errors::DecodeError;
pub use transpose::{Transposed, transpose};

pub use armor::{armor, dearmor, wrap};
pub use encoding::{decode, encode};
