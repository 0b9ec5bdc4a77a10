use std::collections::{HashMap, HashSet};

/// Number of significant bits per symbol.
pub const SYMBOL_BITS: u32 = 10;

/// Number of symbols in the data alphabet.
pub const ALPHABET_SIZE: usize = 1 << SYMBOL_BITS;

/// Structural symbols used by the armor envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArmorSymbols {
    /// Repeated boundary marker filling the header and footer lines.
    pub marker: char,
    /// Closes the header content.
    pub begin: char,
    /// Closes the footer content.
    pub end: char,
    /// Descriptor used when the caller does not supply one.
    pub descriptor: String,
}

/// The 1024-symbol data alphabet plus its special symbols.
///
/// Holds the two lookup tables the codec runs on (symbol-by-index and
/// index-by-symbol), the padding-marker table and the armor constants. The
/// tables are immutable after construction, so an `Alphabet` can be shared
/// freely across threads.
#[derive(Debug, Clone)]
pub struct Alphabet {
    symbols: Vec<char>,
    index: HashMap<char, usize>,
    padding: Vec<(u32, char)>,
    armor: ArmorSymbols,
}

impl Alphabet {
    /// Creates an alphabet from its symbol list and special symbols.
    ///
    /// # Errors
    ///
    /// Returns an error if the symbol list is not exactly 1024 unique
    /// characters, if the padding table does not cover exactly the indices
    /// {2, 4, 6, 8}, or if any special symbol collides with the data
    /// alphabet or with another special symbol.
    pub fn new(
        symbols: Vec<char>,
        padding: Vec<(u32, char)>,
        armor: ArmorSymbols,
    ) -> Result<Self, String> {
        if symbols.len() != ALPHABET_SIZE {
            return Err(format!(
                "alphabet must contain exactly {} symbols, got {}",
                ALPHABET_SIZE,
                symbols.len()
            ));
        }

        let mut index = HashMap::with_capacity(symbols.len());
        for (i, &c) in symbols.iter().enumerate() {
            if index.insert(c, i).is_some() {
                return Err(format!("duplicate symbol in alphabet: {c}"));
            }
        }

        let mut pad_bits: Vec<u32> = padding.iter().map(|&(bits, _)| bits).collect();
        pad_bits.sort_unstable();
        if pad_bits != [2, 4, 6, 8] {
            return Err(format!(
                "padding table must cover indices 2, 4, 6 and 8, got {pad_bits:?}"
            ));
        }

        let mut specials = HashSet::new();
        let structural = padding
            .iter()
            .map(|&(_, c)| c)
            .chain([armor.marker, armor.begin, armor.end]);
        for c in structural {
            if index.contains_key(&c) {
                return Err(format!("special symbol {c} is part of the data alphabet"));
            }
            if !specials.insert(c) {
                return Err(format!("special symbol {c} is used twice"));
            }
        }

        Ok(Alphabet {
            symbols,
            index,
            padding,
            armor,
        })
    }

    /// Returns the symbol at `index`. The index must be below 1024, which
    /// every 10-bit code satisfies by construction.
    pub fn symbol(&self, index: usize) -> char {
        self.symbols[index]
    }

    /// Returns the 10-bit code for a symbol, or `None` for characters
    /// outside the data alphabet.
    pub fn index_of(&self, symbol: char) -> Option<usize> {
        self.index.get(&symbol).copied()
    }

    /// The full symbol list, in index order.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Returns the padding marker for a count of zero-filled bits.
    pub fn padding_for(&self, bits: u32) -> Option<char> {
        self.padding
            .iter()
            .find(|&&(b, _)| b == bits)
            .map(|&(_, c)| c)
    }

    /// Returns the padding value a marker stands for, or `None` for
    /// non-padding characters.
    pub fn padding_value(&self, symbol: char) -> Option<u32> {
        self.padding
            .iter()
            .find(|&&(_, c)| c == symbol)
            .map(|&(b, _)| b)
    }

    /// The padding-marker table, as (bits, symbol) pairs.
    pub fn padding_markers(&self) -> &[(u32, char)] {
        &self.padding
    }

    /// The armor envelope symbols.
    pub fn armor(&self) -> &ArmorSymbols {
        &self.armor
    }
}
