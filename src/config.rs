use serde::Deserialize;

use crate::alphabet::{ALPHABET_SIZE, Alphabet, ArmorSymbols};

/// A contiguous run of Unicode characters in the symbol list.
#[derive(Debug, Deserialize, Clone)]
pub struct RangeConfig {
    /// First character of the range
    pub start: String,
    /// Number of characters in the range
    pub length: usize,
}

/// The data alphabet, either as an explicit character string or as a list
/// of contiguous ranges.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct SymbolSetConfig {
    /// The symbols comprising the alphabet (explicit list)
    #[serde(default)]
    pub chars: String,
    /// Range-based definition, used when `chars` is empty
    #[serde(default)]
    pub ranges: Vec<RangeConfig>,
}

/// One padding-marker entry.
#[derive(Debug, Deserialize, Clone)]
pub struct PaddingConfig {
    /// Zero-filled low bits in the final code this marker stands for
    pub bits: u32,
    /// The marker symbol
    pub symbol: String,
}

/// Armor envelope symbols.
#[derive(Debug, Deserialize, Clone)]
pub struct ArmorConfig {
    pub marker: String,
    pub begin: String,
    pub end: String,
    pub descriptor: String,
}

/// Special (structural) symbols.
#[derive(Debug, Deserialize, Clone)]
pub struct SpecialConfig {
    pub padding: Vec<PaddingConfig>,
    pub armor: ArmorConfig,
}

/// Alphabet definition loaded from TOML.
#[derive(Debug, Deserialize, Clone)]
pub struct AlphabetConfig {
    pub alphabet: SymbolSetConfig,
    pub special: SpecialConfig,
}

impl SymbolSetConfig {
    /// Returns the effective symbol list, expanding ranges if needed.
    ///
    /// An explicit `chars` string takes priority over `ranges`.
    pub fn effective_chars(&self) -> Result<Vec<char>, String> {
        if !self.chars.is_empty() {
            return Ok(self.chars.chars().collect());
        }

        let mut symbols = Vec::with_capacity(ALPHABET_SIZE);
        for range in &self.ranges {
            let start = range
                .start
                .chars()
                .next()
                .ok_or("range start must contain at least one character")?;
            symbols.extend(generate_range(start as u32, range.length)?);
        }
        Ok(symbols)
    }
}

/// Generate a sequence of sequential Unicode characters from a range.
fn generate_range(start: u32, length: usize) -> Result<Vec<char>, String> {
    const MAX_UNICODE: u32 = 0x10FFFF;
    const SURROGATE_START: u32 = 0xD800;
    const SURROGATE_END: u32 = 0xDFFF;

    if length == 0 {
        return Err("range length must be greater than 0".to_string());
    }

    let end = start
        .checked_add(length as u32 - 1)
        .ok_or("range exceeds maximum Unicode codepoint")?;

    if end > MAX_UNICODE {
        return Err(format!(
            "range end U+{end:X} exceeds maximum Unicode codepoint U+{MAX_UNICODE:X}"
        ));
    }

    // Check for surrogate gap crossing
    if start <= SURROGATE_END && end >= SURROGATE_START {
        return Err(format!(
            "range U+{start:X}..U+{end:X} crosses surrogate gap (U+D800..U+DFFF)"
        ));
    }

    let mut symbols = Vec::with_capacity(length);
    for i in 0..length {
        let codepoint = start + i as u32;
        match char::from_u32(codepoint) {
            Some(c) => symbols.push(c),
            None => return Err(format!("invalid codepoint U+{codepoint:X}")),
        }
    }

    Ok(symbols)
}

impl AlphabetConfig {
    /// Parses an alphabet definition from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads the built-in emoji alphabet.
    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../emoji.toml");
        Ok(Self::from_toml(content)?)
    }

    /// Loads an alphabet definition from a custom file path.
    pub fn load_from_file(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }

    /// Loads the alphabet, honoring user overrides:
    /// 1. Start with the built-in alphabet
    /// 2. Replace with ~/.config/base-emoji/emoji.toml if it exists
    /// 3. Replace with ./emoji.toml if it exists in the current directory
    pub fn load_with_overrides() -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = Self::load_default()?;

        if let Some(config_dir) = dirs::config_dir() {
            let user_config_path = config_dir.join("base-emoji").join("emoji.toml");
            if user_config_path.exists() {
                match Self::load_from_file(&user_config_path) {
                    Ok(user_config) => config = user_config,
                    Err(e) => {
                        eprintln!(
                            "Warning: Failed to load user config from {user_config_path:?}: {e}"
                        );
                    }
                }
            }
        }

        let local_config_path = std::path::Path::new("emoji.toml");
        if local_config_path.exists() {
            match Self::load_from_file(local_config_path) {
                Ok(local_config) => config = local_config,
                Err(e) => {
                    eprintln!("Warning: Failed to load local config from {local_config_path:?}: {e}");
                }
            }
        }

        Ok(config)
    }

    /// Builds the validated alphabet tables from this definition.
    pub fn build(&self) -> Result<Alphabet, String> {
        let symbols = self.alphabet.effective_chars()?;

        let mut padding = Vec::with_capacity(self.special.padding.len());
        for entry in &self.special.padding {
            padding.push((entry.bits, single_symbol(&entry.symbol, "padding symbol")?));
        }

        let armor = ArmorSymbols {
            marker: single_symbol(&self.special.armor.marker, "armor marker")?,
            begin: single_symbol(&self.special.armor.begin, "armor begin symbol")?,
            end: single_symbol(&self.special.armor.end, "armor end symbol")?,
            descriptor: self.special.armor.descriptor.clone(),
        };

        Alphabet::new(symbols, padding, armor)
    }
}

fn single_symbol(s: &str, what: &str) -> Result<char, String> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(format!("{what} must be exactly one character, got {s:?}")),
    }
}
