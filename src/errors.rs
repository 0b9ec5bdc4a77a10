use std::fmt;

/// Errors that can occur during decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The input contains a character outside the data alphabet
    InvalidSymbol {
        symbol: char,
        position: usize,
        input: String,
    },
    /// The requested output format is not recognized
    InvalidFormat(String),
}

impl DecodeError {
    /// Create an InvalidSymbol error with input context.
    pub fn invalid_symbol(symbol: char, position: usize, input: &str) -> Self {
        // Truncate long inputs, counting symbols rather than bytes
        let display_input = if input.chars().count() > 60 {
            let head: String = input.chars().take(60).collect();
            format!("{head}...")
        } else {
            input.to_string()
        };

        DecodeError::InvalidSymbol {
            symbol,
            position,
            input: display_input,
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        match self {
            DecodeError::InvalidSymbol {
                symbol,
                position,
                input,
            } => {
                let codepoint = *symbol as u32;
                if use_color {
                    writeln!(
                        f,
                        "\x1b[1;31merror:\x1b[0m invalid symbol '{symbol}' (U+{codepoint:04X}) at position {position}"
                    )?;
                } else {
                    writeln!(
                        f,
                        "error: invalid symbol '{symbol}' (U+{codepoint:04X}) at position {position}"
                    )?;
                }
                writeln!(f)?;

                // Show input with a caret pointing at the offending symbol
                writeln!(f, "  {input}")?;
                if *position < input.chars().count() {
                    write!(f, "  {}", " ".repeat(*position))?;
                    if use_color {
                        writeln!(f, "\x1b[1;31m^\x1b[0m")?;
                    } else {
                        writeln!(f, "^")?;
                    }
                }
                writeln!(f)?;

                if use_color {
                    write!(
                        f,
                        "\x1b[1;36mhint:\x1b[0m input may only contain alphabet symbols; pass --ignore-garbage to skip others"
                    )?;
                } else {
                    write!(
                        f,
                        "hint: input may only contain alphabet symbols; pass --ignore-garbage to skip others"
                    )?;
                }
                Ok(())
            }
            DecodeError::InvalidFormat(format) => {
                if use_color {
                    writeln!(f, "\x1b[1;31merror:\x1b[0m invalid output format '{format}'")?;
                    write!(f, "\n\x1b[1;36mhint:\x1b[0m expected 'string' or 'binary'")?;
                } else {
                    writeln!(f, "error: invalid output format '{format}'")?;
                    write!(f, "\nhint: expected 'string' or 'binary'")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Check if colored output should be used
fn should_use_color() -> bool {
    // Respect NO_COLOR environment variable
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stderr is a terminal
    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}
