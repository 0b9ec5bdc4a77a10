use base_emoji::{
    Alphabet, AlphabetConfig, Decoded, DecodeOptions, EncodeOptions, OutputFormat, decode, encode,
};
use clap::Parser;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "base-emoji")]
#[command(version)]
#[command(
    about = "Base-emoji encode or decode FILE, or standard input, to standard output",
    long_about = "Base-emoji encode or decode FILE, or standard input, to standard output.\n\nWith no FILE, or when FILE is -, read standard input."
)]
struct Cli {
    /// File to encode/decode
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Decode base-emoji encoded data
    #[arg(short, long)]
    decode: bool,

    /// Base-emoji encode and armor data
    #[arg(short, long)]
    armor: bool,

    /// When encoding and armoring, a description for the armor header and footer
    #[arg(long, value_name = "TEXT")]
    descriptor: Option<String>,

    /// When decoding, ignore non-emoji characters
    #[arg(short, long)]
    ignore_garbage: bool,

    /// Wrap encoded lines after COLS symbols; use 0 to disable line wrapping
    #[arg(short, long, default_value_t = 32, value_name = "COLS")]
    wrap: usize,

    /// Output format when decoding: "string" or "binary"
    #[arg(short, long, default_value = "binary", value_name = "FORMAT")]
    format: String,

    /// List the alphabet and special symbols
    #[arg(short, long)]
    list: bool,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = AlphabetConfig::load_with_overrides()?;
    let alphabet = config.build()?;

    if cli.list {
        list_alphabet(&alphabet);
        return Ok(());
    }

    // Read input data
    let input_data = match &cli.file {
        Some(path) if path.as_os_str() != "-" => {
            if path.is_dir() {
                return Err(format!("cannot open {} for reading: is a directory", path.display()).into());
            }
            fs::read(path).map_err(|e| format!("cannot open {} for reading: {e}", path.display()))?
        }
        _ => {
            let mut buffer = Vec::new();
            io::stdin().read_to_end(&mut buffer)?;
            buffer
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.decode {
        let text = String::from_utf8(input_data)
            .map_err(|_| "input must be valid UTF-8 for decoding")?;
        let options = DecodeOptions {
            format: cli.format.parse::<OutputFormat>()?,
            ignore_garbage: cli.ignore_garbage,
        };
        match decode(&text, &alphabet, &options)? {
            Decoded::Bytes(bytes) => out.write_all(&bytes)?,
            Decoded::Text(text) => out.write_all(text.as_bytes())?,
        }
    } else {
        let options = EncodeOptions {
            // Armor needs a line width; without one it degrades to flat output
            armor: cli.armor && cli.wrap > 0,
            armor_descriptor: cli.descriptor.clone(),
            wrap: cli.wrap,
        };
        let encoded = encode(&input_data, &alphabet, &options);
        out.write_all(encoded.as_bytes())?;
        out.write_all(b"\n")?;
    }

    Ok(())
}

/// Enumerated listing of the alphabet: index, code point and symbol.
fn list_alphabet(alphabet: &Alphabet) {
    println!("Data alphabet ({} symbols):\n", alphabet.symbols().len());
    for (index, &symbol) in alphabet.symbols().iter().enumerate() {
        println!("  {index:>4}  U+{:05X}  {symbol}", symbol as u32);
    }

    println!("\nPadding markers:\n");
    for &(bits, symbol) in alphabet.padding_markers() {
        println!("  {bits} filler bits  U+{:05X}  {symbol}", symbol as u32);
    }

    let armor = alphabet.armor();
    println!("\nArmor symbols:\n");
    println!("  marker  U+{:05X}  {}", armor.marker as u32, armor.marker);
    println!("  begin   U+{:05X}  {}", armor.begin as u32, armor.begin);
    println!("  end     U+{:05X}  {}", armor.end as u32, armor.end);
    println!("  default descriptor  {}", armor.descriptor);
}
