use base_emoji::{AlphabetConfig, DecodeOptions, EncodeOptions, OutputFormat, decode, encode};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let alphabet = AlphabetConfig::load_default()?.build()?;

    let data = b"Hello, World!";
    let encoded = encode(data, &alphabet, &EncodeOptions::default());

    println!("Original:  {} bytes", data.len());
    println!("Encoded:   {} symbols", encoded.chars().count());
    println!("{encoded}");
    println!();

    let armored = encode(
        data,
        &alphabet,
        &EncodeOptions {
            armor: true,
            armor_descriptor: Some("greeting".to_string()),
            wrap: 32,
        },
    );
    println!("Armored:");
    println!("{armored}");
    println!();

    let decoded = decode(
        &armored,
        &alphabet,
        &DecodeOptions {
            format: OutputFormat::Binary,
            ignore_garbage: false,
        },
    )?;
    assert_eq!(decoded.into_bytes(), data);
    println!("Round trip OK");

    Ok(())
}
