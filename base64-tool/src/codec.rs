use std::fs;

use anyhow::Context;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use log::debug;

/// Reads the input file's raw bytes and writes them to the output file as
/// base64 text (RFC 4648 standard alphabet, padded, no line wrapping).
pub fn encode_file(input_file: &str, output_file: &str) -> anyhow::Result<()> {
    let bytes = fs::read(input_file)
        .with_context(|| format!("Failed to read the input file {input_file}"))?;

    let encoded = STANDARD.encode(&bytes);
    debug!(
        "encoded {} bytes into {} base64 characters",
        bytes.len(),
        encoded.len()
    );

    fs::write(output_file, encoded)
        .with_context(|| format!("Failed to write the output file {output_file}"))?;

    Ok(())
}

/// Reads the input file's base64 text and writes the decoded bytes to the
/// output file. A trailing newline or other surrounding whitespace in the
/// input is tolerated; anything else outside the base64 alphabet is an error.
pub fn decode_file(input_file: &str, output_file: &str) -> anyhow::Result<()> {
    let text = fs::read_to_string(input_file)
        .with_context(|| format!("Failed to read the input file {input_file}"))?;

    let bytes = STANDARD
        .decode(text.trim())
        .with_context(|| format!("{input_file} does not contain valid base64"))?;
    debug!(
        "decoded {} base64 characters into {} bytes",
        text.trim().len(),
        bytes.len()
    );

    fs::write(output_file, bytes)
        .with_context(|| format!("Failed to write the output file {output_file}"))?;

    Ok(())
}
