//! Page token command implementations

use serde::Serialize;

use crate::cli::{GlobalOptions, OutputFormat};
use crate::error::Result;
use crate::folders::{decode_token, encode_token};
use crate::output::json;

#[derive(Debug, Serialize)]
struct TokenInfo {
    token: String,
    offset: usize,
}

/// Run the token encode command
pub fn encode(opts: &GlobalOptions, offset: usize) -> Result<()> {
    let info = TokenInfo {
        token: encode_token(offset),
        offset,
    };
    println!("{}", render(&info, opts.format.unwrap_or_default())?);
    Ok(())
}

/// Run the token decode command
pub fn decode(opts: &GlobalOptions, token: &str) -> Result<()> {
    let info = TokenInfo {
        token: token.to_string(),
        offset: decode_token(token)?,
    };
    println!("{}", render(&info, opts.format.unwrap_or_default())?);
    Ok(())
}

fn render(info: &TokenInfo, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(json::format_json(info)?),
        OutputFormat::Pretty => Ok(format!("{} -> offset {}", info.token, info.offset)),
        OutputFormat::Table => Ok(format!("{}\t{}", info.token, info.offset)),
    }
}
