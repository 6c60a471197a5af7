//! Text source: the positional argument, or standard input.

use std::io::{self, Read};

/// Returns `arg` if given, otherwise everything readable from `input`
/// with a single trailing line break removed.
pub fn read_text(arg: Option<&str>, input: &mut dyn Read) -> io::Result<String> {
    if let Some(text) = arg {
        return Ok(text.to_string());
    }
    let mut text = String::new();
    input.read_to_string(&mut text)?;
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    log::debug!("read {} bytes of input text", text.len());
    Ok(text)
}
