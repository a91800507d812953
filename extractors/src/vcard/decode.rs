use encoding_rs::Encoding;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// Value opens with `"` and never closes it
    UnterminatedQuote,
}

/// Backslash unescaping for 3.0/4.0 style values.
///
/// Handles `\n`, `\N`, `\,`, `\;` and `\\`; any other backslash is kept as is.
/// A single pair of surrounding double quotes is removed.
pub fn decode_escaped(value: &str) -> Result<String, DecodeError> {
    let value = strip_quotes(value)?;
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') | Some('N') => out.push('\n'),
            Some(',') => out.push(','),
            Some(';') => out.push(';'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }

    Ok(out)
}

fn strip_quotes(value: &str) -> Result<&str, DecodeError> {
    let Some(rest) = value.strip_prefix('"') else {
        return Ok(value);
    };
    if !rest.contains('"') {
        return Err(DecodeError::UnterminatedQuote);
    }
    Ok(rest.strip_suffix('"').unwrap_or(value))
}

/// Decodes `=XX` escapes.
///
/// Consecutive escapes form one run and the run's bytes are decoded together
/// with `encoding`, so a multi-byte UTF-8 sequence becomes one character. A run
/// the charset rejects is emitted byte by byte as Latin-1 code points.
pub fn decode_quoted_printable(value: &str, encoding: &'static Encoding) -> String {
    let bytes = value.as_bytes();
    let mut out = String::with_capacity(value.len());
    let mut run: Vec<u8> = Vec::new();
    let mut literal_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match hex_escape(bytes, i) {
            Some(byte) => {
                out.push_str(&value[literal_start..i]);
                run.push(byte);
                i += 3;
                literal_start = i;
            }
            None => {
                flush_run(&mut out, &mut run, encoding);
                i += 1;
            }
        }
    }

    flush_run(&mut out, &mut run, encoding);
    out.push_str(&value[literal_start..]);
    out
}

fn hex_escape(bytes: &[u8], i: usize) -> Option<u8> {
    if bytes.get(i) != Some(&b'=') {
        return None;
    }
    let high = hex_value(*bytes.get(i + 1)?)?;
    let low = hex_value(*bytes.get(i + 2)?)?;
    Some(high << 4 | low)
}

fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

fn flush_run(out: &mut String, run: &mut Vec<u8>, encoding: &'static Encoding) {
    if run.is_empty() {
        return;
    }
    match encoding.decode_without_bom_handling_and_without_replacement(run) {
        Some(decoded) => out.push_str(&decoded),
        None => out.extend(run.iter().map(|&b| char::from(b))),
    }
    run.clear();
}
