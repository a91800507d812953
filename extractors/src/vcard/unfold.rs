use super::property::{is_quoted_printable, property_name};
use super::CardError;

/// Joins physical lines into logical lines.
///
/// A physical line starting with a space or tab continues the previous line
/// (the first whitespace character is dropped). A quoted-printable line ending
/// in `=` is a soft break: the `=` is dropped and the next physical line is
/// appended verbatim. Soft breaks are only honoured on lines tagged
/// quoted-printable, so base64 padding elsewhere is left alone.
pub fn unfold_lines(block: &str) -> Result<Vec<String>, CardError> {
    let mut lines: Vec<String> = Vec::new();
    let mut soft_break = false;

    for physical in block.split('\n') {
        let physical = physical.strip_suffix('\r').unwrap_or(physical);
        let folded = physical.starts_with([' ', '\t']);

        if !lines.is_empty() && (soft_break || folded) {
            if let Some(last) = lines.last_mut() {
                last.push_str(if soft_break { physical } else { &physical[1..] });
            }
        } else {
            lines.push(physical.to_string());
        }

        soft_break = lines.last_mut().is_some_and(take_soft_break);
    }

    if soft_break {
        let property = lines
            .last()
            .and_then(|line| line.split_once(':'))
            .map(|(part, _)| property_name(part))
            .unwrap_or_default();
        return Err(CardError::DanglingSoftBreak { property });
    }

    Ok(lines)
}

fn take_soft_break(line: &mut String) -> bool {
    let tagged = line
        .split_once(':')
        .is_some_and(|(part, _)| is_quoted_printable(part));

    if tagged && line.ends_with('=') {
        line.pop();
        true
    } else {
        false
    }
}
