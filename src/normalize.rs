/// Content contained a carriage return, which is never converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("carriage return (\\r) detected on line {line}")]
pub struct InvalidLineEnding {
    /// 1-based line of the first `\r`.
    pub line: usize,
}

/// Normalize text so every line is free of trailing whitespace and the text
/// ends with exactly one `\n`.
///
/// Trailing blank lines are dropped. Empty input (or input made only of
/// whitespace) becomes a single `"\n"`. Any `\r` in the input is rejected
/// rather than stripped.
pub fn normalize(content: &str) -> Result<String, InvalidLineEnding> {
    if let Some(pos) = content.find('\r') {
        let line = content[..pos].matches('\n').count() + 1;
        return Err(InvalidLineEnding { line });
    }

    let mut lines: Vec<&str> = content.split('\n').map(str::trim_end).collect();
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }

    let mut out = String::with_capacity(content.len() + 1);
    for line in &lines {
        out.push_str(line);
        out.push('\n');
    }
    if out.is_empty() {
        out.push('\n');
    }
    Ok(out)
}

/// Whether `content` is already a fixed point of [`normalize`].
pub fn is_normalized(content: &str) -> Result<bool, InvalidLineEnding> {
    Ok(normalize(content)? == content)
}
