// Light cleanup of raw model output before it is returned to clients.
pub fn tidy_suggestions(raw: &str) -> String {
    let mut text = raw.trim();
    if let Some(inner) = strip_code_fence(text) {
        text = inner;
    }
    collapse_blank_runs(text.trim())
}

// Unwrap output the model wrapped whole in a markdown code fence.
fn strip_code_fence(text: &str) -> Option<&str> {
    let rest = text.strip_prefix("```")?;
    let rest = rest.strip_suffix("```")?;
    // Drop the info string on the opening fence line.
    let newline = rest.find('\n')?;
    Some(&rest[newline + 1..])
}

// Collapse runs of three or more newlines down to a single blank line.
fn collapse_blank_runs(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut newlines = 0usize;
    for ch in text.chars() {
        if ch == '\n' {
            newlines += 1;
            if newlines <= 2 {
                out.push(ch);
            }
        } else {
            newlines = 0;
            out.push(ch);
        }
    }
    out
}
