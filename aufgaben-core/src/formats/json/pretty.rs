//! Re-indentation of JSON text.
//!
//! A single pass over the characters that only tracks nesting depth and
//! whether it is inside a string literal. String contents are copied verbatim,
//! so the pass works on any valid JSON and never looks at what the values mean.

/// Re-indent `json` with `indent_width` spaces per nesting level.
///
/// Whitespace outside strings is dropped and regenerated: a line break after
/// every `{`, `[` and `,`, one space after every `:`. Empty containers stay on
/// one line as `{}` / `[]`.
pub fn prettify(json: &str, indent_width: usize) -> String {
    let mut out = String::with_capacity(json.len() * 2);
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    let mut chars = json.chars().peekable();

    while let Some(c) = chars.next() {
        if in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => {
                in_string = true;
                out.push(c);
            }
            '{' | '[' => {
                let close = if c == '{' { '}' } else { ']' };
                while chars.peek().is_some_and(|next| is_json_whitespace(*next)) {
                    chars.next();
                }
                out.push(c);
                if chars.peek() == Some(&close) {
                    chars.next();
                    out.push(close);
                } else {
                    depth += 1;
                    line_break(&mut out, depth, indent_width);
                }
            }
            '}' | ']' => {
                depth = depth.saturating_sub(1);
                line_break(&mut out, depth, indent_width);
                out.push(c);
            }
            ',' => {
                out.push(c);
                line_break(&mut out, depth, indent_width);
            }
            ':' => out.push_str(": "),
            c if is_json_whitespace(c) => {}
            c => out.push(c),
        }
    }

    out
}

fn is_json_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

fn line_break(out: &mut String, depth: usize, indent_width: usize) {
    out.push('\n');
    out.extend(std::iter::repeat(' ').take(depth * indent_width));
}
