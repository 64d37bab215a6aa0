//! Display text reconstruction from token ranges.
//!
//!     The front end keeps no whitespace, so every piece of free text the pipeline
//!     emits is rebuilt from tokens here. Spacing is decided on the (previous,
//!     current) token kind pair, first matching rule wins:
//!
//!         1. number followed by number: no space (digit grouping, "1" "6" -> "16")
//!         2. wordish followed by wordish: one space
//!         3. wordish followed by `(`: one space
//!         4. `)` followed by wordish: one space
//!         5. current kind suppresses the space before it, or previous kind
//!            suppresses the space after it: no space
//!         6. anything else: no space
//!
//!     Line breaks either become a literal `\n` (structural text) or are dropped.
//!     In both cases they reset the previous-token memory, so no space is ever
//!     bridged across a line boundary.
//!
//!     Other modules never read raw token text for display purposes; they call
//!     [`detokenize`] or [`detokenize_node`].

use crate::cst::{SyntaxNode, Token, TokenKind, TokenSpan, Tokens};

/// Rebuild the display string for an inclusive token span.
///
/// A missing span (node without tokens), a reversed span or a span starting
/// past the end of the sequence yields an empty string.
pub fn detokenize(tokens: Tokens<'_>, span: Option<TokenSpan>, keep_newlines: bool) -> String {
    match span {
        Some(span) => join(tokens.range(span), keep_newlines),
        None => String::new(),
    }
}

/// Rebuild the display string for everything a node covers.
pub fn detokenize_node(node: &SyntaxNode, tokens: Tokens<'_>, keep_newlines: bool) -> String {
    detokenize(tokens, node.span(), keep_newlines)
}

/// Same as [`detokenize_node`] for an optional node.
pub fn detokenize_opt(node: Option<&SyntaxNode>, tokens: Tokens<'_>) -> String {
    node.map(|node| detokenize_node(node, tokens, false))
        .unwrap_or_default()
}

fn join(run: &[Token], keep_newlines: bool) -> String {
    let mut out = String::new();
    let mut prev: Option<TokenKind> = None;

    for token in run {
        if token.kind == TokenKind::Newline {
            if keep_newlines {
                out.push('\n');
            }
            prev = None;
            continue;
        }
        if let Some(prev) = prev {
            if space_between(prev, token.kind) {
                out.push(' ');
            }
        }
        out.push_str(&token.text);
        prev = Some(token.kind);
    }

    out
}

/// Whether a single space separates two adjacent tokens.
pub fn space_between(prev: TokenKind, cur: TokenKind) -> bool {
    if prev == TokenKind::Number && cur == TokenKind::Number {
        return false;
    }
    if prev.is_wordish() && cur.is_wordish() {
        return true;
    }
    if prev.is_wordish() && cur == TokenKind::OpenParen {
        return true;
    }
    if prev == TokenKind::CloseParen && cur.is_wordish() {
        return true;
    }
    if cur.suppresses_space_before() || prev.suppresses_space_after() {
        return false;
    }
    false
}
