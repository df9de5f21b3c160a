//! GraphQL source extraction
//!
//! `.graphql`/`.gql` files are a single document. In JS/TS sources every
//! template literal tagged with the configured tag name is one document.

use std::path::Path;

/// A chunk of GraphQL text and the 1-based line it starts on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    pub source: String,
    pub line: usize,
}

pub fn extract_snippets(path: &Path, content: &str, tag_name: &str) -> Vec<Snippet> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    match extension {
        "graphql" | "gql" => {
            if content.trim().is_empty() {
                Vec::new()
            } else {
                vec![Snippet {
                    source: content.to_string(),
                    line: 1,
                }]
            }
        }
        "js" | "jsx" | "ts" | "tsx" => tagged_templates(content, tag_name),
        _ => Vec::new(),
    }
}

fn tagged_templates(content: &str, tag_name: &str) -> Vec<Snippet> {
    let mut snippets = Vec::new();
    if tag_name.is_empty() {
        return snippets;
    }

    let mut search_from = 0;
    while let Some(found) = content[search_from..].find(tag_name) {
        let start = search_from + found;
        let after_tag = start + tag_name.len();
        search_from = after_tag;

        // `fragql` or `my_gql` are different identifiers
        if content[..start].chars().next_back().is_some_and(is_ident_char) {
            continue;
        }
        let rest = &content[after_tag..];
        let trimmed = rest.trim_start();
        if !trimmed.starts_with('`') {
            continue;
        }

        let body_start = after_tag + (rest.len() - trimmed.len()) + 1;
        let Some((source, consumed)) = template_body(&content[body_start..]) else {
            break;
        };
        let line = content[..body_start].matches('\n').count() + 1;
        if !source.trim().is_empty() {
            snippets.push(Snippet { source, line });
        }
        search_from = body_start + consumed;
    }
    snippets
}

/// Body of a template literal up to its closing backtick.
///
/// `${...}` interpolations become spaces (newlines kept, so line numbers
/// still line up). Returns the body and the bytes consumed, closing backtick
/// included. `None` if the literal is unterminated.
fn template_body(input: &str) -> Option<(String, usize)> {
    let mut body = String::with_capacity(input.len());
    let mut chars = input.char_indices().peekable();
    let mut depth = 0usize;

    while let Some((i, c)) = chars.next() {
        if depth > 0 {
            match c {
                '{' => depth += 1,
                '}' => depth -= 1,
                _ => {}
            }
            body.push(if c == '\n' { '\n' } else { ' ' });
            continue;
        }
        match c {
            '\\' => {
                if let Some((_, escaped)) = chars.next() {
                    body.push(escaped);
                }
            }
            '`' => return Some((body, i + 1)),
            '$' if matches!(chars.peek(), Some((_, '{'))) => {
                chars.next();
                depth = 1;
                body.push_str("  ");
            }
            _ => body.push(c),
        }
    }
    None
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}
