//! Route template compilation and matching.
//!
//! # Responsibilities
//! - Compile `/artist/<name>/` style templates into token lists
//! - Match urls anchored at both ends
//! - Extract placeholder captures in template order
//!
//! # Design Decisions
//! - No regex: literal segments compare byte-for-byte, so metacharacters in
//!   a rule (`.`, `+`, ...) match only themselves
//! - A placeholder captures one-or-more characters, greedily; backtracking
//!   keeps multi-placeholder rules unambiguous and anchored
//! - Compiling the same template twice yields equal patterns

/// One compiled segment of a route template.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    /// Text matched exactly as written.
    Literal(String),
    /// A `<name>` capture; matches one-or-more characters.
    Placeholder(String),
}

/// A compiled route template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    tokens: Vec<Token>,
}

impl RoutePattern {
    /// Compile a template. Every `<name>` span becomes a capture; everything
    /// else is literal text. An unterminated `<` is kept as literal text.
    pub fn compile(rule: &str) -> Self {
        let mut tokens = Vec::new();
        let mut rest = rule;
        while let Some(open) = rest.find('<') {
            let Some(span) = rest[open..].find('>') else {
                break;
            };
            if open > 0 {
                tokens.push(Token::Literal(rest[..open].to_string()));
            }
            tokens.push(Token::Placeholder(rest[open + 1..open + span].to_string()));
            rest = &rest[open + span + 1..];
        }
        if !rest.is_empty() {
            tokens.push(Token::Literal(rest.to_string()));
        }
        Self { tokens }
    }

    /// Number of placeholders in the template.
    pub fn placeholder_count(&self) -> usize {
        self.tokens
            .iter()
            .filter(|token| matches!(token, Token::Placeholder(_)))
            .count()
    }

    /// Whether `url` matches this pattern start-to-end.
    pub fn matches(&self, url: &str) -> bool {
        self.captures(url).is_some()
    }

    /// Match `url` start-to-end and return the captured placeholder values in
    /// template order, or `None` when the url does not fit the pattern.
    pub fn captures(&self, url: &str) -> Option<Vec<String>> {
        let mut captured = Vec::with_capacity(self.placeholder_count());
        if Self::match_tokens(&self.tokens, url, &mut captured) {
            Some(captured)
        } else {
            None
        }
    }

    fn match_tokens(tokens: &[Token], input: &str, captured: &mut Vec<String>) -> bool {
        let Some((token, rest)) = tokens.split_first() else {
            return input.is_empty();
        };
        match token {
            Token::Literal(literal) => match input.strip_prefix(literal.as_str()) {
                Some(tail) => Self::match_tokens(rest, tail, captured),
                None => false,
            },
            Token::Placeholder(_) => {
                // Greedy: try the longest capture first and shrink until the
                // remaining tokens match the remaining input.
                for split in (1..=input.len()).rev() {
                    if !input.is_char_boundary(split) {
                        continue;
                    }
                    captured.push(input[..split].to_string());
                    if Self::match_tokens(rest, &input[split..], captured) {
                        return true;
                    }
                    captured.pop();
                }
                false
            }
        }
    }
}
