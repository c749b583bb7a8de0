//! Deciding what kind of token a run of buffered text is.
//!
//! Classifiers are tried in a fixed order and the first that accepts the text wins:
//! words (identifiers and keywords), then numbers, then operators, then strings.
//! Every classifier matches the whole text or nothing.

use super::tables::{is_keyword, is_operator};
use super::token::TokenKind;

/// A classifier returns the kind of the text if it recognizes all of it.
type Classifier = fn(&str) -> Option<TokenKind>;

const CLASSIFIERS: &[(&str, Classifier)] = &[
    ("word", classify_word),
    ("number", classify_number),
    ("operator", classify_operator),
    ("string", classify_string),
];

/// Classify the buffered text, or None if nothing recognizes it.
pub(crate) fn classify(text: &str) -> Option<TokenKind> {
    CLASSIFIERS.iter().find_map(|(name, classifier)| {
        let kind = classifier(text)?;
        tracing::trace!("{} classifier took {:?} as {:?}", name, text, kind);
        Some(kind)
    })
}

mod regex {
    use regex::Regex;
    use std::sync::OnceLock;

    pub(super) fn word() -> &'static Regex {
        static MATCH: OnceLock<Regex> = OnceLock::new();
        MATCH.get_or_init(|| {
            Regex::new(r"\A[A-Za-z_][A-Za-z0-9_]*\z").expect("could not compile regex for word")
        })
    }

    pub(super) fn number() -> &'static Regex {
        static MATCH: OnceLock<Regex> = OnceLock::new();
        MATCH.get_or_init(|| {
            // No sign, no exponent, and no leading zero unless the zero is the whole integer part.
            Regex::new(r"\A(?:[1-9][0-9]*|0)(?:\.[0-9]+)?\z")
                .expect("could not compile regex for number")
        })
    }
}

fn classify_word(text: &str) -> Option<TokenKind> {
    if !regex::word().is_match(text) {
        return None;
    }
    if is_keyword(text) {
        Some(TokenKind::Keyword)
    } else {
        Some(TokenKind::Identifier)
    }
}

fn classify_number(text: &str) -> Option<TokenKind> {
    regex::number()
        .is_match(text)
        .then_some(TokenKind::Literal)
}

fn classify_operator(text: &str) -> Option<TokenKind> {
    is_operator(text).then_some(TokenKind::Operator)
}

fn classify_string(text: &str) -> Option<TokenKind> {
    // A lone quote both starts and ends with a quote; it's still not a string.
    let quoted = text.len() >= 2 && text.starts_with('"') && text.ends_with('"');
    quoted.then_some(TokenKind::Literal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifier_order() {
        let names: Vec<&str> = CLASSIFIERS.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, ["word", "number", "operator", "string"]);
    }

    #[test]
    fn words() {
        for kw in ["if", "else", "elseif", "func", "return", "true", "false"] {
            assert_eq!(classify(kw), Some(TokenKind::Keyword), "{}", kw);
        }
        for ident in ["main", "a", "_", "_tmp", "a1", "snake_case_2", "If", "returns"] {
            assert_eq!(classify(ident), Some(TokenKind::Identifier), "{}", ident);
        }
    }

    #[test]
    fn numbers() {
        for num in ["0", "2", "10", "24601", "0.5", "3.14", "10.0"] {
            assert_eq!(classify(num), Some(TokenKind::Literal), "{}", num);
        }
        for not_num in ["007", "01.5", "1.", ".5", "1e10", "1.2.3", "-1", "+1"] {
            assert_eq!(classify_number(not_num), None, "{}", not_num);
        }
    }

    #[test]
    fn operators() {
        for op in ["+", "-", "*", "/", "=", "==", "!", "!=", "||", "&&", ">", ">=", "<", "<="] {
            assert_eq!(classify(op), Some(TokenKind::Operator), "{}", op);
        }
        for not_op in ["===", "=!", "|", "&", "<>", "+="] {
            assert_eq!(classify(not_op), None, "{}", not_op);
        }
    }

    #[test]
    fn strings() {
        for s in [r#""hello""#, r#""""#, r#""42""#, r#""if""#, r#""a"b""#] {
            assert_eq!(classify(s), Some(TokenKind::Literal), "{}", s);
        }
        for not_s in [r#"""#, r#""open"#, r#"close""#] {
            assert_eq!(classify(not_s), None, "{}", not_s);
        }
    }

    #[test]
    fn whole_text_only() {
        // Partial matches must not leak through: each of these contains something a
        // classifier would accept, but none is entirely one kind of token.
        for text in ["1a", "a-b", "a.b", "x==", "2+", "$", "a$b", "3.14abc"] {
            assert_eq!(classify(text), None, "{}", text);
        }
    }
}
