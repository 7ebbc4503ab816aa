//! Integration tests for the public lexing API.
//!
//! These tests run whole programs through `tokenize` and check the
//! properties every successful lex must have: the tokens cover the input
//! without gaps and give it back byte-for-byte.

use lisp_lexer::{
    errors::errors::Error,
    lexer::{
        lexer::Scanner,
        printer::{pretty_print, reconstruct, significant},
        tokens::{Token, TokenKind},
    },
    tokenize, LexerConfig, SymbolPolicy,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

const PROGRAM: &str = r#"; factorial, the long way
(define (fact n)
  (if (= n 0)
      1
      (* n (fact (- n 1)))))

(display "fact 10 = \"")
(display (fact 10)) ; 3628800
'(1 -2 three)
"#;

fn assert_contiguous(source: &str, tokens: &[Token]) {
    if let Some(first) = tokens.first() {
        assert_eq!(first.offset, 0);
    }
    for pair in tokens.windows(2) {
        assert_eq!(pair[0].offset + pair[0].text.len(), pair[1].offset);
    }
    assert_eq!(tokens.iter().map(|t| t.text.len()).sum::<usize>(), source.len());
    assert_eq!(reconstruct(tokens), source);
}

#[test]
fn test_tokenize_program() {
    let tokens = tokenize(PROGRAM).unwrap();

    assert_contiguous(PROGRAM, &tokens);
    assert!(tokens.iter().all(|t| !t.kind.is_reserved()));

    let comments: Vec<&str> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Comment)
        .map(|t| t.text.as_str())
        .collect();
    assert_eq!(comments, vec!["; factorial, the long way", "; 3628800"]);

    let strings: Vec<&str> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::String)
        .map(|t| t.text.as_str())
        .collect();
    assert_eq!(strings, vec![r#""fact 10 = \"""#]);

    let integers: Vec<&str> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Integer)
        .map(|t| t.text.as_str())
        .collect();
    assert_eq!(integers, vec!["0", "1", "1", "10", "1", "-2"]);

    let opens = tokens.iter().filter(|t| t.kind == TokenKind::OpenParen).count();
    let closes = tokens.iter().filter(|t| t.kind == TokenKind::CloseParen).count();
    assert_eq!(opens, closes);
}

#[test]
fn test_pretty_print_program() {
    let tokens = tokenize("(define (sq x)\n  ; body\n  (* x x))").unwrap();

    assert_eq!(pretty_print(&tokens), "(define (sq x) (* x x))");
    assert_eq!(significant(&tokens).count(), 11);
}

#[test]
fn test_error_points_at_offending_character() {
    let source = "(display x)\n(foo :key)";
    let error = tokenize(source).unwrap_err();

    assert_eq!(
        error,
        Error::NoMatch {
            offset: 17,
            found: ':'
        }
    );
    assert_eq!(error.get_offset(), Some(17));
    assert_eq!(&source[17..], ":key)");
    assert_eq!(error.get_tip().to_string(), "Unexpected character `:`");
}

#[test]
fn test_policies_agree_without_trailing_parens() {
    let permissive =
        Scanner::with_config(&LexerConfig::default().with_symbol_policy(SymbolPolicy::Permissive))
            .unwrap();
    let source = "(a b c )";

    assert_eq!(permissive.lex(source).unwrap(), tokenize(source).unwrap());
}

fn atom() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("("),
        Just(")"),
        Just("'"),
        Just("foo"),
        Just("set!"),
        Just("λ"),
        Just("0"),
        Just("42"),
        Just("-7"),
        Just("-0"),
        Just(r#""str""#),
        Just(r#""esc \" \n""#),
        Just("; note"),
    ]
}

fn separator() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just(" "), Just("\n"), Just("\t"), Just("\r\n")]
}

proptest! {
    #[test]
    fn prop_generated_programs_reconstruct(
        parts in prop::collection::vec((atom(), separator()), 0..40)
    ) {
        let source: String = parts.iter().map(|(a, s)| format!("{}{}", a, s)).collect();
        let tokens = tokenize(&source).unwrap();

        prop_assert_eq!(reconstruct(&tokens), source.clone());
        for pair in tokens.windows(2) {
            prop_assert_eq!(pair[0].end(), pair[1].offset);
        }
    }

    #[test]
    fn prop_arbitrary_input_is_contiguous_or_fails_cleanly(source in "\\PC{0,64}") {
        match tokenize(&source) {
            Ok(tokens) => {
                prop_assert_eq!(reconstruct(&tokens), source.clone());
                prop_assert!(tokens.iter().all(|t| !t.text.is_empty()));
            }
            Err(Error::NoMatch { offset, found }) => {
                prop_assert!(source.is_char_boundary(offset));
                prop_assert_eq!(source[offset..].chars().next(), Some(found));
            }
            Err(other) => prop_assert!(false, "unexpected error {:?}", other),
        }
    }
}
