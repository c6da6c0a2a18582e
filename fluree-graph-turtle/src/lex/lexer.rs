//! Turtle / N-Triples lexer implementation using winnow.
//!
//! Tokenizes input into a stream of tokens with source spans. Fails fast on
//! the first lexical error with a line/column diagnostic. Numeric literals
//! keep their lexical form; conversion is left to the datatype registry.

use std::sync::Arc;

use winnow::ascii::digit1;
use winnow::combinator::{alt, delimited, opt, peek, preceded};
use winnow::error::{ContextError, ErrMode};
use winnow::stream::{AsChar, Location, Stream};
use winnow::token::{any, one_of, take_till, take_while};
use winnow::{LocatingSlice, ModalResult, Parser};

use super::chars::*;
use super::token::{Token, TokenKind};
use crate::error::{Result, TurtleError};

/// Input type for the lexer - tracks position for spans.
pub type Input<'a> = LocatingSlice<&'a str>;

fn backtrack<T>() -> ModalResult<T> {
    Err(ErrMode::Backtrack(ContextError::new()))
}

/// Lexer over one document.
pub struct Lexer<'a> {
    input: &'a str,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input }
    }

    /// Tokenize the entire input, ending with an `Eof` token.
    pub fn tokenize(self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        let mut input = LocatingSlice::new(self.input);

        loop {
            skip_ws_and_comments(&mut input);

            let start = input.current_token_start();
            if input.is_empty() {
                tokens.push(Token::new(TokenKind::Eof, start, start));
                return Ok(tokens);
            }

            match next_token(&mut input) {
                Ok(kind) => tokens.push(Token::new(kind, start, input.current_token_start())),
                Err(ErrMode::Cut(_)) => {
                    let at = input.current_token_start();
                    return Err(self.located_error(at, "invalid escape sequence".to_string()));
                }
                Err(_) => return Err(self.make_error(start)),
            }
        }
    }

    fn make_error(&self, position: usize) -> TurtleError {
        let bad_char = self.input[position..].chars().next().unwrap_or('?');
        let what = match bad_char {
            '"' | '\'' => "unterminated string literal".to_string(),
            '<' => "invalid or unterminated IRI".to_string(),
            c if !c.is_ascii() && !is_pn_chars_base(c) => {
                format!("unexpected character '{}' (U+{:04X})", c.escape_unicode(), c as u32)
            }
            c => format!("unexpected character '{}'", c),
        };
        self.located_error(position, what)
    }

    fn located_error(&self, position: usize, what: String) -> TurtleError {
        let (line, col) = line_col(self.input, position);
        let line_content = self.input.lines().nth(line - 1).unwrap_or("");
        let pointer = " ".repeat(col.saturating_sub(1));

        TurtleError::Lexer {
            position,
            message: format!(
                "{} at line {}, column {}\n  |\n{} | {}\n  | {}^",
                what, line, col, line, line_content, pointer
            ),
        }
    }
}

/// Drop one leading U+FEFF byte order mark.
pub fn strip_bom(source: &str) -> &str {
    source.strip_prefix('\u{feff}').unwrap_or(source)
}

/// Convert a byte position to (line, column), 1-indexed.
pub fn line_col(source: &str, position: usize) -> (usize, usize) {
    let before = &source[..position.min(source.len())];
    let line = before.matches('\n').count() + 1;
    let col = before
        .rfind('\n')
        .map_or(before.chars().count(), |nl| before[nl + 1..].chars().count())
        + 1;
    (line, col)
}

fn skip_ws_and_comments(input: &mut Input<'_>) {
    loop {
        let _: ModalResult<&str> = take_while(0.., is_ws).parse_next(input);
        if !input.starts_with('#') {
            break;
        }
        let _: ModalResult<&str> = take_till(0.., |c| c == '\n' || c == '\r').parse_next(input);
    }
}

fn next_token(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    alt((
        parse_double_caret,
        parse_iri_ref,
        // blank node labels must win over prefixed names
        parse_blank_node_label,
        parse_anon,
        parse_nil,
        parse_at_directive,
        parse_default_prefix,
        parse_prefixed_name_or_keyword,
        parse_string_literal,
        parse_number,
        parse_punctuation,
    ))
    .parse_next(input)
}

// =============================================================================
// IRIs
// =============================================================================

/// `<...>`; the content may be empty (reference to the base).
fn parse_iri_ref(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    delimited('<', parse_iri_content, '>')
        .map(|s: String| TokenKind::Iri(Arc::from(s)))
        .parse_next(input)
}

fn parse_iri_content(input: &mut Input<'_>) -> ModalResult<String> {
    let mut result = String::new();
    loop {
        let chunk: &str = take_while(0.., is_iri_char).parse_next(input)?;
        result.push_str(chunk);

        if input.is_empty() || input.starts_with('>') {
            return Ok(result);
        }
        if !input.starts_with('\\') {
            return backtrack();
        }
        '\\'.parse_next(input)?;
        match parse_unicode_escape(input)? {
            Some(c) => result.push(c),
            None => return backtrack(),
        }
    }
}

/// `uXXXX` or `UXXXXXXXX` (the backslash is already consumed).
fn parse_unicode_escape(input: &mut Input<'_>) -> ModalResult<Option<char>> {
    let width = match one_of(['u', 'U']).parse_next(input)? {
        'u' => 4,
        _ => 8,
    };
    let hex: &str = take_while(width..=width, AsChar::is_hex_digit).parse_next(input)?;
    Ok(u32::from_str_radix(hex, 16).ok().and_then(char::from_u32))
}

// =============================================================================
// Directives and language tags
// =============================================================================

fn parse_at_directive(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    '@'.parse_next(input)?;
    let word: &str = (
        take_while(1.., |c: char| c.is_ascii_alphabetic()),
        take_while(0.., |c: char| c.is_ascii_alphanumeric() || c == '-'),
    )
        .take()
        .parse_next(input)?;

    Ok(match word {
        "prefix" => TokenKind::Prefix { sparql: false },
        "base" => TokenKind::Base { sparql: false },
        _ => TokenKind::LangTag(Arc::from(word)),
    })
}

// =============================================================================
// Prefixed names and keywords
// =============================================================================

/// `:local` or `:`
fn parse_default_prefix(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    ':'.parse_next(input)?;
    Ok(match opt(parse_pn_local).parse_next(input)? {
        Some(local) => TokenKind::PrefixedName {
            prefix: Arc::from(""),
            local: Arc::from(local),
        },
        None => TokenKind::PrefixedName {
            prefix: Arc::from(""),
            local: Arc::from(""),
        },
    })
}

/// `prefix:local`, `prefix:`, or one of `a`, `true`, `false`, `PREFIX`, `BASE`.
fn parse_prefixed_name_or_keyword(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    let start = input.checkpoint();

    let first: char = any.parse_next(input)?;
    if !is_pn_chars_u(first) {
        input.reset(&start);
        return backtrack();
    }
    let mut word = String::from(first);
    take_dotted(input, &mut word, is_pn_chars)?;

    if peek(opt(':')).parse_next(input)?.is_some() {
        if !is_pn_prefix_start(first) {
            input.reset(&start);
            return backtrack();
        }
        ':'.parse_next(input)?;
        return Ok(match opt(parse_pn_local).parse_next(input)? {
            Some(local) => TokenKind::PrefixedName {
                prefix: Arc::from(word),
                local: Arc::from(local),
            },
            None => TokenKind::PrefixedName {
                prefix: Arc::from(word),
                local: Arc::from(""),
            },
        });
    }

    match word.as_str() {
        "a" => Ok(TokenKind::KwA),
        "true" => Ok(TokenKind::Boolean(true)),
        "false" => Ok(TokenKind::Boolean(false)),
        "PREFIX" | "prefix" => Ok(TokenKind::Prefix { sparql: true }),
        "BASE" | "base" => Ok(TokenKind::Base { sparql: true }),
        _ => {
            input.reset(&start);
            backtrack()
        }
    }
}

/// Consume chars matching `pred`, allowing interior (never trailing) dots.
fn take_dotted(
    input: &mut Input<'_>,
    out: &mut String,
    pred: impl Fn(char) -> bool + Copy,
) -> ModalResult<()> {
    loop {
        let chunk: &str = take_while(0.., pred).parse_next(input)?;
        out.push_str(chunk);

        let continues = input.starts_with('.')
            && input.as_ref()[1..]
                .chars()
                .next()
                .is_some_and(|c| pred(c) || c == '%' || c == '\\');
        if !continues {
            return Ok(());
        }
        '.'.parse_next(input)?;
        out.push('.');
    }
}

/// Local part of a prefixed name, with `%XX` and `\` escapes.
fn parse_pn_local(input: &mut Input<'_>) -> ModalResult<String> {
    let first = input.chars().next();
    if !first.is_some_and(|c| is_pn_local_start(c) || c == '%' || c == '\\') {
        return backtrack();
    }

    let local_char = |c: char| is_pn_chars(c) || c == ':';
    let mut result = String::new();
    loop {
        take_dotted(input, &mut result, local_char)?;

        if input.starts_with('%') {
            '%'.parse_next(input)?;
            let hex: &str = take_while(2..=2, AsChar::is_hex_digit).parse_next(input)?;
            result.push('%');
            result.push_str(hex);
        } else if input.starts_with('\\') {
            '\\'.parse_next(input)?;
            let escaped: char = any.parse_next(input)?;
            if !"_~.-!$&'()*+,;=/?#@%".contains(escaped) {
                return backtrack();
            }
            result.push(escaped);
        } else {
            break;
        }
    }

    if result.is_empty() {
        return backtrack();
    }
    Ok(result)
}

// =============================================================================
// Blank nodes
// =============================================================================

/// `_:name`
fn parse_blank_node_label(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    preceded("_:", parse_blank_node_name)
        .map(|name: String| TokenKind::BlankNodeLabel(Arc::from(name)))
        .parse_next(input)
}

fn parse_blank_node_name(input: &mut Input<'_>) -> ModalResult<String> {
    let first: char = any
        .verify(|c: &char| is_pn_chars_u(*c) || c.is_ascii_digit())
        .parse_next(input)?;
    let mut name = String::from(first);
    take_dotted(input, &mut name, is_pn_chars)?;
    Ok(name)
}

/// `[]`
fn parse_anon(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    ('[', take_while(0.., is_ws), ']')
        .map(|_| TokenKind::Anon)
        .parse_next(input)
}

/// `()`
fn parse_nil(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    ('(', take_while(0.., is_ws), ')')
        .map(|_| TokenKind::Nil)
        .parse_next(input)
}

// =============================================================================
// String literals
// =============================================================================

fn parse_string_literal(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    alt((
        delimited("\"\"\"", long_double_body, "\"\"\""),
        delimited("'''", long_single_body, "'''"),
        delimited('"', short_double_body, '"'),
        delimited('\'', short_single_body, '\''),
    ))
    .map(|s: String| TokenKind::String(Arc::from(s)))
    .parse_next(input)
}

fn long_double_body(input: &mut Input<'_>) -> ModalResult<String> {
    string_body(input, '"', true)
}

fn long_single_body(input: &mut Input<'_>) -> ModalResult<String> {
    string_body(input, '\'', true)
}

fn short_double_body(input: &mut Input<'_>) -> ModalResult<String> {
    string_body(input, '"', false)
}

fn short_single_body(input: &mut Input<'_>) -> ModalResult<String> {
    string_body(input, '\'', false)
}

/// String content up to (not including) the closing quote(s).
///
/// Short strings may not span lines; long strings may contain lone quotes.
fn string_body(input: &mut Input<'_>, quote: char, long: bool) -> ModalResult<String> {
    let closing: String = std::iter::repeat(quote).take(if long { 3 } else { 1 }).collect();
    let mut result = String::new();

    loop {
        let chunk: &str = take_while(0.., |c: char| {
            c != quote && c != '\\' && (long || (c != '\n' && c != '\r'))
        })
        .parse_next(input)?;
        result.push_str(chunk);

        if input.is_empty() || input.starts_with(closing.as_str()) {
            return Ok(result);
        }
        if input.starts_with('\\') {
            result.push(parse_escape_char(input)?);
        } else if long && input.starts_with(quote) {
            result.push(any.parse_next(input)?);
        } else {
            return Ok(result);
        }
    }
}

/// Backslash escape inside a string. A bad escape is fatal and leaves the
/// input at its backslash.
fn parse_escape_char(input: &mut Input<'_>) -> ModalResult<char> {
    let checkpoint = input.checkpoint();
    '\\'.parse_next(input)?;
    escape_body(input).map_err(|_| {
        input.reset(&checkpoint);
        ErrMode::Cut(ContextError::new())
    })
}

fn escape_body(input: &mut Input<'_>) -> ModalResult<char> {
    if input.starts_with('u') || input.starts_with('U') {
        return match parse_unicode_escape(input)? {
            Some(c) => Ok(c),
            None => backtrack(),
        };
    }
    match any.parse_next(input)? {
        't' => Ok('\t'),
        'b' => Ok('\x08'),
        'n' => Ok('\n'),
        'r' => Ok('\r'),
        'f' => Ok('\x0C'),
        '"' => Ok('"'),
        '\'' => Ok('\''),
        '\\' => Ok('\\'),
        _ => backtrack(),
    }
}

// =============================================================================
// Numbers
// =============================================================================

fn parse_number(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    alt((parse_double, parse_decimal, parse_integer)).parse_next(input)
}

fn parse_integer(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    let lexical: &str = (opt(one_of(['+', '-'])), digit1).take().parse_next(input)?;

    // `1.5` is a decimal, `1.` is an integer followed by a statement terminator
    if input.starts_with('.') && input.as_ref()[1..].starts_with(|c: char| c.is_ascii_digit()) {
        return backtrack();
    }
    Ok(TokenKind::Integer(Arc::from(lexical)))
}

fn parse_decimal(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    let lexical: &str = (opt(one_of(['+', '-'])), opt(digit1), '.', digit1)
        .take()
        .parse_next(input)?;
    if peek(opt(one_of(['e', 'E']))).parse_next(input)?.is_some() {
        return backtrack();
    }
    Ok(TokenKind::Decimal(Arc::from(lexical)))
}

fn parse_double(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    let lexical: &str = (
        opt(one_of(['+', '-'])),
        alt(((digit1, '.', opt(digit1)).take(), ('.', digit1).take(), digit1)),
        one_of(['e', 'E']),
        opt(one_of(['+', '-'])),
        digit1,
    )
        .take()
        .parse_next(input)?;
    Ok(TokenKind::Double(Arc::from(lexical)))
}

// =============================================================================
// Punctuation
// =============================================================================

fn parse_double_caret(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    "^^".map(|_| TokenKind::DoubleCaret).parse_next(input)
}

fn parse_punctuation(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    any.verify_map(|c: char| ".,;[]()".contains(c).then_some(TokenKind::Punct(c)))
        .parse_next(input)
}

/// Tokenize a Turtle or N-Triples document.
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    Lexer::new(input).tokenize()
}
