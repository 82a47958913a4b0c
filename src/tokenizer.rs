// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! SQL Tokenizer
//!
//! The tokenizer (a.k.a. lexer) converts a string into a sequence of
//! position-tagged tokens. It is the front end of a SQL language server:
//! downstream parsing, completion, hover, and diagnostics all consume its
//! output, so every token carries a precise half-open `[from, to)` source
//! range in addition to its kind and value.

use std::error::Error;
use std::fmt;

use log::{debug, trace};

use crate::char_source::CharSource;
use crate::dialect::{Dialect, KeywordKind};
use crate::position::{Position, PositionCursor};

/// The closed set of token kinds this tokenizer ever produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Whitespace,
    Comment,
    Number,
    /// A single character that didn't match any other production.
    Char,
    SingleQuotedString,
    NationalStringLiteral,
    /// A keyword or an optionally quoted identifier; see [`Word`].
    SQLKeyword,
    Comma,
    Semicolon,
    Colon,
    DoubleColon,
    Period,
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Plus,
    Minus,
    Mult,
    Div,
    Mod,
    Eq,
    Neq,
    Lt,
    Gt,
    LtEq,
    GtEq,
    Backslash,
    Ampersand,
    Pipe,
    Caret,
    Tilde,
    ExclamationMark,
    AtSign,
    Placeholder,
}

impl TokenKind {
    /// The canonical spelling for kinds with exactly one surface form.
    ///
    /// Kinds whose text depends on the matched lexeme (`Whitespace`,
    /// `Comment`, `Number`, `Char`, the string/keyword kinds, and `Neq`,
    /// which may be spelled `<>` or `!=`) return `None` — their text lives
    /// in the token's `value` instead.
    pub fn fixed_print_form(&self) -> Option<&'static str> {
        use TokenKind::*;
        Some(match self {
            Comma => ",",
            Semicolon => ";",
            Colon => ":",
            DoubleColon => "::",
            Period => ".",
            LParen => "(",
            RParen => ")",
            LBracket => "[",
            RBracket => "]",
            LBrace => "{",
            RBrace => "}",
            Plus => "+",
            Minus => "-",
            Mult => "*",
            Div => "/",
            Mod => "%",
            Eq => "=",
            Lt => "<",
            Gt => ">",
            LtEq => "<=",
            GtEq => ">=",
            Backslash => "\\",
            Ampersand => "&",
            Pipe => "|",
            Caret => "^",
            Tilde => "~",
            ExclamationMark => "!",
            AtSign => "@",
            Placeholder => "?",
            _ => return None,
        })
    }
}

/// How an identifier was quoted in source, if at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuoteStyle {
    None,
    DoubleQuote,
    Backtick,
    Bracket,
}

/// The structured payload of an `SQLKeyword`-kind token: a keyword or an
/// (optionally quoted) identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    /// Surface form as it appeared in the source, original case, quotes
    /// stripped.
    pub value: String,
    /// Upper-cased canonical form used for dialect lookup. Always
    /// upper-cased, even when the word was quoted.
    pub keyword: String,
    pub quote_style: QuoteStyle,
    /// The dialect's classification of `keyword`.
    pub kind: KeywordKind,
}

/// Whether a comment used `--` or `/* */` delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommentStyle {
    Line,
    Block,
}

/// The payload of a `Comment`-kind token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    /// Content with the `--`/`/* */` markers removed.
    pub text: String,
    pub style: CommentStyle,
}

/// A token's content: a plain lexeme, a structured [`Word`], or a
/// structured [`Comment`]. A sum type rather than a single `String` field,
/// so each kind carries exactly the information needed to reconstruct its
/// source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenValue {
    Plain(String),
    Word(Word),
    Comment(Comment),
}

/// A classified lexeme with its half-open source range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    pub from: Position,
    pub to: Position,
}

impl Token {
    /// Reconstructs this token's exact source text, restoring the
    /// delimiters that were stripped from string/comment/quoted-identifier
    /// content when the token was produced.
    pub fn lexeme(&self) -> String {
        match &self.value {
            TokenValue::Plain(s) => match self.kind {
                TokenKind::SingleQuotedString => format!("'{}'", s),
                TokenKind::NationalStringLiteral => format!("N'{}'", s),
                _ => s.clone(),
            },
            TokenValue::Word(w) => match w.quote_style {
                QuoteStyle::None => w.value.clone(),
                QuoteStyle::DoubleQuote => format!("\"{}\"", w.value),
                QuoteStyle::Backtick => format!("`{}`", w.value),
                QuoteStyle::Bracket => format!("[{}]", w.value),
            },
            TokenValue::Comment(c) => match c.style {
                CommentStyle::Line => format!("--{}", c.text),
                CommentStyle::Block => format!("/*{}*/", c.text),
            },
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.lexeme())
    }
}

/// The specific lexical fault that stopped scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenizerErrorKind {
    UnterminatedStringLiteral,
    UnterminatedBlockComment,
    UnterminatedQuotedIdentifier,
}

/// A fatal lexical error. Scanning halts; any tokens already produced for
/// the current `tokenize()` call are discarded by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizerError {
    pub kind: TokenizerErrorKind,
    pub message: String,
    /// Cursor position at which scanning stopped.
    pub pos: Position,
}

impl fmt::Display for TokenizerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}: {} (at {})", self.kind, self.message, self.pos)
    }
}

impl Error for TokenizerError {}

/// Drives a [`CharSource`] through the lexical productions, guided by a
/// [`Dialect`], and emits one [`Token`] per call to `next_token`.
///
/// The Scanner is effectively stateless between tokens: each call begins
/// fresh from the current source position. States used internally within a
/// single production (e.g. "inside a block comment") are local to that
/// production's method and never escape it.
pub(crate) struct Scanner<'a> {
    dialect: &'a dyn Dialect,
    source: CharSource<'a>,
    cursor: PositionCursor,
}

impl<'a> Scanner<'a> {
    fn new(dialect: &'a dyn Dialect, input: &'a str) -> Self {
        Scanner {
            dialect,
            source: CharSource::new(input),
            cursor: PositionCursor::new(),
        }
    }

    fn pos(&self) -> Position {
        self.cursor.current()
    }

    /// Consume and return the next character, normalizing `\r` and `\r\n`
    /// into a single logical `\n` that the position cursor advances over
    /// exactly once. This normalization applies everywhere the Scanner
    /// consumes a character — inside strings, comments and quoted
    /// identifiers too — not just at top-level whitespace dispatch, since
    /// the cursor must never observe a raw `\r`.
    fn bump(&mut self) -> Option<char> {
        match self.source.next() {
            Some('\r') => {
                if self.source.peek() == Some('\n') {
                    self.source.next();
                }
                self.cursor.advance('\n');
                Some('\n')
            }
            Some(ch) => {
                self.cursor.advance(ch);
                Some(ch)
            }
            None => None,
        }
    }

    /// Get the next token, or `None` at end of input.
    fn next_token(&mut self) -> Result<Option<Token>, TokenizerError> {
        let token = match self.source.peek() {
            None => return Ok(None),
            Some(' ') => Some(self.scan_fixed_whitespace(" ")),
            Some('\t') => Some(self.scan_fixed_whitespace("\t")),
            Some('\n') | Some('\r') => Some(self.scan_newline_whitespace()),
            Some('N') => self.scan_maybe_national_string()?,
            Some('\'') => Some(self.scan_single_quoted_string()?),
            Some('"') => Some(self.scan_quoted_word(QuoteStyle::DoubleQuote, '"')?),
            Some('`') => Some(self.scan_quoted_word(QuoteStyle::Backtick, '`')?),
            Some('[') => Some(self.scan_bracket()?),
            Some(ch) if self.dialect.is_identifier_start(ch) => Some(self.scan_word()),
            Some(ch) if ch.is_ascii_digit() => Some(self.scan_number()),
            Some('-') => Some(self.scan_minus()?),
            Some('/') => Some(self.scan_slash()?),
            Some('.') => Some(self.scan_dot()),
            Some(':') => Some(self.scan_colon()),
            Some('<') => Some(self.scan_lt()),
            Some('>') => Some(self.scan_gt()),
            Some('!') => Some(self.scan_bang()),
            Some(',') => Some(self.simple_token(TokenKind::Comma)),
            Some(';') => Some(self.simple_token(TokenKind::Semicolon)),
            Some('(') => Some(self.simple_token(TokenKind::LParen)),
            Some(')') => Some(self.simple_token(TokenKind::RParen)),
            Some('{') => Some(self.simple_token(TokenKind::LBrace)),
            Some('}') => Some(self.simple_token(TokenKind::RBrace)),
            Some(']') => Some(self.simple_token(TokenKind::RBracket)),
            Some('+') => Some(self.simple_token(TokenKind::Plus)),
            Some('*') => Some(self.simple_token(TokenKind::Mult)),
            Some('%') => Some(self.simple_token(TokenKind::Mod)),
            Some('=') => Some(self.simple_token(TokenKind::Eq)),
            Some('\\') => Some(self.simple_token(TokenKind::Backslash)),
            Some('&') => Some(self.simple_token(TokenKind::Ampersand)),
            Some('|') => Some(self.simple_token(TokenKind::Pipe)),
            Some('^') => Some(self.simple_token(TokenKind::Caret)),
            Some('~') => Some(self.simple_token(TokenKind::Tilde)),
            Some('@') => Some(self.simple_token(TokenKind::AtSign)),
            Some('?') => Some(self.simple_token(TokenKind::Placeholder)),
            Some(other) => Some(self.scan_char(other)),
        };
        if let Some(ref t) = token {
            trace!("scanned {:?} {}..{}", t.kind, t.from, t.to);
        }
        Ok(token)
    }

    fn scan_fixed_whitespace(&mut self, lexeme: &str) -> Token {
        let from = self.pos();
        self.bump();
        let to = self.pos();
        Token {
            kind: TokenKind::Whitespace,
            value: TokenValue::Plain(lexeme.to_string()),
            from,
            to,
        }
    }

    /// `\n`, `\r`, and `\r\n` all collapse to a single `Whitespace("\n")`
    /// token, courtesy of `bump`'s normalization.
    fn scan_newline_whitespace(&mut self) -> Token {
        let from = self.pos();
        self.bump();
        let to = self.pos();
        Token {
            kind: TokenKind::Whitespace,
            value: TokenValue::Plain("\n".to_string()),
            from,
            to,
        }
    }

    fn scan_maybe_national_string(&mut self) -> Result<Option<Token>, TokenizerError> {
        let from = self.pos();
        let n = self.bump().expect("dispatch guaranteed a character");
        if self.source.peek() == Some('\'') {
            Ok(Some(self.finish_single_quoted_string(
                from,
                TokenKind::NationalStringLiteral,
            )?))
        } else {
            Ok(Some(self.finish_word(from, n)))
        }
    }

    fn scan_word(&mut self) -> Token {
        let from = self.pos();
        let first = self.bump().expect("dispatch guaranteed a character");
        self.finish_word(from, first)
    }

    fn finish_word(&mut self, from: Position, first_char: char) -> Token {
        let mut surface = String::new();
        surface.push(first_char);
        while let Some(ch) = self.source.peek() {
            if self.dialect.is_identifier_part(ch) {
                surface.push(ch);
                self.bump();
            } else {
                break;
            }
        }
        let to = self.pos();
        let keyword = surface.to_uppercase();
        let kind = self.dialect.classify(&keyword);
        Token {
            kind: TokenKind::SQLKeyword,
            value: TokenValue::Word(Word {
                value: surface,
                keyword,
                quote_style: QuoteStyle::None,
                kind,
            }),
            from,
            to,
        }
    }

    fn scan_single_quoted_string(&mut self) -> Result<Token, TokenizerError> {
        let from = self.pos();
        self.finish_single_quoted_string(from, TokenKind::SingleQuotedString)
    }

    /// Consume a `'...'` (or `N'...'`) body; the opening `'` has not yet
    /// been consumed when this is called. No escape sequences are
    /// recognized — the first `'` encountered always terminates the
    /// string.
    fn finish_single_quoted_string(
        &mut self,
        from: Position,
        kind: TokenKind,
    ) -> Result<Token, TokenizerError> {
        self.bump(); // opening quote
        let mut s = String::new();
        loop {
            match self.source.peek() {
                Some('\'') => {
                    self.bump();
                    break;
                }
                Some(_) => {
                    s.push(self.bump().expect("peeked Some"));
                }
                None => {
                    let pos = self.pos();
                    debug!("unterminated string literal, from {} to EOF at {}", from, pos);
                    return Err(TokenizerError {
                        kind: TokenizerErrorKind::UnterminatedStringLiteral,
                        message: format!("expected closing ' before EOF (string started at {})", from),
                        pos,
                    });
                }
            }
        }
        let to = self.pos();
        Ok(Token {
            kind,
            value: TokenValue::Plain(s),
            from,
            to,
        })
    }

    /// Consume a `"..."` or `` `...` `` quoted identifier; `closing` is the
    /// matching delimiter for `quote_style`.
    fn scan_quoted_word(&mut self, quote_style: QuoteStyle, closing: char) -> Result<Token, TokenizerError> {
        let from = self.pos();
        self.bump(); // opening delimiter
        let mut s = String::new();
        loop {
            match self.source.peek() {
                Some(ch) if ch == closing => {
                    self.bump();
                    break;
                }
                Some(_) => {
                    s.push(self.bump().expect("peeked Some"));
                }
                None => {
                    let pos = self.pos();
                    debug!(
                        "unterminated quoted identifier, from {} to EOF at {}",
                        from, pos
                    );
                    return Err(TokenizerError {
                        kind: TokenizerErrorKind::UnterminatedQuotedIdentifier,
                        message: format!(
                            "expected closing '{}' before EOF (identifier started at {})",
                            closing, from
                        ),
                        pos,
                    });
                }
            }
        }
        let to = self.pos();
        let keyword = s.to_uppercase();
        let kind = self.dialect.classify(&keyword);
        Ok(Token {
            kind: TokenKind::SQLKeyword,
            value: TokenValue::Word(Word {
                value: s,
                keyword,
                quote_style,
                kind,
            }),
            from,
            to,
        })
    }

    /// `[` starts a bracket-quoted identifier only if immediately followed
    /// by an identifier-part character; otherwise it is plain punctuation.
    /// Once started, a missing closing `]` before EOF is a fatal
    /// `UnterminatedQuotedIdentifier` (spec.md's Design Notes resolve the
    /// ambiguity this way).
    fn scan_bracket(&mut self) -> Result<Token, TokenizerError> {
        let from = self.pos();
        self.bump(); // '['
        match self.source.peek() {
            Some(ch) if self.dialect.is_identifier_part(ch) => {
                let mut s = String::new();
                loop {
                    match self.source.peek() {
                        Some(']') => {
                            self.bump();
                            break;
                        }
                        Some(_) => {
                            s.push(self.bump().expect("peeked Some"));
                        }
                        None => {
                            let pos = self.pos();
                            debug!(
                                "unterminated bracket-quoted identifier, from {} to EOF at {}",
                                from, pos
                            );
                            return Err(TokenizerError {
                                kind: TokenizerErrorKind::UnterminatedQuotedIdentifier,
                                message: format!(
                                    "expected closing ] before EOF (identifier started at {})",
                                    from
                                ),
                                pos,
                            });
                        }
                    }
                }
                let to = self.pos();
                let keyword = s.to_uppercase();
                let kind = self.dialect.classify(&keyword);
                Ok(Token {
                    kind: TokenKind::SQLKeyword,
                    value: TokenValue::Word(Word {
                        value: s,
                        keyword,
                        quote_style: QuoteStyle::Bracket,
                        kind,
                    }),
                    from,
                    to,
                })
            }
            _ => {
                let to = self.pos();
                Ok(Token {
                    kind: TokenKind::LBracket,
                    value: TokenValue::Plain("[".to_string()),
                    from,
                    to,
                })
            }
        }
    }

    /// `digit+ ('.' digit+)?`. Exponent notation is not recognized; sign
    /// is never part of the literal (`-1` lexes as `Minus` then
    /// `Number("1")`).
    fn scan_number(&mut self) -> Token {
        let from = self.pos();
        let mut s = String::new();
        while let Some(ch) = self.source.peek() {
            if ch.is_ascii_digit() {
                s.push(ch);
                self.bump();
            } else {
                break;
            }
        }
        // A '.' is only ever part of the number if at least one digit
        // follows it; peek past it without disturbing the cursor so a
        // bare trailing '.' (e.g. "1.") can be put back for the next
        // token to see as `Period`.
        if self.source.peek() == Some('.') {
            let dot = self.source.next().expect("peeked Some");
            match self.source.peek() {
                Some(d) if d.is_ascii_digit() => {
                    self.cursor.advance(dot);
                    s.push('.');
                    while let Some(ch) = self.source.peek() {
                        if ch.is_ascii_digit() {
                            s.push(ch);
                            self.bump();
                        } else {
                            break;
                        }
                    }
                }
                _ => self.source.unread(dot),
            }
        }
        let to = self.pos();
        Token {
            kind: TokenKind::Number,
            value: TokenValue::Plain(s),
            from,
            to,
        }
    }

    /// A bare `.` is `Period`; `.` followed by a digit starts a `Number`.
    fn scan_dot(&mut self) -> Token {
        let from = self.pos();
        self.bump(); // '.'
        match self.source.peek() {
            Some(ch) if ch.is_ascii_digit() => {
                let mut s = String::from(".");
                while let Some(ch) = self.source.peek() {
                    if ch.is_ascii_digit() {
                        s.push(ch);
                        self.bump();
                    } else {
                        break;
                    }
                }
                let to = self.pos();
                Token {
                    kind: TokenKind::Number,
                    value: TokenValue::Plain(s),
                    from,
                    to,
                }
            }
            _ => {
                let to = self.pos();
                Token {
                    kind: TokenKind::Period,
                    value: TokenValue::Plain(".".to_string()),
                    from,
                    to,
                }
            }
        }
    }

    fn scan_colon(&mut self) -> Token {
        let from = self.pos();
        self.bump(); // ':'
        if self.source.peek() == Some(':') {
            self.bump();
            let to = self.pos();
            Token {
                kind: TokenKind::DoubleColon,
                value: TokenValue::Plain("::".to_string()),
                from,
                to,
            }
        } else {
            let to = self.pos();
            Token {
                kind: TokenKind::Colon,
                value: TokenValue::Plain(":".to_string()),
                from,
                to,
            }
        }
    }

    fn scan_lt(&mut self) -> Token {
        let from = self.pos();
        self.bump(); // '<'
        match self.source.peek() {
            Some('=') => {
                self.bump();
                let to = self.pos();
                Token {
                    kind: TokenKind::LtEq,
                    value: TokenValue::Plain("<=".to_string()),
                    from,
                    to,
                }
            }
            Some('>') => {
                self.bump();
                let to = self.pos();
                Token {
                    kind: TokenKind::Neq,
                    value: TokenValue::Plain("<>".to_string()),
                    from,
                    to,
                }
            }
            _ => {
                let to = self.pos();
                Token {
                    kind: TokenKind::Lt,
                    value: TokenValue::Plain("<".to_string()),
                    from,
                    to,
                }
            }
        }
    }

    fn scan_gt(&mut self) -> Token {
        let from = self.pos();
        self.bump(); // '>'
        if self.source.peek() == Some('=') {
            self.bump();
            let to = self.pos();
            Token {
                kind: TokenKind::GtEq,
                value: TokenValue::Plain(">=".to_string()),
                from,
                to,
            }
        } else {
            let to = self.pos();
            Token {
                kind: TokenKind::Gt,
                value: TokenValue::Plain(">".to_string()),
                from,
                to,
            }
        }
    }

    fn scan_bang(&mut self) -> Result<Token, TokenizerError> {
        let from = self.pos();
        self.bump(); // '!'
        if self.source.peek() == Some('=') {
            self.bump();
            let to = self.pos();
            Ok(Token {
                kind: TokenKind::Neq,
                value: TokenValue::Plain("!=".to_string()),
                from,
                to,
            })
        } else {
            let to = self.pos();
            Ok(Token {
                kind: TokenKind::ExclamationMark,
                value: TokenValue::Plain("!".to_string()),
                from,
                to,
            })
        }
    }

    /// `-` is `Minus` unless followed by a second `-`, which starts a line
    /// comment running up to (not including) the terminating newline.
    fn scan_minus(&mut self) -> Result<Token, TokenizerError> {
        let from = self.pos();
        self.bump(); // first '-'
        if self.source.peek() == Some('-') {
            self.bump(); // second '-'
            let mut text = String::new();
            while let Some(ch) = self.source.peek() {
                if ch == '\n' {
                    break;
                }
                text.push(self.bump().expect("peeked Some"));
            }
            let to = self.pos();
            Ok(Token {
                kind: TokenKind::Comment,
                value: TokenValue::Comment(Comment {
                    text,
                    style: CommentStyle::Line,
                }),
                from,
                to,
            })
        } else {
            let to = self.pos();
            Ok(Token {
                kind: TokenKind::Minus,
                value: TokenValue::Plain("-".to_string()),
                from,
                to,
            })
        }
    }

    /// `/` is `Div` unless followed by `*`, which starts a (non-nesting)
    /// block comment ended by the first `*/`.
    fn scan_slash(&mut self) -> Result<Token, TokenizerError> {
        let from = self.pos();
        self.bump(); // '/'
        if self.source.peek() == Some('*') {
            self.bump(); // '*'
            self.scan_block_comment(from)
        } else {
            let to = self.pos();
            Ok(Token {
                kind: TokenKind::Div,
                value: TokenValue::Plain("/".to_string()),
                from,
                to,
            })
        }
    }

    fn scan_block_comment(&mut self, from: Position) -> Result<Token, TokenizerError> {
        let mut text = String::new();
        loop {
            match self.source.peek() {
                Some('*') => {
                    self.bump();
                    if self.source.peek() == Some('/') {
                        self.bump();
                        break;
                    }
                    text.push('*');
                }
                Some(_) => {
                    text.push(self.bump().expect("peeked Some"));
                }
                None => {
                    let pos = self.pos();
                    debug!("unterminated block comment, from {} to EOF at {}", from, pos);
                    return Err(TokenizerError {
                        kind: TokenizerErrorKind::UnterminatedBlockComment,
                        message: format!("expected closing */ before EOF (comment started at {})", from),
                        pos,
                    });
                }
            }
        }
        let to = self.pos();
        Ok(Token {
            kind: TokenKind::Comment,
            value: TokenValue::Comment(Comment {
                text,
                style: CommentStyle::Block,
            }),
            from,
            to,
        })
    }

    fn scan_char(&mut self, ch: char) -> Token {
        let from = self.pos();
        self.bump();
        let to = self.pos();
        Token {
            kind: TokenKind::Char,
            value: TokenValue::Plain(ch.to_string()),
            from,
            to,
        }
    }

    fn simple_token(&mut self, kind: TokenKind) -> Token {
        let from = self.pos();
        let ch = self.bump().expect("dispatch guaranteed a character");
        let to = self.pos();
        Token {
            kind,
            value: TokenValue::Plain(ch.to_string()),
            from,
            to,
        }
    }
}

/// Entry point: owns the Scanner and drives it to completion.
pub struct Tokenizer<'a> {
    scanner: Scanner<'a>,
}

impl<'a> Tokenizer<'a> {
    /// Create a new tokenizer for `source`, classifying words with
    /// `dialect`.
    pub fn new(dialect: &'a dyn Dialect, source: &'a str) -> Self {
        Tokenizer {
            scanner: Scanner::new(dialect, source),
        }
    }

    /// Tokenize the whole input, draining the source. On success, returns
    /// every token in order. On failure, the partial token list is
    /// discarded — lexing is all-or-nothing.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, TokenizerError> {
        let mut tokens = Vec::new();
        while let Some(token) = self.scanner.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    /// The cursor's current position. After a successful `tokenize()` this
    /// equals the last token's `to`; after a failed one, it is the
    /// position at which scanning stopped.
    pub fn pos(&self) -> Position {
        self.scanner.pos()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::GenericDialect;

    fn tokenize(sql: &str) -> Vec<Token> {
        let dialect = GenericDialect;
        let mut tokenizer = Tokenizer::new(&dialect, sql);
        tokenizer.tokenize().unwrap()
    }

    fn pos(line: u64, col: u64) -> Position {
        Position { line, col }
    }

    fn plain(kind: TokenKind, value: &str, from: Position, to: Position) -> Token {
        Token {
            kind,
            value: TokenValue::Plain(value.to_string()),
            from,
            to,
        }
    }

    #[test]
    fn single_space_is_one_whitespace_token() {
        let tokens = tokenize(" ");
        assert_eq!(
            tokens,
            vec![plain(TokenKind::Whitespace, " ", pos(1, 1), pos(1, 2))]
        );
    }

    #[test]
    fn crlf_then_tab() {
        let tokens = tokenize("\r\n\t");
        assert_eq!(
            tokens,
            vec![
                plain(TokenKind::Whitespace, "\n", pos(1, 1), pos(2, 1)),
                plain(TokenKind::Whitespace, "\t", pos(2, 1), pos(2, 5)),
            ]
        );
    }

    #[test]
    fn lone_cr_also_normalizes_to_newline() {
        let tokens = tokenize("a\rb");
        assert_eq!(tokens[1], plain(TokenKind::Whitespace, "\n", pos(1, 2), pos(2, 1)));
    }

    #[test]
    fn national_string_literal_then_keyword() {
        let tokens = tokenize("N'string' NOT");
        assert_eq!(tokens.len(), 3);
        assert_eq!(
            tokens[0],
            plain(
                TokenKind::NationalStringLiteral,
                "string",
                pos(1, 1),
                pos(1, 10)
            )
        );
        assert_eq!(tokens[1], plain(TokenKind::Whitespace, " ", pos(1, 10), pos(1, 11)));
        match &tokens[2].value {
            TokenValue::Word(w) => {
                assert_eq!(w.value, "NOT");
                assert_eq!(w.keyword, "NOT");
                assert_eq!(w.quote_style, QuoteStyle::None);
                assert_eq!(w.kind, KeywordKind::Matched);
            }
            other => panic!("expected Word, got {:?}", other),
        }
        assert_eq!(tokens[2].from, pos(1, 11));
        assert_eq!(tokens[2].to, pos(1, 14));
    }

    #[test]
    fn parens_number_comma() {
        let tokens = tokenize("(123),");
        assert_eq!(
            tokens,
            vec![
                plain(TokenKind::LParen, "(", pos(1, 1), pos(1, 2)),
                plain(TokenKind::Number, "123", pos(1, 2), pos(1, 5)),
                plain(TokenKind::RParen, ")", pos(1, 5), pos(1, 6)),
                plain(TokenKind::Comma, ",", pos(1, 6), pos(1, 7)),
            ]
        );
    }

    #[test]
    fn arithmetic_operators_and_trailing_dot() {
        let tokens = tokenize("1/1*1+1%1=1.1-.");
        let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Number,
                TokenKind::Div,
                TokenKind::Number,
                TokenKind::Mult,
                TokenKind::Number,
                TokenKind::Plus,
                TokenKind::Number,
                TokenKind::Mod,
                TokenKind::Number,
                TokenKind::Eq,
                TokenKind::Number,
                TokenKind::Minus,
                TokenKind::Period,
            ]
        );
        assert_eq!(tokens.first().unwrap().from, pos(1, 1));
        assert_eq!(tokens.last().unwrap().to, pos(1, 16));
        match &tokens[10].value {
            TokenValue::Plain(s) => assert_eq!(s, "1.1"),
            _ => panic!("expected plain number"),
        }
    }

    #[test]
    fn trailing_dot_without_digit_is_period_not_number() {
        let tokens = tokenize("1.");
        assert_eq!(tokens[0].kind, TokenKind::Number);
        match &tokens[0].value {
            TokenValue::Plain(s) => assert_eq!(s, "1"),
            _ => panic!(),
        }
        assert_eq!(tokens[1].kind, TokenKind::Period);
    }

    #[test]
    fn leading_dot_number() {
        let tokens = tokenize(".5");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Number);
        match &tokens[0].value {
            TokenValue::Plain(s) => assert_eq!(s, ".5"),
            _ => panic!(),
        }
    }

    #[test]
    fn minus_is_not_part_of_number() {
        let tokens = tokenize("-1");
        assert_eq!(tokens[0].kind, TokenKind::Minus);
        assert_eq!(tokens[1].kind, TokenKind::Number);
    }

    #[test]
    fn block_comment_spanning_lines() {
        let tokens = tokenize("/* a\nb */");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Comment);
        assert_eq!(tokens[0].from, pos(1, 1));
        match &tokens[0].value {
            TokenValue::Comment(c) => {
                assert_eq!(c.text, " a\nb ");
                assert_eq!(c.style, CommentStyle::Block);
            }
            _ => panic!(),
        }
    }

    #[test]
    fn line_comment_stops_before_newline() {
        let tokens = tokenize("0--this is a comment\n1");
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[1].kind, TokenKind::Comment);
        match &tokens[1].value {
            TokenValue::Comment(c) => {
                assert_eq!(c.text, "this is a comment");
                assert_eq!(c.style, CommentStyle::Line);
            }
            _ => panic!(),
        }
        assert_eq!(tokens[1].to, pos(1, 21));
        assert_eq!(tokens[2], plain(TokenKind::Whitespace, "\n", pos(1, 21), pos(2, 1)));
        assert_eq!(tokens[3].kind, TokenKind::Number);
    }

    #[test]
    fn line_comment_at_eof() {
        let tokens = tokenize("--this is a comment");
        assert_eq!(tokens.len(), 1);
        match &tokens[0].value {
            TokenValue::Comment(c) => assert_eq!(c.text, "this is a comment"),
            _ => panic!(),
        }
    }

    #[test]
    fn unterminated_single_quoted_string_is_fatal() {
        let dialect = GenericDialect;
        let mut tokenizer = Tokenizer::new(&dialect, "'test");
        let err = tokenizer.tokenize().unwrap_err();
        assert_eq!(err.kind, TokenizerErrorKind::UnterminatedStringLiteral);
    }

    #[test]
    fn unterminated_block_comment_is_fatal() {
        let dialect = GenericDialect;
        let mut tokenizer = Tokenizer::new(&dialect, "/* oops");
        let err = tokenizer.tokenize().unwrap_err();
        assert_eq!(err.kind, TokenizerErrorKind::UnterminatedBlockComment);
    }

    #[test]
    fn unterminated_double_quoted_identifier_is_fatal() {
        let dialect = GenericDialect;
        let mut tokenizer = Tokenizer::new(&dialect, "\"foo");
        let err = tokenizer.tokenize().unwrap_err();
        assert_eq!(err.kind, TokenizerErrorKind::UnterminatedQuotedIdentifier);
    }

    #[test]
    fn unterminated_bracket_quoted_identifier_is_fatal() {
        let dialect = GenericDialect;
        let mut tokenizer = Tokenizer::new(&dialect, "[foo");
        let err = tokenizer.tokenize().unwrap_err();
        assert_eq!(err.kind, TokenizerErrorKind::UnterminatedQuotedIdentifier);
    }

    #[test]
    fn bracket_not_followed_by_identifier_part_is_plain_punctuation() {
        let tokens = tokenize("[ ]");
        assert_eq!(tokens[0].kind, TokenKind::LBracket);
        assert_eq!(tokens[2].kind, TokenKind::RBracket);
    }

    #[test]
    fn bracket_quoted_identifier() {
        let tokens = tokenize("[my col]");
        assert_eq!(tokens.len(), 1);
        match &tokens[0].value {
            TokenValue::Word(w) => {
                assert_eq!(w.value, "my col");
                assert_eq!(w.keyword, "MY COL");
                assert_eq!(w.quote_style, QuoteStyle::Bracket);
            }
            _ => panic!(),
        }
    }

    #[test]
    fn double_quoted_identifier_keyword_is_uppercased_even_though_quoted() {
        let tokens = tokenize("\"select\"");
        match &tokens[0].value {
            TokenValue::Word(w) => {
                assert_eq!(w.value, "select");
                assert_eq!(w.keyword, "SELECT");
            }
            _ => panic!(),
        }
    }

    #[test]
    fn double_colon_beats_colon() {
        let tokens = tokenize("a::int");
        assert_eq!(tokens[1].kind, TokenKind::DoubleColon);
    }

    #[test]
    fn neq_forms() {
        assert_eq!(tokenize("<>")[0].kind, TokenKind::Neq);
        assert_eq!(tokenize("!=")[0].kind, TokenKind::Neq);
        assert_eq!(tokenize("!")[0].kind, TokenKind::ExclamationMark);
    }

    #[test]
    fn unrecognized_character_is_a_char_token_not_an_error() {
        let tokens = tokenize("\nمصطفىh");
        assert_eq!(tokens[0].kind, TokenKind::Whitespace);
        for t in &tokens[1..6] {
            assert_eq!(t.kind, TokenKind::Char);
        }
        assert_eq!(tokens[6].kind, TokenKind::SQLKeyword);
    }

    #[test]
    fn adjacent_tokens_are_contiguous() {
        let tokens = tokenize("SELECT a, b FROM t WHERE a = 1 -- trailing\n");
        for pair in tokens.windows(2) {
            assert_eq!(pair[0].to, pair[1].from);
        }
        assert_eq!(tokens.first().unwrap().from, pos(1, 1));
    }

    #[test]
    fn lexeme_round_trips_through_retokenization() {
        let sql = "SELECT \"a\", `b`, [c], 'd', N'e' FROM t -- cmt\n/* block */";
        let tokens = tokenize(sql);
        let reconstructed: String = tokens.iter().map(|t| t.lexeme()).collect();
        let retokenized = tokenize(&reconstructed);
        assert_eq!(tokens.len(), retokenized.len());
        for (a, b) in tokens.iter().zip(retokenized.iter()) {
            assert_eq!(a.kind, b.kind);
            assert_eq!(a.value, b.value);
        }
    }

    #[test]
    fn pos_reflects_final_cursor_after_successful_tokenize() {
        let dialect = GenericDialect;
        let mut tokenizer = Tokenizer::new(&dialect, "SELECT 1");
        let tokens = tokenizer.tokenize().unwrap();
        assert_eq!(tokenizer.pos(), tokens.last().unwrap().to);
    }

    #[test]
    fn pos_reflects_failure_point() {
        let dialect = GenericDialect;
        let mut tokenizer = Tokenizer::new(&dialect, "'unterminated");
        let err = tokenizer.tokenize().unwrap_err();
        assert_eq!(tokenizer.pos(), err.pos);
    }
}
