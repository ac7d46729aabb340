//! Jack tokenizer.
//!
//! Streams tokens on demand from a source string. Skips whitespace and both
//! comment forms; the single one-character lookahead used to terminate
//! identifiers/numbers is kept as an explicit pushback buffer rather than a
//! sentinel value, so it can hold any character — including a digit or
//! letter that starts the *next* token — without colliding with "no
//! pushback".

use std::iter::Peekable;
use std::str::Chars;

use toolchain_core::{is_symbol, Keyword, Token};

pub struct Tokenizer<'a> {
    chars: Peekable<Chars<'a>>,
    pushback: Option<char>,
    current: Token,
}

impl<'a> Tokenizer<'a> {
    pub fn new(source: &'a str) -> Self {
        let mut t = Tokenizer {
            chars: source.chars().peekable(),
            pushback: None,
            current: Token::Invalid,
        };
        t.advance_past_invalid();
        t
    }

    /// The token the tokenizer is currently positioned on.
    pub fn current(&self) -> &Token {
        &self.current
    }

    /// Whether another token is available. Mirrors the source compiler's
    /// `eof()`-based check: it reports `false` only once a read has gone
    /// past the end of input, not "is there a next token" in the intuitive
    /// sense. In practice this means the final real token is still
    /// reachable, and `advance` naturally stops calling further once the
    /// input is exhausted; documented here per spec.md §9 rather than
    /// silently tightened.
    pub fn has_more_tokens(&mut self) -> bool {
        self.peek_char().is_some()
    }

    /// Consume the current token and position on the next one, skipping any
    /// comments along the way.
    pub fn advance(&mut self) {
        self.current = self.next_raw_token();
        self.advance_past_invalid();
    }

    fn advance_past_invalid(&mut self) {
        while self.current == Token::Invalid && self.has_more_tokens() {
            self.current = self.next_raw_token();
        }
    }

    fn peek_char(&mut self) -> Option<char> {
        if self.pushback.is_some() {
            self.pushback
        } else {
            self.chars.peek().copied()
        }
    }

    fn next_char(&mut self) -> Option<char> {
        if let Some(c) = self.pushback.take() {
            Some(c)
        } else {
            self.chars.next()
        }
    }

    fn next_raw_token(&mut self) -> Token {
        let mut c = match self.next_char() {
            Some(c) => c,
            None => return Token::Invalid,
        };
        while c.is_whitespace() {
            c = match self.next_char() {
                Some(c) => c,
                None => return Token::Invalid,
            };
        }

        if c.is_alphabetic() || c == '_' {
            let mut word = String::new();
            word.push(c);
            while let Some(next) = self.peek_char() {
                if next.is_alphanumeric() || next == '_' {
                    word.push(next);
                    self.next_char();
                } else {
                    break;
                }
            }
            return match Keyword::lookup(&word) {
                Some(k) => Token::Keyword(k),
                None => Token::Identifier(word),
            };
        }

        if c.is_ascii_digit() {
            let mut digits = String::new();
            digits.push(c);
            while let Some(next) = self.peek_char() {
                if next.is_ascii_digit() {
                    digits.push(next);
                    self.next_char();
                } else {
                    break;
                }
            }
            let value: u32 = digits.parse().unwrap_or(u32::MAX);
            return Token::IntConst(value.min(32767) as u16);
        }

        if c == '"' {
            let mut s = String::new();
            loop {
                match self.next_char() {
                    Some('"') => break,
                    Some(ch) => s.push(ch),
                    None => panic!("unterminated string literal"),
                }
            }
            return Token::StringConst(s);
        }

        if c == '/' {
            match self.peek_char() {
                Some('/') => {
                    self.next_char();
                    while let Some(ch) = self.next_char() {
                        if ch == '\n' {
                            break;
                        }
                    }
                    return Token::Invalid;
                }
                Some('*') => {
                    self.next_char();
                    let mut prev = '\0';
                    loop {
                        match self.next_char() {
                            Some(ch) => {
                                if prev == '*' && ch == '/' {
                                    break;
                                }
                                prev = ch;
                            }
                            None => panic!("unterminated block comment"),
                        }
                    }
                    return Token::Invalid;
                }
                _ => return Token::Symbol('/'),
            }
        }

        if !is_symbol(c) {
            panic!("character '{c}' is outside the Jack symbol alphabet");
        }
        Token::Symbol(c)
    }
}
