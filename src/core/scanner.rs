use std::iter::Peekable;

use owned_chars::OwnedChars;

/// A stream of lexemes with one lexeme of lookahead.
///
/// The parser only ever needs to read a lexeme and, if it turns out not to be
/// an operator it can use, hand it back. An empty string marks the end of the
/// input.
pub trait TokenSource {
    /// Returns the next lexeme, or an empty string once the input is used up.
    fn next_token(&mut self) -> String;

    /// Hands `token` back so the following `next_token` returns it again.
    ///
    /// Only one lexeme is held back at a time; saving a second one before it
    /// is read replaces the first.
    fn save_token(&mut self, token: String);

    fn has_more_tokens(&mut self) -> bool;
}

pub struct Scanner {
    // Scratch pad for the lexeme being built
    scratch: String,
    chars: Peekable<OwnedChars>,
    // The lexeme handed back by `save_token`, if any
    saved: Option<String>,
    skip_whitespace: bool,
}

impl Scanner {
    /// Creates a new `Scanner` over `source` that skips whitespace.
    #[must_use]
    pub fn new(source: String) -> Self {
        Scanner {
            scratch: String::with_capacity(64),
            chars: OwnedChars::from_string(source).peekable(),
            saved: None,
            skip_whitespace: true,
        }
    }

    /// Creates a new `Scanner` over `source` that reports each whitespace
    /// character as a lexeme of its own.
    #[must_use]
    pub fn with_whitespace(source: String) -> Self {
        Scanner {
            skip_whitespace: false,
            ..Scanner::new(source)
        }
    }

    /// Restarts scanning on `source`, dropping any saved lexeme.
    pub fn set_input(&mut self, source: String) {
        self.chars = OwnedChars::from_string(source).peekable();
        self.saved = None;
        self.scratch.clear();
    }

    /// Collects every remaining lexeme.
    pub fn scan_tokens(mut self) -> Vec<String> {
        let mut tokens = Vec::new();
        while self.has_more_tokens() {
            tokens.push(self.next_token());
        }

        tokens
    }

    fn skip_blanks(&mut self) {
        if !self.skip_whitespace {
            return;
        }

        while self.peek().map_or(false, char::is_whitespace) {
            self.chars.next();
        }
    }

    fn scan_token(&mut self, c: char) {
        self.scratch.push(c);

        if c.is_ascii_alphabetic() {
            self.consume_while(|c| c.is_ascii_alphabetic());
        } else if c.is_ascii_digit() {
            self.consume_while(|c| c.is_ascii_digit());
        }
    }

    fn consume_while(&mut self, f: impl Fn(char) -> bool) {
        while let Some(c) = self.peek() {
            if !f(c) {
                break;
            }

            self.scratch.push(c);
            self.chars.next();
        }
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }
}

impl TokenSource for Scanner {
    fn next_token(&mut self) -> String {
        if let Some(token) = self.saved.take() {
            return token;
        }

        self.skip_blanks();
        self.scratch.clear();
        if let Some(c) = self.chars.next() {
            self.scan_token(c);
        }

        self.scratch.clone()
    }

    fn save_token(&mut self, token: String) {
        self.saved = Some(token);
    }

    fn has_more_tokens(&mut self) -> bool {
        if self.saved.is_some() {
            return true;
        }

        self.skip_blanks();
        self.peek().is_some()
    }
}
