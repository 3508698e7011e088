//! # Lexing for the formula syntax
//!
//! The lexer is zero-copy and tracks the character offset of every token,
//! so parse errors can cite the exact offending position.

/// A token of the formula language.
#[allow(non_camel_case_types)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub(super) enum Tok<'a> {
    LPAREN,
    RPAREN,
    /// `¬` or `~`
    NOT,
    /// `∧`, `^` or `&`
    AND,
    /// `∨`, `v` or `||`
    OR,
    /// `→` or `->`
    IMP,
    /// `↔`, `<->` or `<=>`
    IFF,
    /// A variable or metavariable name.
    SYM(&'a str),
    ERROR(char),
    EOF,
}

/// Lexer for formulas.
pub(super) struct Lexer<'a> {
    src: &'a str,
    /// Byte index in `src`.
    i: usize,
    /// Character offset in `src`, for diagnostics.
    off: usize,
    /// Character offset at which the current token starts.
    tok_off: usize,
    is_done: bool,
    cur_: Option<Tok<'a>>,
}

impl<'a> Lexer<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            i: 0,
            off: 0,
            tok_off: 0,
            is_done: false,
            cur_: None,
        }
    }

    /// Character offset at which the current token starts.
    pub fn cur_offset(&self) -> usize {
        self.tok_off
    }

    fn peek_char(&self) -> Option<char> {
        self.src[self.i..].chars().next()
    }

    fn advance(&mut self, c: char) {
        self.i += c.len_utf8();
        self.off += 1;
    }

    fn next_(&mut self) -> Tok<'a> {
        use Tok::*;
        assert!(!self.is_done);

        // skip whitespace
        while let Some(c) = self.peek_char() {
            if c.is_whitespace() {
                self.advance(c)
            } else {
                break;
            }
        }

        self.tok_off = self.off;
        let c = match self.peek_char() {
            None => {
                self.is_done = true;
                return EOF;
            }
            Some(c) => c,
        };

        match c {
            '(' => {
                self.advance(c);
                LPAREN
            }
            ')' => {
                self.advance(c);
                RPAREN
            }
            '¬' | '~' => {
                self.advance(c);
                NOT
            }
            '∧' | '^' | '&' => {
                self.advance(c);
                AND
            }
            // a lone lowercase `v` is a disjunction glyph; identifiers
            // never start with a lowercase Latin letter
            '∨' | 'v' => {
                self.advance(c);
                OR
            }
            '|' => {
                self.advance(c);
                if self.peek_char() == Some('|') {
                    self.advance('|');
                    OR
                } else {
                    ERROR('|')
                }
            }
            '→' => {
                self.advance(c);
                IMP
            }
            '-' => {
                self.advance(c);
                if self.peek_char() == Some('>') {
                    self.advance('>');
                    IMP
                } else {
                    ERROR('-')
                }
            }
            '↔' => {
                self.advance(c);
                IFF
            }
            '<' => {
                let rest = &self.src[self.i..];
                if rest.starts_with("<->") || rest.starts_with("<=>") {
                    // three ASCII chars
                    self.i += 3;
                    self.off += 3;
                    IFF
                } else {
                    self.advance(c);
                    ERROR('<')
                }
            }
            c if is_ident_start(c) => {
                let start = self.i;
                self.advance(c);
                while let Some(c2) = self.peek_char() {
                    if is_ident_cont(c2) {
                        self.advance(c2)
                    } else {
                        break;
                    }
                }
                SYM(&self.src[start..self.i])
            }
            _ => {
                self.advance(c);
                ERROR(c)
            }
        }
    }

    /// get next token.
    pub fn next(&mut self) -> Tok<'a> {
        let t = self.next_();
        self.cur_ = Some(t);
        t
    }

    /// Current token.
    pub fn cur(&mut self) -> Tok<'a> {
        if let Some(c) = self.cur_ {
            c
        } else {
            self.next()
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Tok<'a>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.is_done {
            None
        } else {
            Some(self.next())
        }
    }
}

/// Leading character of a variable name: uppercase Latin or Greek.
fn is_ident_start(c: char) -> bool {
    c.is_ascii_uppercase() || is_greek(c)
}

/// Continuation of a variable name. Lowercase Latin letters are excluded
/// so that `A v B` can never be read as a single identifier.
fn is_ident_cont(c: char) -> bool {
    c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_' || is_greek(c)
}

fn is_greek(c: char) -> bool {
    ('α'..='ω').contains(&c) || ('Α'..='Ω').contains(&c)
}
