//! # Formula parser
//!
//! Recursive descent over the grammar, precedence high→low:
//!
//! ```text
//! iff  := imp ('↔' iff)?
//! imp  := or  ('→' imp)?
//! or   := and ('∨' and)*
//! and  := neg ('∧' neg)*
//! neg  := '¬' neg | atom
//! atom := VAR | '(' iff ')'
//! ```
//!
//! `→` and `↔` are right-associative; chains of `∧`/`∨` associate to the
//! right as well. Parses directly into a [`Formula`] without an
//! intermediate AST.

use {
    super::lexer::{Lexer, Tok},
    crate::{Error, Formula, Result},
};

macro_rules! perror {
    ($self: ident, $fmt: literal) => {
        Error::new_parse($self.lexer.cur_offset(), format!($fmt))
    };
    ($self: ident, $fmt: literal, $($arg:expr ),*) => {
        Error::new_parse($self.lexer.cur_offset(), format!($fmt, $($arg),*))
    };
}

/// Parse the string into a formula.
///
/// Fails with an error citing the offending character offset on an unknown
/// token, unbalanced parentheses, an invalid identifier, or leftover input
/// after a complete formula.
pub fn parse(s: &str) -> Result<Formula> {
    let mut p = Parser::new(s);
    let f = p.parse_iff_()?;
    match p.lexer.cur() {
        Tok::EOF => Ok(f),
        Tok::ERROR(c) => Err(perror!(p, "unknown token {:?}", c)),
        t => Err(perror!(p, "trailing input {:?} after a complete formula", t)),
    }
}

/// Parser for formulas.
struct Parser<'a> {
    lexer: Lexer<'a>,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            lexer: Lexer::new(src),
        }
    }

    /// Expect the token `t`, and consume it; or return an error.
    fn eat_(&mut self, t: Tok, errmsg: &str) -> Result<()> {
        let t2 = self.lexer.cur();
        if t2 == t {
            self.lexer.next();
            Ok(())
        } else {
            Err(perror!(self, "expected {:?} {}, got {:?}", t, errmsg, t2))
        }
    }

    fn parse_iff_(&mut self) -> Result<Formula> {
        let l = self.parse_imp_()?;
        if self.lexer.cur() == Tok::IFF {
            self.lexer.next();
            let r = self.parse_iff_()?;
            Ok(Formula::iff(l, r))
        } else {
            Ok(l)
        }
    }

    fn parse_imp_(&mut self) -> Result<Formula> {
        let l = self.parse_or_()?;
        if self.lexer.cur() == Tok::IMP {
            self.lexer.next();
            let r = self.parse_imp_()?;
            Ok(Formula::imp(l, r))
        } else {
            Ok(l)
        }
    }

    fn parse_or_(&mut self) -> Result<Formula> {
        let l = self.parse_and_()?;
        if self.lexer.cur() == Tok::OR {
            self.lexer.next();
            let r = self.parse_or_()?;
            Ok(Formula::or(l, r))
        } else {
            Ok(l)
        }
    }

    fn parse_and_(&mut self) -> Result<Formula> {
        let l = self.parse_neg_()?;
        if self.lexer.cur() == Tok::AND {
            self.lexer.next();
            let r = self.parse_and_()?;
            Ok(Formula::and(l, r))
        } else {
            Ok(l)
        }
    }

    fn parse_neg_(&mut self) -> Result<Formula> {
        if self.lexer.cur() == Tok::NOT {
            self.lexer.next();
            let f = self.parse_neg_()?;
            Ok(Formula::neg(f))
        } else {
            self.parse_atom_()
        }
    }

    fn parse_atom_(&mut self) -> Result<Formula> {
        use Tok::*;
        match self.lexer.cur() {
            SYM(s) => {
                self.lexer.next();
                Ok(Formula::var(s))
            }
            LPAREN => {
                self.lexer.next();
                let f = self.parse_iff_()?;
                self.eat_(RPAREN, "to close the subformula")?;
                Ok(f)
            }
            ERROR(c) if c.is_ascii_lowercase() => {
                Err(perror!(self, "invalid identifier starting with {:?}", c))
            }
            ERROR(c) => Err(perror!(self, "unknown token {:?}", c)),
            EOF => Err(perror!(self, "unexpected end of input, expected a formula")),
            t => Err(perror!(self, "expected a formula, got {:?}", t)),
        }
    }
}
