//! # Proof checking
//!
//! Validates an ordered sequence of justified steps against given premises
//! and a goal. Checking is a single forward pass and is deliberately
//! best-effort: a proof with three mistakes gets three diagnostics in one
//! call. [`check_proof`] always returns a [`CheckResult`], never an error.

use {
    crate::{
        schema::{self, Axiom},
        syntax::parse,
        Formula,
    },
    std::fmt,
};

/// Which conjunct to keep in a simplification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Direction of a biconditional elimination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IffDir {
    /// `X↔Y` yields `X→Y`.
    Forward,
    /// `X↔Y` yields `Y→X`.
    Backward,
}

/// Justification of a proof step. Line references are 1-based and must
/// point strictly before the step itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Justification {
    /// Instance of a Hilbert axiom schema.
    Ax { axiom: Axiom },
    /// Modus ponens: from `X` (at `from`) and `X→Y` (at `implies_from`), infer `Y`.
    Mp { from: usize, implies_from: usize },
    /// Modus tollens: from `X→Y` and `¬Y`, infer `¬X`.
    Mt { imp: usize, not: usize },
    /// Hypothetical syllogism: from `X→Y` and `Y→Z`, infer `X→Z`.
    Hs { left: usize, right: usize },
    /// Adjunction: from `X` and `Y`, infer `X∧Y`.
    Adj { left: usize, right: usize },
    /// Simplification: from `X∧Y`, infer `X` or `Y`.
    Simp { from: usize, pick: Side },
    /// Disjunctive syllogism: from `X∨Y` and the negation of one disjunct,
    /// infer the other.
    Ds { disj: usize, not: usize },
    /// Biconditional elimination: from `X↔Y`, infer `X→Y` or `Y→X`.
    IffElim { from: usize, dir: IffDir },
}

impl fmt::Display for Justification {
    fn fmt(&self, out: &mut fmt::Formatter) -> fmt::Result {
        use Justification::*;
        match self {
            Ax { axiom } => write!(out, "{}", axiom),
            Mp { from, implies_from } => write!(out, "MP {},{}", from, implies_from),
            Mt { imp, not } => write!(out, "MT {},{}", imp, not),
            Hs { left, right } => write!(out, "HS {},{}", left, right),
            Adj { left, right } => write!(out, "ADJ {},{}", left, right),
            Simp { from, pick: Side::Left } => write!(out, "SIMP {}.L", from),
            Simp { from, pick: Side::Right } => write!(out, "SIMP {}.R", from),
            Ds { disj, not } => write!(out, "DS {},{}", disj, not),
            IffElim { from, dir: IffDir::Forward } => write!(out, "IFF {}.LR", from),
            IffElim { from, dir: IffDir::Backward } => write!(out, "IFF {}.RL", from),
        }
    }
}

/// A proof step. `line` is 1-based; given premises occupy lines
/// `1..=given.len()` and steps continue from there.
#[derive(Debug, Clone)]
pub struct Step {
    pub line: usize,
    /// Formula text; parsed during checking.
    pub formula: String,
    pub just: Justification,
}

/// A diagnostic attached to a proof line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineError {
    pub line: usize,
    pub msg: String,
}

impl fmt::Display for LineError {
    fn fmt(&self, out: &mut fmt::Formatter) -> fmt::Result {
        write!(out, "line {}: {}", self.line, self.msg)
    }
}

/// Outcome of checking a proof. `ok` holds iff `errors` is empty.
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub ok: bool,
    pub errors: Vec<LineError>,
}

/// Placeholder for a line whose formula did not parse. Not producible by
/// the grammar, so it never structurally matches anything; rules that
/// reference a poisoned line fail their own structural check, which is the
/// intended cascade.
fn poison() -> Formula {
    Formula::var("⊥")
}

/// Check a proof of `goal` from the `given` premises.
///
/// Pure: builds its own private formula index and never mutates its
/// inputs. All failures are collected as per-line diagnostics; the checker
/// never aborts early.
pub fn check_proof(steps: &[Step], goal: &str, given: &[String]) -> CheckResult {
    let mut lines: Vec<Formula> = Vec::with_capacity(given.len() + steps.len());
    let mut errors: Vec<LineError> = vec![];

    // premises are assumed well-formed by the caller; a bad one still gets
    // a diagnostic and a placeholder so later indices stay aligned
    for (i, g) in given.iter().enumerate() {
        match parse(g) {
            Ok(f) => lines.push(f),
            Err(e) => {
                errors.push(LineError {
                    line: i + 1,
                    msg: format!("premise does not parse: {}", e),
                });
                lines.push(poison());
            }
        }
    }

    for s in steps {
        log::trace!("check line {}: {:?} [{}]", s.line, s.formula, s.just);
        let f = match parse(&s.formula) {
            Ok(f) => f,
            Err(e) => {
                errors.push(LineError {
                    line: s.line,
                    msg: e.to_string(),
                });
                lines.push(poison());
                continue;
            }
        };
        if let Err(msg) = validate_step(&lines, &f, &s.just) {
            errors.push(LineError { line: s.line, msg });
        }
        // push even a wrong formula, so later references stay valid
        lines.push(f);
    }

    // the last derived line must be the goal; an unparseable goal is a
    // collaborator bug and is skipped
    if let Ok(g) = parse(goal) {
        if lines.last() != Some(&g) {
            let line = steps.last().map(|s| s.line).unwrap_or(0);
            errors.push(LineError {
                line,
                msg: format!("last line does not match the goal {}", g),
            });
        }
    }

    CheckResult {
        ok: errors.is_empty(),
        errors,
    }
}

/// Formula at 1-based line `n`. Only already-checked lines are in `lines`,
/// so a successful lookup is always a strictly earlier line.
fn fetch(lines: &[Formula], n: usize) -> Result<&Formula, String> {
    if n >= 1 && n <= lines.len() {
        Ok(&lines[n - 1])
    } else {
        Err(format!("no formula at line {}", n))
    }
}

/// Validate one step's structural claim. `Err` carries the diagnostic,
/// naming the expected formula where one is computable.
fn validate_step(lines: &[Formula], f: &Formula, just: &Justification) -> Result<(), String> {
    use Justification::*;
    match just {
        Ax { axiom } => {
            if schema::match_schema(&axiom.schema(), f).is_none() {
                return Err(format!("not an instance of axiom {}", axiom));
            }
            Ok(())
        }
        Mp { from, implies_from } => {
            let a = fetch(lines, *from)?;
            let imp = fetch(lines, *implies_from)?;
            let (l, r) = imp
                .as_imp()
                .ok_or_else(|| format!("line {} is not an implication", implies_from))?;
            if a != l {
                return Err(format!("antecedent does not match line {}", from));
            }
            if f != r {
                return Err(format!("conclusion does not match; expected {}", r));
            }
            Ok(())
        }
        Mt { imp, not } => {
            let fi = fetch(lines, *imp)?;
            let fnot = fetch(lines, *not)?;
            let (l, r) = fi
                .as_imp()
                .ok_or_else(|| format!("line {} is not an implication", imp))?;
            let inner = fnot
                .as_neg()
                .ok_or_else(|| format!("line {} is not a negation", not))?;
            if r != inner {
                return Err(format!(
                    "line {} does not negate the consequent of line {}",
                    not, imp
                ));
            }
            let expected = Formula::neg(l.clone());
            if f != &expected {
                return Err(format!("conclusion does not match; expected {}", expected));
            }
            Ok(())
        }
        Hs { left, right } => {
            let f1 = fetch(lines, *left)?;
            let f2 = fetch(lines, *right)?;
            // the two implications chain under either ordering
            let chain = |a: &Formula, b: &Formula| -> Option<Formula> {
                let (l1, r1) = a.as_imp()?;
                let (l2, r2) = b.as_imp()?;
                if r1 == l2 {
                    Some(Formula::imp(l1.clone(), r2.clone()))
                } else {
                    None
                }
            };
            let c1 = chain(f1, f2);
            let c2 = chain(f2, f1);
            if c1.as_ref() == Some(f) || c2.as_ref() == Some(f) {
                return Ok(());
            }
            match c1.or(c2) {
                Some(e) => Err(format!("conclusion does not match; expected {}", e)),
                None => Err(format!(
                    "lines {} and {} are not chainable implications",
                    left, right
                )),
            }
        }
        Adj { left, right } => {
            let f1 = fetch(lines, *left)?;
            let f2 = fetch(lines, *right)?;
            let expected = Formula::and(f1.clone(), f2.clone());
            if f == &expected || f == &Formula::and(f2.clone(), f1.clone()) {
                return Ok(());
            }
            Err(format!("conclusion does not match; expected {}", expected))
        }
        Simp { from, pick } => {
            let fa = fetch(lines, *from)?;
            let (l, r) = fa
                .as_and()
                .ok_or_else(|| format!("line {} is not a conjunction", from))?;
            let want = match pick {
                Side::Left => l,
                Side::Right => r,
            };
            if f != want {
                return Err(format!("conclusion does not match; expected {}", want));
            }
            Ok(())
        }
        Ds { disj, not } => {
            let f1 = fetch(lines, *disj)?;
            let f2 = fetch(lines, *not)?;
            // neither the role of the two references nor the position of
            // the negated disjunct is fixed a priori
            let remaining = |dis: &Formula, neg: &Formula| -> Option<Formula> {
                let (l, r) = dis.as_or()?;
                let inner = neg.as_neg()?;
                if inner == l {
                    Some(r.clone())
                } else if inner == r {
                    Some(l.clone())
                } else {
                    None
                }
            };
            let c1 = remaining(f1, f2);
            let c2 = remaining(f2, f1);
            if c1.as_ref() == Some(f) || c2.as_ref() == Some(f) {
                return Ok(());
            }
            match c1.or(c2) {
                Some(e) => Err(format!("conclusion does not match; expected {}", e)),
                None => Err(format!(
                    "lines {} and {} do not form a disjunctive syllogism",
                    disj, not
                )),
            }
        }
        IffElim { from, dir } => {
            let fa = fetch(lines, *from)?;
            let (l, r) = fa
                .as_iff()
                .ok_or_else(|| format!("line {} is not a biconditional", from))?;
            let expected = match dir {
                IffDir::Forward => Formula::imp(l.clone(), r.clone()),
                IffDir::Backward => Formula::imp(r.clone(), l.clone()),
            };
            if f != &expected {
                return Err(format!("conclusion does not match; expected {}", expected));
            }
            Ok(())
        }
    }
}
