//! # Axiom schemas and matching
//!
//! Schemas are ordinary formulas whose leaves may be *metavariables*:
//! names written with Greek letters, reserved for schemas and never part
//! of a concrete proof formula. Matching a schema against a target formula
//! binds each metavariable to the corresponding subtree; instantiation
//! substitutes bindings back in.

use crate::{Error, Formula, FormulaView, Result, Subst};

/// The Hilbert axiom schemas.
///
/// - A1: `α → (β → α)`
/// - A2: `(α → (β → γ)) → ((α → β) → (α → γ))`
/// - A3: `(¬β → ¬α) → ((¬β → α) → β)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axiom {
    A1,
    A2,
    A3,
}

impl Axiom {
    /// The schema formula, with metavariables `α`, `β`, `γ` at the leaves.
    pub fn schema(&self) -> Formula {
        let a = || Formula::var("α");
        let b = || Formula::var("β");
        let c = || Formula::var("γ");
        let imp = Formula::imp;
        let neg = Formula::neg;
        match self {
            Axiom::A1 => imp(a(), imp(b(), a())),
            Axiom::A2 => imp(
                imp(a(), imp(b(), c())),
                imp(imp(a(), b()), imp(a(), c())),
            ),
            Axiom::A3 => imp(imp(neg(b()), neg(a())), imp(imp(neg(b()), a()), b())),
        }
    }
}

impl std::fmt::Display for Axiom {
    fn fmt(&self, out: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Axiom::A1 => write!(out, "A1"),
            Axiom::A2 => write!(out, "A2"),
            Axiom::A3 => write!(out, "A3"),
        }
    }
}

/// Is this name a metavariable?
///
/// Any name carrying a Greek letter is reserved for schemas.
pub fn is_meta_name(name: &str) -> bool {
    name.chars()
        .any(|c| ('α'..='ω').contains(&c) || ('Α'..='Ω').contains(&c))
}

/// Match `schema` against `target`, starting from an empty substitution.
pub fn match_schema(schema: &Formula, target: &Formula) -> Option<Subst> {
    match_schema_with(schema, target, Subst::new())
}

/// Match `schema` against `target`, extending `subst`.
///
/// A metavariable leaf binds to the whole corresponding target subtree on
/// first encounter; any later occurrence must be structurally equal to the
/// existing binding. Every non-metavariable node must match the target's
/// node kind exactly. Returns the extended substitution, or `None`.
pub fn match_schema_with(schema: &Formula, target: &Formula, subst: Subst) -> Option<Subst> {
    use FormulaView::*;

    if let Var(s) = schema.view() {
        if is_meta_name(s.name()) {
            return match subst.get(s.name()) {
                Some(bound) => {
                    if bound == target {
                        Some(subst)
                    } else {
                        None
                    }
                }
                None => Some(subst.bind(s.clone(), target.clone())),
            };
        }
    }

    match (schema.view(), target.view()) {
        (Var(a), Var(b)) => {
            if a == b {
                Some(subst)
            } else {
                None
            }
        }
        (Neg(a), Neg(b)) => match_schema_with(a, b, subst),
        (And(a1, a2), And(b1, b2))
        | (Or(a1, a2), Or(b1, b2))
        | (Imp(a1, a2), Imp(b1, b2))
        | (Iff(a1, a2), Iff(b1, b2)) => {
            let subst = match_schema_with(a1, b1, subst)?;
            match_schema_with(a2, b2, subst)
        }
        _ => None,
    }
}

/// Substitute each metavariable leaf of `schema` with its binding.
///
/// Ordinary leaves are shared as-is (formulas are immutable). Fails if a
/// metavariable occurring in the schema has no binding; that is a contract
/// violation by the caller, not a user-proof error.
pub fn instantiate(schema: &Formula, subst: &Subst) -> Result<Formula> {
    use FormulaView::*;
    match schema.view() {
        Var(s) if is_meta_name(s.name()) => subst.get(s.name()).cloned().ok_or_else(|| {
            Error::new_string(format!("missing instantiation for metavariable {}", s))
        }),
        Var(..) => Ok(schema.clone()),
        Neg(a) => Ok(Formula::neg(instantiate(a, subst)?)),
        And(a, b) => Ok(Formula::and(instantiate(a, subst)?, instantiate(b, subst)?)),
        Or(a, b) => Ok(Formula::or(instantiate(a, subst)?, instantiate(b, subst)?)),
        Imp(a, b) => Ok(Formula::imp(instantiate(a, subst)?, instantiate(b, subst)?)),
        Iff(a, b) => Ok(Formula::iff(instantiate(a, subst)?, instantiate(b, subst)?)),
    }
}
