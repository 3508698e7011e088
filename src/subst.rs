//! # Substitutions
//!
//! A substitution maps metavariable names to concrete formulas. It is the
//! output of schema matching and the input of instantiation.
//!
//! Substitutions are immutable: matching *returns* an extended substitution
//! at each binding rather than mutating a shared table, so a failed match
//! retried with partial bindings can never observe stale entries.

use crate::{Formula, Symbol};
use smallvec::SmallVec;
use std::fmt;

type Binding = (Symbol, Formula);
type Bindings = SmallVec<[Binding; 4]>;

/// A substitution binding metavariables to formulas.
///
/// Consistency is maintained by construction: [`Subst::bind`] is only
/// called after [`Subst::get`] showed the name to be unbound.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Subst(Bindings);

impl Subst {
    /// Empty substitution.
    pub fn new() -> Self {
        Subst(SmallVec::new())
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Formula bound to `name`, if any.
    ///
    /// Linear in the number of bindings, which is tiny (≤3 per axiom schema).
    pub fn get(&self, name: &str) -> Option<&Formula> {
        self.0
            .iter()
            .find(|(s, _)| s.name() == name)
            .map(|(_, f)| f)
    }

    /// Extend with a new binding, consuming `self`.
    pub fn bind(mut self, name: Symbol, f: Formula) -> Self {
        self.0.push((name, f));
        self
    }

    /// Iterate over the bindings.
    pub fn iter(&self) -> impl Iterator<Item = &(Symbol, Formula)> {
        self.0.iter()
    }
}

mod impls {
    use super::*;

    impl fmt::Debug for Subst {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "(subst")?;
            for (v, e) in self.iter() {
                write!(f, " ({} := {})", v, e)?;
            }
            write!(f, ")")
        }
    }

    impl std::iter::FromIterator<(Symbol, Formula)> for Subst {
        fn from_iter<T: IntoIterator<Item = (Symbol, Formula)>>(iter: T) -> Self {
            let mut vec = SmallVec::new();
            for e in iter.into_iter() {
                vec.push((e.0, e.1))
            }
            Subst(vec)
        }
    }
}
