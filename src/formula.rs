//! # Formulas and variables
//!
//! A [`Formula`] is an immutable propositional formula, refcounted and thus
//! cheaply clonable. Equality, ordering and hashing are all structural:
//! rule validation in the checker never compares formula *text*.

use std::{fmt, rc::Rc};

/// Shared pointer used for formulas and names.
pub type Ref<T> = Rc<T>;

/// A variable (or metavariable) name.
///
/// Names are case-significant. Two symbols are equal iff their names are.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Symbol(Ref<str>);

impl Symbol {
    /// New symbol from this string.
    pub fn from_str(s: &str) -> Self {
        Symbol(Ref::from(s))
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

/// A propositional formula.
///
/// The formula is refcounted; `clone` is cheap and subtrees are freely
/// shared by value. A formula is never mutated after construction.
#[derive(Clone)]
pub struct Formula(Ref<FormulaView>);

/// The public view of a formula's root.
#[derive(Clone, Eq, PartialEq, Hash)]
pub enum FormulaView {
    Var(Symbol),
    Neg(Formula),
    And(Formula, Formula),
    Or(Formula, Formula),
    Imp(Formula, Formula),
    Iff(Formula, Formula),
}

pub use FormulaView::*;

impl Formula {
    /// View the formula's root.
    #[inline]
    pub fn view(&self) -> &FormulaView {
        &self.0
    }

    /// Make a propositional variable.
    pub fn var(name: impl Into<Symbol>) -> Self {
        Formula(Ref::new(Var(name.into())))
    }

    pub fn neg(f: Formula) -> Self {
        Formula(Ref::new(Neg(f)))
    }

    pub fn and(a: Formula, b: Formula) -> Self {
        Formula(Ref::new(And(a, b)))
    }

    pub fn or(a: Formula, b: Formula) -> Self {
        Formula(Ref::new(Or(a, b)))
    }

    pub fn imp(a: Formula, b: Formula) -> Self {
        Formula(Ref::new(Imp(a, b)))
    }

    pub fn iff(a: Formula, b: Formula) -> Self {
        Formula(Ref::new(Iff(a, b)))
    }

    /// View a variable.
    pub fn as_var(&self) -> Option<&Symbol> {
        if let Var(ref s) = *self.0 {
            Some(s)
        } else {
            None
        }
    }

    /// `(¬a).as_neg()` returns `Some(a)`.
    pub fn as_neg(&self) -> Option<&Formula> {
        if let Neg(ref a) = *self.0 {
            Some(a)
        } else {
            None
        }
    }

    /// `(a∧b).as_and()` returns `Some((a,b))`.
    pub fn as_and(&self) -> Option<(&Formula, &Formula)> {
        if let And(ref a, ref b) = *self.0 {
            Some((a, b))
        } else {
            None
        }
    }

    /// `(a∨b).as_or()` returns `Some((a,b))`.
    pub fn as_or(&self) -> Option<(&Formula, &Formula)> {
        if let Or(ref a, ref b) = *self.0 {
            Some((a, b))
        } else {
            None
        }
    }

    /// `(a→b).as_imp()` returns `Some((a,b))`.
    pub fn as_imp(&self) -> Option<(&Formula, &Formula)> {
        if let Imp(ref a, ref b) = *self.0 {
            Some((a, b))
        } else {
            None
        }
    }

    /// `(a↔b).as_iff()` returns `Some((a,b))`.
    pub fn as_iff(&self) -> Option<(&Formula, &Formula)> {
        if let Iff(ref a, ref b) = *self.0 {
            Some((a, b))
        } else {
            None
        }
    }

}

mod impls {
    use super::*;

    impl Eq for Formula {}
    impl PartialEq for Formula {
        fn eq(&self, other: &Self) -> bool {
            // pointer equality as a shortcut, structural equality otherwise
            Ref::ptr_eq(&self.0, &other.0) || self.view() == other.view()
        }
    }

    impl std::hash::Hash for Formula {
        fn hash<H: std::hash::Hasher>(&self, h: &mut H) {
            std::hash::Hash::hash(self.view(), h)
        }
    }

    impl std::borrow::Borrow<str> for Symbol {
        fn borrow(&self) -> &str {
            &self.0
        }
    }

    impl<'a> From<&'a str> for Symbol {
        fn from(s: &str) -> Self {
            Symbol::from_str(s)
        }
    }

    impl fmt::Display for Symbol {
        fn fmt(&self, out: &mut fmt::Formatter) -> fmt::Result {
            write!(out, "{}", self.name())
        }
    }

    impl fmt::Display for Formula {
        fn fmt(&self, out: &mut fmt::Formatter) -> fmt::Result {
            crate::syntax::printer::print_formula(self, out)
        }
    }

    impl fmt::Debug for Formula {
        fn fmt(&self, out: &mut fmt::Formatter) -> fmt::Result {
            crate::syntax::printer::print_formula(self, out)
        }
    }
}
