//! # Truth-table semantics
//!
//! Brute-force valuation of formulas: evaluation, tautology testing,
//! multi-premise entailment with bounded countermodel search, and full
//! truth tables.
//!
//! The enumeration is exponential by nature; the fixed thresholds below
//! keep worst-case latency predictable for interactive use. They are
//! explosion guards, not correctness guarantees: past the threshold,
//! `is_tautology` answers `false` without enumerating and `entails` only
//! samples, so a "valid" answer there is valid-within-the-explored-space.

use crate::{Formula, FormulaView, Symbol};
use fnv::{FnvHashMap, FnvHashSet};

/// A truth assignment. Variables absent from the map read as false.
pub type Valuation = FnvHashMap<Symbol, bool>;

/// `is_tautology` gives up (answering `false`) above this many variables.
pub const TAUT_MAX_VARS: usize = 10;
/// `entails` enumerates exhaustively up to this many variables.
pub const ENTAIL_MAX_VARS: usize = 12;
/// Valuations sampled by `entails` past [`ENTAIL_MAX_VARS`].
pub const ENTAIL_SAMPLES: u64 = 4096;
/// At most this many countermodels are reported.
const MAX_COUNTERMODELS: usize = 3;

/// Variables occurring in `f`, in first-occurrence order, without duplicates.
pub fn collect_vars(f: &Formula) -> Vec<Symbol> {
    let mut seen = FnvHashSet::default();
    let mut out = vec![];
    collect_into(f, &mut seen, &mut out);
    out
}

fn collect_into(f: &Formula, seen: &mut FnvHashSet<Symbol>, out: &mut Vec<Symbol>) {
    use FormulaView::*;
    match f.view() {
        Var(s) => {
            if seen.insert(s.clone()) {
                out.push(s.clone())
            }
        }
        Neg(a) => collect_into(a, seen, out),
        And(a, b) | Or(a, b) | Imp(a, b) | Iff(a, b) => {
            collect_into(a, seen, out);
            collect_into(b, seen, out);
        }
    }
}

/// Truth value of `f` under `v`, by structural recursion. `→` is material
/// implication.
pub fn evaluate(f: &Formula, v: &Valuation) -> bool {
    use FormulaView::*;
    match f.view() {
        Var(s) => v.get(s).copied().unwrap_or(false),
        Neg(a) => !evaluate(a, v),
        And(a, b) => evaluate(a, v) && evaluate(b, v),
        Or(a, b) => evaluate(a, v) || evaluate(b, v),
        Imp(a, b) => !evaluate(a, v) || evaluate(b, v),
        Iff(a, b) => evaluate(a, v) == evaluate(b, v),
    }
}

/// Valuation number `mask` over `vars`: bit `n-1-i` assigns variable `i`,
/// so mask 0 is all-false and counting up flips the last variable fastest.
fn valuation_at(vars: &[Symbol], mask: u64) -> Valuation {
    let n = vars.len();
    vars.iter()
        .enumerate()
        .map(|(i, s)| (s.clone(), (mask >> (n - 1 - i)) & 1 == 1))
        .collect()
}

/// Does every valuation satisfy `f`?
///
/// Enumerates all `2^n` valuations. Past [`TAUT_MAX_VARS`] variables it
/// short-circuits to `false`; that is an approximation, not a refutation,
/// and callers must not read it as a proof of non-tautology.
pub fn is_tautology(f: &Formula) -> bool {
    let vars = collect_vars(f);
    if vars.len() > TAUT_MAX_VARS {
        log::debug!(
            "is_tautology: {} variables exceed the enumeration guard, answering false",
            vars.len()
        );
        return false;
    }
    let total = 1u64 << vars.len();
    (0..total).all(|mask| evaluate(f, &valuation_at(&vars, mask)))
}

/// Outcome of an entailment query.
#[derive(Debug, Clone)]
pub enum Entailment {
    /// No countermodel in the explored space.
    Valid,
    /// Valuations satisfying every premise but not the conclusion,
    /// capped at 3 examples.
    Invalid { countermodels: Vec<Valuation> },
}

impl Entailment {
    pub fn is_valid(&self) -> bool {
        matches!(self, Entailment::Valid)
    }
}

/// Do the premises semantically force the conclusion?
///
/// Exhaustive over the union of variables when there are at most
/// [`ENTAIL_MAX_VARS`]; beyond that, samples [`ENTAIL_SAMPLES`] valuations
/// (folding each variable onto one of 12 mask bits) as a heuristic
/// fallback, so `Valid` is then only valid-within-the-sampled-space.
pub fn entails(premises: &[Formula], conclusion: &Formula) -> Entailment {
    let mut seen = FnvHashSet::default();
    let mut vars = vec![];
    for p in premises {
        collect_into(p, &mut seen, &mut vars);
    }
    collect_into(conclusion, &mut seen, &mut vars);

    let is_countermodel = |v: &Valuation| {
        premises.iter().all(|p| evaluate(p, v)) && !evaluate(conclusion, v)
    };

    let mut countermodels = vec![];
    if vars.len() > ENTAIL_MAX_VARS {
        log::debug!(
            "entails: {} variables, sampling {} valuations",
            vars.len(),
            ENTAIL_SAMPLES
        );
        for mask in 0..ENTAIL_SAMPLES {
            let v: Valuation = vars
                .iter()
                .enumerate()
                .map(|(i, s)| {
                    let bit = (mask >> (i % ENTAIL_MAX_VARS)) & 1;
                    (s.clone(), bit == 1)
                })
                .collect();
            if is_countermodel(&v) {
                countermodels.push(v);
                if countermodels.len() >= MAX_COUNTERMODELS {
                    break;
                }
            }
        }
    } else {
        for mask in 0..(1u64 << vars.len()) {
            let v = valuation_at(&vars, mask);
            if is_countermodel(&v) {
                countermodels.push(v);
                if countermodels.len() >= MAX_COUNTERMODELS {
                    break;
                }
            }
        }
    }

    if countermodels.is_empty() {
        Entailment::Valid
    } else {
        Entailment::Invalid { countermodels }
    }
}

/// A full valuation-by-formula matrix, for display.
#[derive(Debug, Clone)]
pub struct TruthTable {
    /// Sorted variable list.
    pub vars: Vec<Symbol>,
    pub rows: Vec<TruthTableRow>,
}

#[derive(Debug, Clone)]
pub struct TruthTableRow {
    pub valuation: Valuation,
    /// One truth value per input formula, in input order.
    pub values: Vec<bool>,
}

/// Build the truth table of `formulas` over the union of their variables.
///
/// No guard here: display limits are the caller's concern. The table has
/// `2^n` rows, so it is only usable for small variable counts; 64 or more
/// variables overflow the row index.
pub fn truth_table(formulas: &[Formula]) -> TruthTable {
    let mut seen = FnvHashSet::default();
    let mut vars = vec![];
    for f in formulas {
        collect_into(f, &mut seen, &mut vars);
    }
    vars.sort();

    let rows = (0..(1u64 << vars.len()))
        .map(|mask| {
            let valuation = valuation_at(&vars, mask);
            let values = formulas.iter().map(|f| evaluate(f, &valuation)).collect();
            TruthTableRow { valuation, values }
        })
        .collect();

    TruthTable { vars, rows }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::syntax::parse;

    fn p(s: &str) -> Formula {
        parse(s).unwrap()
    }

    fn val(pairs: &[(&str, bool)]) -> Valuation {
        pairs
            .iter()
            .map(|(s, b)| (Symbol::from_str(s), *b))
            .collect()
    }

    #[test]
    fn test_collect_vars() {
        let vars = collect_vars(&p("(A->B)∧(B∨¬C)"));
        let names: Vec<&str> = vars.iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_evaluate() {
        let f = p("(A->B)↔(¬A∨B)");
        for (a, b) in [(false, false), (false, true), (true, false), (true, true)] {
            assert!(evaluate(&f, &val(&[("A", a), ("B", b)])));
        }
        // an unmapped variable reads as false
        assert!(!evaluate(&p("A"), &Valuation::default()));
    }

    #[test]
    fn test_tautologies() {
        assert!(is_tautology(&p("A∨¬A")));
        assert!(is_tautology(&p("A->(B->A)")));
        assert!(!is_tautology(&p("A->B")));
        assert!(!is_tautology(&p("A")));
    }

    #[test]
    fn test_tautology_guard() {
        // a genuine tautology over 11 variables: the guard answers false
        // without enumerating, by design
        let mut f = p("V1∨¬V1");
        for i in 2..=11 {
            f = Formula::and(f, p(&format!("V{}∨¬V{}", i, i)));
        }
        assert_eq!(collect_vars(&f).len(), 11);
        assert!(!is_tautology(&f));
    }

    #[test]
    fn test_entails_mp() {
        let e = entails(&[p("A"), p("A->B")], &p("B"));
        assert!(e.is_valid());
    }

    #[test]
    fn test_entails_countermodel() {
        match entails(&[p("A")], &p("B")) {
            Entailment::Valid => panic!("A does not entail B"),
            Entailment::Invalid { countermodels } => {
                assert!(!countermodels.is_empty() && countermodels.len() <= 3);
                let cm = &countermodels[0];
                assert_eq!(cm.get("A").copied(), Some(true));
                assert_eq!(cm.get("B").copied().unwrap_or(false), false);
            }
        }
    }

    #[test]
    fn test_entails_sampling_fallback() {
        // 13 variables exceed the exhaustive bound, forcing the sampled
        // path. Sampling folds variable i onto mask bit i % 12, so C11
        // shares a bit with A; the countermodel A=true, B=false lives on
        // bits 0 and 1 and is still reachable.
        let mut premises = vec![p("A"), p("B∨¬B")];
        for i in 1..=11 {
            premises.push(p(&format!("C{}∨¬C{}", i, i)));
        }
        let union = premises
            .iter()
            .fold(p("B"), |acc, q| Formula::and(acc, q.clone()));
        assert_eq!(collect_vars(&union).len(), 13);

        match entails(&premises, &p("B")) {
            Entailment::Invalid { countermodels } => {
                let cm = &countermodels[0];
                assert_eq!(cm.get("A").copied(), Some(true));
                assert_eq!(cm.get("B").copied(), Some(false));
            }
            Entailment::Valid => panic!("A does not entail B under the padding premises"),
        }
    }

    #[test]
    fn test_entails_no_premises_is_tautology_check() {
        assert!(entails(&[], &p("A∨¬A")).is_valid());
        assert!(!entails(&[], &p("A")).is_valid());
    }

    #[test]
    fn test_countermodel_cap() {
        // every valuation of A,B,C satisfies the empty premises and
        // falsifies ⊥-ish `A∧¬A`; the report stops at 3
        match entails(&[p("A∨¬A")], &p("B∧¬B")) {
            Entailment::Invalid { countermodels } => assert_eq!(countermodels.len(), 3),
            Entailment::Valid => panic!("expected countermodels"),
        }
    }

    #[test]
    fn test_truth_table() {
        let t = truth_table(&[p("B->A"), p("A∧B")]);
        let names: Vec<&str> = t.vars.iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert_eq!(t.rows.len(), 4);
        // rows count up with the last variable flipping fastest
        let row0 = &t.rows[0];
        assert_eq!(row0.valuation.get("A").copied(), Some(false));
        assert_eq!(row0.values, vec![true, false]);
        let row3 = &t.rows[3];
        assert_eq!(row3.valuation.get("A").copied(), Some(true));
        assert_eq!(row3.valuation.get("B").copied(), Some(true));
        assert_eq!(row3.values, vec![true, true]);
    }
}
