//! Pretty-printing formulas.
//!
//! Renders the canonical infix form with Unicode connectives, adding
//! parentheses only where a child's precedence is too low for its position.
//! ASCII display variants (`~`, `^`, `v`, `<->`) are a caller-side
//! transform, not part of the canonical form.

use {
    crate::formula::{Formula, FormulaView},
    std::fmt,
};

// binding strength, weakest first
const P_IFF: u8 = 1;
const P_IMP: u8 = 2;
const P_OR: u8 = 3;
const P_AND: u8 = 4;
const P_NEG: u8 = 5;
const P_ATOM: u8 = 6;

fn prec(f: &Formula) -> u8 {
    match f.view() {
        FormulaView::Var(..) => P_ATOM,
        FormulaView::Neg(..) => P_NEG,
        FormulaView::And(..) => P_AND,
        FormulaView::Or(..) => P_OR,
        FormulaView::Imp(..) => P_IMP,
        FormulaView::Iff(..) => P_IFF,
    }
}

/// Render the canonical infix form of `f`.
pub fn show(f: &Formula) -> String {
    format!("{}", f)
}

/// Pretty print this formula according to the grammar's precedence rules.
pub fn print_formula(f: &Formula, out: &mut fmt::Formatter) -> fmt::Result {
    pp_(f, out)
}

fn pp_(f: &Formula, out: &mut fmt::Formatter) -> fmt::Result {
    use FormulaView::*;
    match f.view() {
        Var(s) => write!(out, "{}", s),
        Neg(a) => {
            write!(out, "¬")?;
            // wrap the operand only if it binds weaker than `¬` itself
            if prec(a) < P_NEG {
                pp_paren_(a, out)
            } else {
                pp_(a, out)
            }
        }
        And(a, b) => pp_bin_(a, "∧", b, P_AND, out),
        Or(a, b) => pp_bin_(a, "∨", b, P_OR, out),
        Imp(a, b) => pp_bin_(a, "→", b, P_IMP, out),
        Iff(a, b) => pp_bin_(a, "↔", b, P_IFF, out),
    }
}

/// Binary connective at precedence `p`. The left operand comes from the
/// next-higher grammar level, so an equal-precedence left child needs
/// parentheses; the right operand is the same level (right-associative),
/// so only a strictly weaker right child does.
fn pp_bin_(l: &Formula, op: &str, r: &Formula, p: u8, out: &mut fmt::Formatter) -> fmt::Result {
    if prec(l) <= p {
        pp_paren_(l, out)?;
    } else {
        pp_(l, out)?;
    }
    write!(out, "{}", op)?;
    if prec(r) < p {
        pp_paren_(r, out)
    } else {
        pp_(r, out)
    }
}

fn pp_paren_(f: &Formula, out: &mut fmt::Formatter) -> fmt::Result {
    write!(out, "(")?;
    pp_(f, out)?;
    write!(out, ")")
}

#[cfg(test)]
mod test {
    use super::super::parse;

    #[test]
    fn test_printer() {
        let pairs = [
            ("A", "A"),
            ("¬A", "¬A"),
            ("¬¬A", "¬¬A"),
            ("~(A -> B)", "¬(A→B)"),
            ("¬(A∧B)", "¬(A∧B)"),
            ("¬A∧B", "¬A∧B"),
            // right-assoc chains need no inner parentheses
            ("A->(B->C)", "A→B→C"),
            ("A∧(B∧C)", "A∧B∧C"),
            ("A∨(B∨C)", "A∨B∨C"),
            // left nesting of the same connective keeps its parentheses
            ("(A->B)->C", "(A→B)→C"),
            ("(A∧B)∧C", "(A∧B)∧C"),
            // mixed precedence
            ("(A∨B)∧C", "(A∨B)∧C"),
            ("A∨B∧C", "A∨B∧C"),
            ("(A↔B)->C", "(A↔B)→C"),
            ("A↔(B->C)", "A↔B→C"),
            ("α->(β->α)", "α→β→α"),
        ];

        for (x, s) in &pairs {
            let f = parse(x).unwrap_or_else(|e| panic!("parsing {:?}: {}", x, e));
            let r2 = format!("{}", f);
            assert_eq!(&r2, *s, "printing {:?} (left: actual, right: expected)", x);
        }
    }

    #[test]
    fn test_round_trip() {
        let inputs = [
            "A",
            "¬¬¬A",
            "A->B->C",
            "(A->B)->C",
            "¬(A∧B)∨¬(A∨B)",
            "A↔(B↔C)",
            "(A↔B)↔C",
            "((P→Q)∧(Q→R))→(P→R)",
            "(α->(β->γ))->((α->β)->(α->γ))",
            "(¬β->¬α)->((¬β->α)->β)",
        ];
        for x in &inputs {
            let f = parse(x).unwrap();
            let shown = format!("{}", f);
            let f2 = parse(&shown)
                .unwrap_or_else(|e| panic!("re-parsing {:?} (from {:?}): {}", shown, x, e));
            assert_eq!(f, f2, "round trip of {:?} via {:?}", x, shown);
        }
    }
}
