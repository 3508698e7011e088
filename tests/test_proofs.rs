use hilbert_core::*;

fn step(line: usize, formula: &str, just: Justification) -> Step {
    Step {
        line,
        formula: formula.to_string(),
        just,
    }
}

fn strs(texts: &[&str]) -> Vec<String> {
    texts.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_identity_from_axioms() {
    // the classic Hilbert derivation of A→A
    let steps = [
        step(
            1,
            "(A->((A->A)->A))->((A->(A->A))->(A->A))",
            Justification::Ax { axiom: Axiom::A2 },
        ),
        step(2, "A->((A->A)->A)", Justification::Ax { axiom: Axiom::A1 }),
        step(
            3,
            "(A->(A->A))->(A->A)",
            Justification::Mp { from: 2, implies_from: 1 },
        ),
        step(4, "A->(A->A)", Justification::Ax { axiom: Axiom::A1 }),
        step(5, "A->A", Justification::Mp { from: 4, implies_from: 3 }),
    ];
    let res = check_proof(&steps, "A->A", &[]);
    assert!(res.ok, "errors: {:?}", res.errors);
}

#[test]
fn test_multi_rule_derivation() {
    let given = strs(&["P->Q", "Q->R", "P∧S"]);
    let steps = [
        step(4, "P->R", Justification::Hs { left: 1, right: 2 }),
        step(5, "P", Justification::Simp { from: 3, pick: Side::Left }),
        step(6, "R", Justification::Mp { from: 5, implies_from: 4 }),
        step(7, "S", Justification::Simp { from: 3, pick: Side::Right }),
        step(8, "R∧S", Justification::Adj { left: 6, right: 7 }),
    ];
    let res = check_proof(&steps, "R∧S", &given);
    assert!(res.ok, "errors: {:?}", res.errors);
}

#[test]
fn test_iff_mt_ds_derivation() {
    let given = strs(&["A↔B", "¬B", "A∨C"]);
    let steps = [
        step(4, "A->B", Justification::IffElim { from: 1, dir: IffDir::Forward }),
        step(5, "¬A", Justification::Mt { imp: 4, not: 2 }),
        step(6, "C", Justification::Ds { disj: 3, not: 5 }),
    ];
    let res = check_proof(&steps, "C", &given);
    assert!(res.ok, "errors: {:?}", res.errors);
}

#[test]
fn test_broken_proof_collects_every_error() {
    let given = strs(&["A", "A->B"]);
    let steps = [
        // wrong conclusion
        step(3, "C", Justification::Mp { from: 1, implies_from: 2 }),
        // does not parse
        step(4, "B ∧ ∧", Justification::Adj { left: 1, right: 3 }),
        // wrong axiom claim
        step(5, "A->(B->C)", Justification::Ax { axiom: Axiom::A1 }),
    ];
    let res = check_proof(&steps, "B", &given);
    assert!(!res.ok);
    let lines: Vec<usize> = res.errors.iter().map(|e| e.line).collect();
    // one diagnostic per broken step, then the goal mismatch on the last line
    assert_eq!(lines, vec![3, 4, 5, 5]);
}

#[test]
fn test_round_trip_through_check() {
    // canonical renderings feed back through the checker unchanged
    let f = parse("((P→Q)∧(Q→R))→(P→R)").unwrap();
    let shown = show(&f);
    assert_eq!(parse(&shown).unwrap(), f);
}

#[test]
fn test_axioms_are_tautologies() {
    assert!(is_tautology(&parse("A->(B->A)").unwrap()));

    let subst = Subst::new()
        .bind("α".into(), parse("A").unwrap())
        .bind("β".into(), parse("B").unwrap())
        .bind("γ".into(), parse("C").unwrap());
    for axiom in [Axiom::A1, Axiom::A2, Axiom::A3] {
        let inst = instantiate(&axiom.schema(), &subst).unwrap();
        assert!(is_tautology(&inst), "{} instance {} must be a tautology", axiom, inst);
    }
}

#[test]
fn test_entailment_mirrors_mp() {
    let a = parse("A").unwrap();
    let ab = parse("A->B").unwrap();
    let b = parse("B").unwrap();
    assert!(entails(&[a.clone(), ab], &b).is_valid());

    match entails(&[a], &b) {
        Entailment::Valid => panic!("A alone does not entail B"),
        Entailment::Invalid { countermodels } => {
            let cm = &countermodels[0];
            assert_eq!(cm.get("A").copied(), Some(true));
            assert_eq!(cm.get("B").copied().unwrap_or(false), false);
        }
    }
}

#[test]
fn test_checked_conclusion_is_entailed() {
    // a syntactically valid derivation is also semantically valid
    let given = strs(&["P->Q", "Q->R", "P∧S"]);
    let premises: Vec<Formula> = given.iter().map(|s| parse(s).unwrap()).collect();
    let conclusion = parse("R∧S").unwrap();
    assert!(entails(&premises, &conclusion).is_valid());
}
