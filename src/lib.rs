//! # Propositional Hilbert-system proof kernel.
//!
//! This library is the kernel behind a proof-training UI: the set of type
//! definitions (most importantly, formulas and justified proof steps) and
//! the rules to validate them.
//!
//! It contains:
//! - immutable formula trees with structural equality (in `formula`)
//! - a small syntax for parsing and canonical printing (in `syntax`)
//! - Hilbert axiom schemas with metavariable matching and instantiation
//!   (in `schema`, `subst`)
//! - a best-effort, multi-error proof checker (in `proof`)
//! - brute-force truth-table semantics with explosion guards (in `semantics`)
//!
//! Every exported operation is pure and synchronous: the kernel keeps no
//! state between calls, and inputs are never mutated.

#![deny(unsafe_code)]

pub mod error;
pub mod formula;
pub mod proof;
pub mod schema;
pub mod semantics;
pub mod subst;
pub mod syntax;

pub use error::{Error, Result};
pub use formula::{Formula, FormulaView, Symbol};
pub use proof::{check_proof, CheckResult, IffDir, Justification, LineError, Side, Step};
pub use schema::{instantiate, is_meta_name, match_schema, match_schema_with, Axiom};
pub use semantics::{
    collect_vars, entails, evaluate, is_tautology, truth_table, Entailment, TruthTable,
    TruthTableRow, Valuation,
};
pub use subst::Subst;
pub use syntax::{parse, show};
