// =============================================================================
// QUASIRUST — Quasigroupes génériques en Rust
// =============================================================================
//
// Quasirust fournit l'abstraction algébrique de QUASIGROUPE : un ensemble muni
// d'une opération binaire `combine` et de deux opérations "inverses" qui
// défont la combinaison par la gauche et par la droite.
//
// Architecture :
//   core/     → Le cœur algébrique pur (traits, combinateurs, folds)
//
// Concepts fondamentaux :
//   Magma      = un ensemble + une opération binaire (combine)
//   Quasigroup = un magma + left_inv + right_inv (division à gauche/droite)
//   reverse    = le quasigroupe dual (arguments permutés)
//   endo       = pré-transformation ponctuelle des arguments
//   folds      = réduction gauche → droite d'une séquence
//
// =============================================================================

pub mod core;

pub use crate::core::fold::{concat_all, left_inv_all, right_inv_all};
pub use crate::core::laws::LawViolation;
pub use crate::core::magma::{filter_first, filter_second, FnMagma, Magma};
pub use crate::core::quasigroup::{endo, reverse, FnQuasigroup, Quasigroup};
