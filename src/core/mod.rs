// =============================================================================
// CORE — Module principal du cœur algébrique
// =============================================================================
//
// Ce module regroupe toute la logique algébrique pure :
// pas d'I/O, pas d'état partagé — uniquement des traits et des fonctions
// d'ordre supérieur qui recâblent des opérations existantes.
//
// Architecture :
//   magma       → la structure "combine seul" + filtres conditionnels
//   quasigroup  → le contrat de quasigroupe + reverse / endo
//   fold        → les réductions gauche → droite (concat_all, ...)
//   laws        → vérification optionnelle des lois sur des échantillons
//
// =============================================================================

pub mod magma;
pub mod quasigroup;
pub mod fold;
pub mod laws;
