// =============================================================================
// FOLD — Réductions d'une séquence par une opération de quasigroupe
// =============================================================================
//
// Trois réductions de même forme :
//   concat_all(Q, start_with, as)     → fold par combine
//   left_inv_all(Q, start_with, as)   → fold par left_inv
//   right_inv_all(Q, start_with, as)  → fold par right_inv
//
// ORDRE EXACT (strict, de gauche à droite) :
//   acc = start_with
//   pour chaque e de `as`, dans l'ordre : acc = op(acc, e)
//   retourner acc
//
// L'accumulateur est TOUJOURS le premier argument, l'élément le second.
// Aucune réorganisation ni parallélisation : les opérations ne sont ni
// commutatives ni associatives en général, seule la loi du quasigroupe
// est garantie.
//
// EXEMPLE avec (+, y - x, x - y) et start_with = 0 :
//   concat_all     [1, 2, 3]    → 0+1=1, 1+2=3, 3+3=6           → 6
//   left_inv_all   [1, 2, 3, 4] → 1-0=1, 2-1=1, 3-1=2, 4-2=2     → 2
//   right_inv_all  [1, 2, 3]    → 0-1=-1, -1-2=-3, -3-3=-6      → -6
//
// =============================================================================

use super::magma::Magma;
use super::quasigroup::Quasigroup;
use tracing::trace;

/// Fold gauche commun : compte les étapes pour la trace.
fn fold_left<A, I, F>(op_name: &'static str, start_with: A, elements: I, mut step: F) -> A
where
    I: IntoIterator<Item = A>,
    F: FnMut(A, A) -> A,
{
    let mut steps = 0usize;
    let mut acc = start_with;
    for element in elements {
        acc = step(acc, element);
        steps += 1;
    }
    trace!(op = op_name, steps, "fold terminé");
    acc
}

/// Réduit `elements` par `combine`, accumulateur en premier.
///
/// Ne demande qu'un [`Magma`] : tout quasigroupe convient.
/// Sur une séquence vide, rend `start_with` inchangé.
pub fn concat_all<A, M, I>(magma: &M, start_with: A, elements: I) -> A
where
    M: Magma<A> + ?Sized,
    I: IntoIterator<Item = A>,
{
    fold_left("combine", start_with, elements, |acc, e| magma.combine(acc, e))
}

/// Réduit `elements` par `left_inv`, accumulateur en premier.
pub fn left_inv_all<A, Q, I>(quasigroup: &Q, start_with: A, elements: I) -> A
where
    Q: Quasigroup<A> + ?Sized,
    I: IntoIterator<Item = A>,
{
    fold_left("left_inv", start_with, elements, |acc, e| {
        quasigroup.left_inv(acc, e)
    })
}

/// Réduit `elements` par `right_inv`, accumulateur en premier.
pub fn right_inv_all<A, Q, I>(quasigroup: &Q, start_with: A, elements: I) -> A
where
    Q: Quasigroup<A> + ?Sized,
    I: IntoIterator<Item = A>,
{
    fold_left("right_inv", start_with, elements, |acc, e| {
        quasigroup.right_inv(acc, e)
    })
}
