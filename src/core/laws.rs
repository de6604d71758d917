// =============================================================================
// LAWS — Vérification optionnelle de la loi du quasigroupe
// =============================================================================
//
// Le cœur ne vérifie JAMAIS la loi : ni FnQuasigroup::new, ni reverse, ni
// endo, ni les folds n'appellent ce module. Respecter la loi reste un
// contrat de l'appelant.
//
// Ce module sert aux tests (ceux de la crate comme ceux des utilisateurs) :
// on évalue les quatre égalités de la loi sur des points d'échantillon et
// on rapporte la PREMIÈRE qui échoue.
//
//   (1) combine(x, left_inv(x, y))  = y
//   (2) left_inv(x, combine(x, y))  = y
//   (3) combine(right_inv(y, x), x) = y
//   (4) right_inv(combine(y, x), x) = y
//
// =============================================================================

use std::fmt::Debug;

use thiserror::Error;
use tracing::debug;

use super::quasigroup::Quasigroup;

/// Une égalité de la loi qui ne tient pas sur l'échantillon `(x, y)`.
///
/// Les valeurs sont conservées sous leur forme `Debug` pour que l'erreur
/// reste indépendante du type des éléments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LawViolation {
    #[error("combine(x, left_inv(x, y)) = {found} au lieu de {y} (x = {x})")]
    CombineLeftInv { x: String, y: String, found: String },

    #[error("left_inv(x, combine(x, y)) = {found} au lieu de {y} (x = {x})")]
    LeftInvCombine { x: String, y: String, found: String },

    #[error("combine(right_inv(y, x), x) = {found} au lieu de {y} (x = {x})")]
    CombineRightInv { x: String, y: String, found: String },

    #[error("right_inv(combine(y, x), x) = {found} au lieu de {y} (x = {x})")]
    RightInvCombine { x: String, y: String, found: String },
}

/// Résultat d'une vérification de loi
pub type Result<T> = std::result::Result<T, LawViolation>;

/// Vérifie les quatre égalités de la loi au point `(x, y)`.
pub fn check_quasigroup<A, Q>(quasigroup: &Q, x: A, y: A) -> Result<()>
where
    Q: Quasigroup<A> + ?Sized,
    A: Clone + PartialEq + Debug,
{
    let q = quasigroup;

    let found = q.combine(x.clone(), q.left_inv(x.clone(), y.clone()));
    ensure(&x, &y, found, |x, y, found| LawViolation::CombineLeftInv { x, y, found })?;

    let found = q.left_inv(x.clone(), q.combine(x.clone(), y.clone()));
    ensure(&x, &y, found, |x, y, found| LawViolation::LeftInvCombine { x, y, found })?;

    let found = q.combine(q.right_inv(y.clone(), x.clone()), x.clone());
    ensure(&x, &y, found, |x, y, found| LawViolation::CombineRightInv { x, y, found })?;

    let found = q.right_inv(q.combine(y.clone(), x.clone()), x.clone());
    ensure(&x, &y, found, |x, y, found| LawViolation::RightInvCombine { x, y, found })?;

    Ok(())
}

/// Vérifie la loi sur toutes les paires ordonnées `(x, y)` de `samples`
/// (y compris `x = y`).
pub fn check_quasigroup_all<A, Q>(quasigroup: &Q, samples: &[A]) -> Result<()>
where
    Q: Quasigroup<A> + ?Sized,
    A: Clone + PartialEq + Debug,
{
    for x in samples {
        for y in samples {
            check_quasigroup(quasigroup, x.clone(), y.clone())?;
        }
    }
    Ok(())
}

fn ensure<A, F>(x: &A, y: &A, found: A, violation: F) -> Result<()>
where
    A: PartialEq + Debug,
    F: FnOnce(String, String, String) -> LawViolation,
{
    if found == *y {
        return Ok(());
    }
    let err = violation(format!("{:?}", x), format!("{:?}", y), format!("{:?}", found));
    debug!(error = %err, "loi du quasigroupe violée");
    Err(err)
}

// =============================================================================
// TESTS
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::quasigroup::{endo, reverse, FnQuasigroup};

    type Op = fn(i64, i64) -> i64;

    fn sum() -> FnQuasigroup<Op, Op, Op> {
        FnQuasigroup::new(
            |x: i64, y: i64| x + y,
            |x: i64, y: i64| y - x,
            |x: i64, y: i64| x - y,
        )
    }

    const SAMPLES: [i64; 5] = [-9, -1, 0, 4, 250];

    #[test]
    fn test_lawful_instance_passes() {
        assert_eq!(check_quasigroup_all(&sum(), &SAMPLES[..]), Ok(()));
        assert_eq!(check_quasigroup_all(&reverse(sum()), &SAMPLES[..]), Ok(()));
    }

    #[test]
    fn test_wrong_left_inv_is_reported() {
        // left_inv a les arguments inversés : x - y au lieu de y - x
        let broken = FnQuasigroup::new(
            |x: i64, y: i64| x + y,
            |x: i64, y: i64| x - y,
            |x: i64, y: i64| x - y,
        );
        let err = check_quasigroup(&broken, 1, 5).unwrap_err();
        assert_eq!(
            err,
            LawViolation::CombineLeftInv {
                x: "1".into(),
                y: "5".into(),
                found: "-3".into(),
            }
        );
    }

    #[test]
    fn test_wrong_right_inv_is_reported() {
        let broken = FnQuasigroup::new(
            |x: i64, y: i64| x + y,
            |x: i64, y: i64| y - x,
            |x: i64, y: i64| y - x,
        );
        let err = check_quasigroup(&broken, 2, 7).unwrap_err();
        assert!(matches!(err, LawViolation::CombineRightInv { .. }));
    }

    #[test]
    fn test_endo_can_break_the_law() {
        // Doubler les arguments ne préserve pas la loi : c'est à l'appelant
        // de choisir un endomorphisme compatible.
        let doubled = endo(|x: i64| x * 2, sum());
        assert!(check_quasigroup(&doubled, 1, 3).is_err());
    }

    #[test]
    fn test_violation_message() {
        let err = LawViolation::LeftInvCombine {
            x: "1".into(),
            y: "2".into(),
            found: "3".into(),
        };
        assert_eq!(
            err.to_string(),
            "left_inv(x, combine(x, y)) = 3 au lieu de 2 (x = 1)"
        );
    }
}
