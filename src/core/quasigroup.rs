// =============================================================================
// QUASIGROUP — Un magma avec division à gauche et à droite
// =============================================================================
//
// Un Quasigroup sur A est un Magma muni de deux opérations supplémentaires :
//   left_inv  : A × A → A   (division à gauche)
//   right_inv : A × A → A   (division à droite)
//
// LA LOI (garantie par l'appelant, jamais vérifiée ici) :
//   Pour tous x, y dans A :
//
//     combine(x, left_inv(x, y))
//       = left_inv(x, combine(x, y))
//       = combine(right_inv(y, x), x)
//       = right_inv(combine(y, x), x)
//       = y
//
// EXEMPLE : les entiers avec combine = +, left_inv(x, y) = y - x,
// right_inv(x, y) = x - y. Contrairement à un groupe, un quasigroupe n'a
// besoin ni d'associativité ni d'élément neutre.
//
// COMBINATEURS STRUCTURELS :
//   reverse(Q)  → le quasigroupe dual (arguments permutés)
//   endo(f, Q)  → chaque opération applique d'abord f à ses deux arguments
//
// Les combinateurs ne regardent JAMAIS les éléments de A : ils se contentent
// de recâbler quelle opération est appelée, dans quel ordre.
//
// =============================================================================

use super::magma::Magma;

/// Un quasigroupe sur A : un [`Magma`] avec deux divisions.
///
/// Laws (non vérifiées par le système de types) :
///
/// - `combine(x, left_inv(x, y)) == y`
/// - `left_inv(x, combine(x, y)) == y`
/// - `combine(right_inv(y, x), x) == y`
/// - `right_inv(combine(y, x), x) == y`
///
/// Le module [`laws`](crate::core::laws) permet de contrôler ces égalités
/// sur des échantillons.
pub trait Quasigroup<A>: Magma<A> {
    /// Division à gauche : l'unique `z` tel que `combine(x, z) = y`.
    fn left_inv(&self, x: A, y: A) -> A;

    /// Division à droite : l'unique `z` tel que `combine(z, y) = x`.
    fn right_inv(&self, x: A, y: A) -> A;
}

impl<A, Q: Quasigroup<A> + ?Sized> Quasigroup<A> for &Q {
    fn left_inv(&self, x: A, y: A) -> A {
        (**self).left_inv(x, y)
    }

    fn right_inv(&self, x: A, y: A) -> A {
        (**self).right_inv(x, y)
    }
}

impl<A, Q: Quasigroup<A> + ?Sized> Quasigroup<A> for Box<Q> {
    fn left_inv(&self, x: A, y: A) -> A {
        (**self).left_inv(x, y)
    }

    fn right_inv(&self, x: A, y: A) -> A {
        (**self).right_inv(x, y)
    }
}

/// Quasigroupe construit à partir de trois fonctions.
///
/// ```
/// use quasirust::{FnQuasigroup, Magma, Quasigroup};
///
/// let sum = FnQuasigroup::new(
///     |x: i64, y: i64| x + y,
///     |x: i64, y: i64| y - x,
///     |x: i64, y: i64| x - y,
/// );
/// assert_eq!(sum.combine(2, sum.left_inv(2, 7)), 7);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnQuasigroup<C, L, R> {
    combine: C,
    left_inv: L,
    right_inv: R,
}

impl<C, L, R> FnQuasigroup<C, L, R> {
    /// Assemble un quasigroupe ; la loi reste à la charge de l'appelant
    pub fn new(combine: C, left_inv: L, right_inv: R) -> Self {
        FnQuasigroup {
            combine,
            left_inv,
            right_inv,
        }
    }
}

impl<A, C, L, R> Magma<A> for FnQuasigroup<C, L, R>
where
    C: Fn(A, A) -> A,
{
    fn combine(&self, x: A, y: A) -> A {
        (self.combine)(x, y)
    }
}

impl<A, C, L, R> Quasigroup<A> for FnQuasigroup<C, L, R>
where
    C: Fn(A, A) -> A,
    L: Fn(A, A) -> A,
    R: Fn(A, A) -> A,
{
    fn left_inv(&self, x: A, y: A) -> A {
        (self.left_inv)(x, y)
    }

    fn right_inv(&self, x: A, y: A) -> A {
        (self.right_inv)(x, y)
    }
}

/// Le dual d'un magma ou d'un quasigroupe (voir [`reverse`]).
#[derive(Debug, Clone, Copy)]
pub struct Reverse<Q> {
    inner: Q,
}

impl<Q> Reverse<Q> {
    /// Rend l'instance d'origine
    pub fn into_inner(self) -> Q {
        self.inner
    }
}

impl<A, Q: Magma<A>> Magma<A> for Reverse<Q> {
    fn combine(&self, x: A, y: A) -> A {
        self.inner.combine(y, x)
    }
}

impl<A, Q: Quasigroup<A>> Quasigroup<A> for Reverse<Q> {
    fn left_inv(&self, x: A, y: A) -> A {
        self.inner.right_inv(y, x)
    }

    fn right_inv(&self, x: A, y: A) -> A {
        self.inner.left_inv(y, x)
    }
}

/// Quasigroupe dual : on permute l'ordre des arguments de chaque opération.
///
/// - `reverse(q).combine(x, y) = q.combine(y, x)`
/// - `reverse(q).left_inv(x, y) = q.right_inv(y, x)`
/// - `reverse(q).right_inv(x, y) = q.left_inv(y, x)`
///
/// C'est l'analogue de l'algèbre opposée : la division à gauche devient
/// division à droite et inversement, et la loi est préservée.
/// (Sans la permutation des arguments des divisions, la loi tombe dès
/// le quasigroupe additif : `combine(x, x - y) = 2x - y`.)
/// `reverse(reverse(q))` se comporte exactement comme `q`.
///
/// Sur un simple [`Magma`], seul `combine` est permuté.
pub fn reverse<Q>(inner: Q) -> Reverse<Q> {
    Reverse { inner }
}

/// Pré-transformation ponctuelle (voir [`endo`]).
#[derive(Debug, Clone, Copy)]
pub struct Endo<F, Q> {
    f: F,
    inner: Q,
}

impl<A, F, Q> Magma<A> for Endo<F, Q>
where
    F: Fn(A) -> A,
    Q: Magma<A>,
{
    fn combine(&self, x: A, y: A) -> A {
        self.inner.combine((self.f)(x), (self.f)(y))
    }
}

impl<A, F, Q> Quasigroup<A> for Endo<F, Q>
where
    F: Fn(A) -> A,
    Q: Quasigroup<A>,
{
    fn left_inv(&self, x: A, y: A) -> A {
        self.inner.left_inv((self.f)(x), (self.f)(y))
    }

    fn right_inv(&self, x: A, y: A) -> A {
        self.inner.right_inv((self.f)(x), (self.f)(y))
    }
}

/// Applique l'endomorphisme `f` aux deux arguments avant de déléguer.
///
/// `endo(f, q).op(x, y) = q.op(f(x), f(y))` pour les trois opérations.
///
/// Ce n'est PAS un isomorphisme structurel : c'est à l'appelant de choisir
/// un `f` sous lequel la loi tient encore sur les résultats produits
/// (une bijection compatible, l'identité...).
///
/// En composition, le `f` le plus externe s'applique en premier :
/// `endo(g, endo(f, q)).combine(x, y) = q.combine(f(g(x)), f(g(y)))`.
pub fn endo<A, F, Q>(f: F, inner: Q) -> Endo<F, Q>
where
    F: Fn(A) -> A,
    Q: Magma<A>,
{
    Endo { f, inner }
}
