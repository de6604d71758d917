// =============================================================================
// MAGMA — La structure "combine seul"
// =============================================================================
//
// Un Magma sur un ensemble A est la structure algébrique la plus faible :
// une seule opération binaire `combine : A × A → A`, fermée sur A.
// Aucune autre loi n'est exigée (ni associativité, ni élément neutre).
//
// ANALOGIE : c'est le "squelette" commun à l'addition, à la concaténation,
// à la soustraction... tout ce qui prend deux A et rend un A.
//
// Le Quasigroup (voir quasigroup.rs) étend ce trait avec deux divisions.
//
// Ce module fournit aussi les FILTRES conditionnels :
//   filter_first(p, M)  → combine seulement si p(x), sinon rend y
//   filter_second(p, M) → combine seulement si p(y), sinon rend x
//
// =============================================================================

/// Un magma sur A : une opération binaire fermée.
///
/// Le trait est implémenté par une VALEUR d'instance, pas par A lui-même :
/// plusieurs magmas peuvent donc coexister pour le même ensemble
/// (addition et multiplication sur `i64`, par exemple).
pub trait Magma<A> {
    /// Combine deux éléments de A.
    fn combine(&self, x: A, y: A) -> A;
}

impl<A, M: Magma<A> + ?Sized> Magma<A> for &M {
    fn combine(&self, x: A, y: A) -> A {
        (**self).combine(x, y)
    }
}

impl<A, M: Magma<A> + ?Sized> Magma<A> for Box<M> {
    fn combine(&self, x: A, y: A) -> A {
        (**self).combine(x, y)
    }
}

/// Magma construit à partir d'une simple fonction `(x, y) -> z`.
///
/// C'est l'équivalent d'un "enregistrement de fonctions" : pratique pour
/// obtenir une instance sans déclarer de type.
#[derive(Debug, Clone, Copy)]
pub struct FnMagma<F> {
    combine: F,
}

impl<F> FnMagma<F> {
    /// Crée un magma dont `combine` délègue à la fonction donnée
    pub fn new(combine: F) -> Self {
        FnMagma { combine }
    }
}

impl<A, F: Fn(A, A) -> A> Magma<A> for FnMagma<F> {
    fn combine(&self, x: A, y: A) -> A {
        (self.combine)(x, y)
    }
}

/// Magma filtré sur son PREMIER argument (voir [`filter_first`]).
#[derive(Debug, Clone, Copy)]
pub struct FilterFirst<P, M> {
    predicate: P,
    magma: M,
}

impl<A, P, M> Magma<A> for FilterFirst<P, M>
where
    P: Fn(&A) -> bool,
    M: Magma<A>,
{
    fn combine(&self, x: A, y: A) -> A {
        if (self.predicate)(&x) {
            self.magma.combine(x, y)
        } else {
            y
        }
    }
}

/// Magma filtré sur son SECOND argument (voir [`filter_second`]).
#[derive(Debug, Clone, Copy)]
pub struct FilterSecond<P, M> {
    predicate: P,
    magma: M,
}

impl<A, P, M> Magma<A> for FilterSecond<P, M>
where
    P: Fn(&A) -> bool,
    M: Magma<A>,
{
    fn combine(&self, x: A, y: A) -> A {
        if (self.predicate)(&y) {
            self.magma.combine(x, y)
        } else {
            x
        }
    }
}

/// Combinaison gardée par le premier argument.
///
/// `filter_first(p, m).combine(x, y)` vaut `m.combine(x, y)` si `p(x)`,
/// et `y` sinon : la combinaison est sautée et le second argument passe
/// tel quel. Aucun élément neutre n'est nécessaire.
pub fn filter_first<A, P, M>(predicate: P, magma: M) -> FilterFirst<P, M>
where
    P: Fn(&A) -> bool,
    M: Magma<A>,
{
    FilterFirst { predicate, magma }
}

/// Combinaison gardée par le second argument (miroir de [`filter_first`]).
///
/// `filter_second(p, m).combine(x, y)` vaut `m.combine(x, y)` si `p(y)`,
/// et `x` sinon. Utilisé dans un fold, cela revient à ignorer les éléments
/// qui ne satisfont pas `p` tout en gardant l'accumulateur.
pub fn filter_second<A, P, M>(predicate: P, magma: M) -> FilterSecond<P, M>
where
    P: Fn(&A) -> bool,
    M: Magma<A>,
{
    FilterSecond { predicate, magma }
}

// =============================================================================
// TESTS
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    /// Concaténation de chaînes : un magma NON commutatif
    fn concat() -> FnMagma<fn(String, String) -> String> {
        FnMagma::new(|x: String, y: String| x + &y)
    }

    fn non_empty(s: &String) -> bool {
        !s.is_empty()
    }

    #[test]
    fn test_fn_magma_combine() {
        let m = concat();
        assert_eq!(m.combine(String::from("ab"), String::from("cd")), "abcd");
    }

    #[test]
    fn test_reference_is_a_magma() {
        let m = concat();
        let by_ref: &dyn Magma<String> = &m;
        assert_eq!(by_ref.combine(String::from("a"), String::from("b")), "ab");

        let boxed: Box<dyn Magma<String>> = Box::new(concat());
        assert_eq!(boxed.combine(String::from("x"), String::from("y")), "xy");
    }

    #[test]
    fn test_filter_first_delegates_when_predicate_holds() {
        let m = filter_first(non_empty, concat());
        assert_eq!(m.combine(String::from("a"), String::from("b")), "ab");
    }

    #[test]
    fn test_filter_first_passes_second_through() {
        let m = filter_first(non_empty, concat());
        assert_eq!(m.combine(String::new(), String::from("b")), "b");
    }

    #[test]
    fn test_filter_second_delegates_when_predicate_holds() {
        let m = filter_second(non_empty, concat());
        assert_eq!(m.combine(String::from("a"), String::from("b")), "ab");
    }

    #[test]
    fn test_filter_second_passes_first_through() {
        let m = filter_second(non_empty, concat());
        assert_eq!(m.combine(String::from("a"), String::new()), "a");
    }

    #[test]
    fn test_filter_only_looks_at_its_own_argument() {
        // filter_first ignore p(y), filter_second ignore p(x)
        let first = filter_first(|s: &String| s.starts_with('k'), concat());
        assert_eq!(first.combine(String::from("keep"), String::from("drop")), "keepdrop");

        let second = filter_second(|s: &String| s.starts_with('k'), concat());
        assert_eq!(second.combine(String::from("drop"), String::from("keep")), "dropkeep");
        assert_eq!(second.combine(String::from("keep"), String::from("drop")), "keep");
    }
}
