// =============================================================================
// QUASIRUST — Point d'entrée : démonstration des quasigroupes
// =============================================================================
//
// Ce main.rs montre un exemple complet :
//   1. Définir un quasigroupe concret (entiers, +, y - x, x - y)
//   2. Réduire des séquences (concat_all, left_inv_all, right_inv_all)
//   3. Dériver de nouvelles instances (reverse, endo)
//   4. Filtrer la combinaison (filter_first, filter_second)
//   5. Contrôler la loi sur des échantillons
//
// Verbosité des logs : variable d'environnement RUST_LOG (défaut : info).
//   RUST_LOG=quasirust=trace cargo run
//
// =============================================================================

use quasirust::core::laws;
use quasirust::{
    concat_all, endo, filter_first, filter_second, left_inv_all, reverse, right_inv_all,
    FnMagma, FnQuasigroup, Magma, Quasigroup,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("╔══════════════════════════════════════════════════╗");
    println!("║      QUASIRUST — Quasigroupes génériques         ║");
    println!("║      Combinateurs structurels et folds           ║");
    println!("╚══════════════════════════════════════════════════╝\n");

    // ═══════════════════════════════════════════════════════════
    // ÉTAPE 1 : Un quasigroupe concret
    // ═══════════════════════════════════════════════════════════
    println!("═══ ÉTAPE 1 : Quasigroupe additif sur i64 ═══\n");

    let sum = FnQuasigroup::new(
        |x: i64, y: i64| x + y,
        |x: i64, y: i64| y - x,
        |x: i64, y: i64| x - y,
    );
    println!("  combine(3, 4)   = {}", sum.combine(3, 4));
    println!("  left_inv(3, 4)  = {}", sum.left_inv(3, 4));
    println!("  right_inv(3, 4) = {}\n", sum.right_inv(3, 4));

    // ═══════════════════════════════════════════════════════════
    // ÉTAPE 2 : Folds gauche → droite
    // ═══════════════════════════════════════════════════════════
    println!("═══ ÉTAPE 2 : Folds (accumulateur en premier) ═══\n");

    println!("  concat_all(0, [1, 2, 3])       = {}", concat_all(&sum, 0, [1, 2, 3]));
    println!("  left_inv_all(0, [1, 2, 3, 4])  = {}", left_inv_all(&sum, 0, [1, 2, 3, 4]));
    println!("  right_inv_all(0, [1, 2, 3])    = {}\n", right_inv_all(&sum, 0, [1, 2, 3]));

    // ═══════════════════════════════════════════════════════════
    // ÉTAPE 3 : Instances dérivées
    // ═══════════════════════════════════════════════════════════
    println!("═══ ÉTAPE 3 : reverse et endo ═══\n");

    let words = FnMagma::new(|x: String, y: String| x + &y);
    let reversed_words = reverse(&words);
    let parts = ["a", "b", "c"].map(String::from);
    println!(
        "  concat_all(\"\", [a, b, c])          = {:?}",
        concat_all(&words, String::new(), parts.clone())
    );
    println!(
        "  concat_all(reverse, \"\", [a, b, c]) = {:?}",
        concat_all(&reversed_words, String::new(), parts)
    );

    let negated = endo(|x: i64| -x, &sum);
    println!("  endo(-x).combine(3, 4)            = {}\n", negated.combine(3, 4));

    // ═══════════════════════════════════════════════════════════
    // ÉTAPE 4 : Combinaison conditionnelle
    // ═══════════════════════════════════════════════════════════
    println!("═══ ÉTAPE 4 : filter_first / filter_second ═══\n");

    let readings = [12, -1, 7, -1, 30];
    let valid_only = filter_second(|r: &i64| *r >= 0, &sum);
    println!(
        "  somme des mesures valides {:?} = {}",
        readings,
        concat_all(&valid_only, 0, readings)
    );
    let gated = filter_first(|acc: &i64| *acc < 10, &sum);
    println!(
        "  filter_first(acc < 10) sur [4, 5, 6, 7] = {}\n",
        concat_all(&gated, 0, [4, 5, 6, 7])
    );

    // ═══════════════════════════════════════════════════════════
    // ÉTAPE 5 : Contrôle de la loi
    // ═══════════════════════════════════════════════════════════
    println!("═══ ÉTAPE 5 : Vérification de la loi ═══\n");

    let samples = [-3, 0, 1, 8];
    for (name, outcome) in [
        ("sum", laws::check_quasigroup_all(&sum, &samples[..])),
        ("reverse(sum)", laws::check_quasigroup_all(&reverse(&sum), &samples[..])),
        ("endo(-x, sum)", laws::check_quasigroup_all(&negated, &samples[..])),
    ] {
        match outcome {
            Ok(()) => info!(instance = name, "loi respectée"),
            Err(violation) => warn!(instance = name, %violation, "loi violée"),
        }
    }
}
