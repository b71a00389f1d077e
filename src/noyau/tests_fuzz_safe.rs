//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler les deux algorithmes sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - budget temps global
//! - aucune panique : tout échec est une ErreurEval
//! - propriétés (proptest) : déterminisme, nombre de décimales, ordre des gardes

use std::time::{Duration, Instant};

use proptest::prelude::*;

use super::branchement::{selectionner_branche, Branche};
use super::trig::TOLERANCE_POLE;
use super::{branching_algorithm, linear_algorithm, ErreurEval, Fonction};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn entier(&mut self, borne: i64) -> i64 {
        self.pick((2 * borne + 1) as u32) as i64 - borne
    }
    fn reel(&mut self, borne: f64) -> f64 {
        let u = self.next_u32() as f64 / u32::MAX as f64;
        (2.0 * u - 1.0) * borne
    }
    fn fonction(&mut self) -> Fonction {
        Fonction::TOUTES[self.pick(4) as usize]
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’entrées (bornée) ------------------------ */

fn gen_special(rng: &mut Rng) -> f64 {
    // valeurs piégeuses : pôles, bornes, non finis
    use std::f64::consts::{FRAC_PI_2, PI};
    match rng.pick(10) {
        0 => 0.0,
        1 => PI,
        2 => FRAC_PI_2,
        3 => 7.0,
        4 => 12.0,
        5 => f64::NAN,
        6 => f64::INFINITY,
        7 => 1e300,
        8 => -FRAC_PI_2,
        _ => rng.reel(20.0),
    }
}

/* ------------------------ Causes attendues des échecs ------------------------ */

/// f(x) tombe sur un pôle (cot : sin ≈ 0, tan : cos ≈ 0).
fn pole_de_f(x: f64, f: Fonction) -> bool {
    match f {
        Fonction::Cot => x.sin().abs() <= TOLERANCE_POLE,
        Fonction::Tan => x.cos().abs() <= TOLERANCE_POLE,
        Fonction::Sin | Fonction::Cos => false,
    }
}

/// Même formule sans aucune garde : sert à vérifier qu’un Indefini vient d’un dépassement.
fn valeur_brute(x: f64, y: f64, f: Fonction) -> f64 {
    let fx = match f {
        Fonction::Sin => x.sin(),
        Fonction::Cos => x.cos(),
        Fonction::Tan => x.sin() / x.cos(),
        Fonction::Cot => x.cos() / x.sin(),
    };
    let f_cube = fx.powi(3);
    match selectionner_branche(x * y) {
        Branche::Un => f_cube + y.cos() / y.sin(),
        Branche::Deux => f_cube.sinh() + y * y,
        Branche::Trois => (x - f_cube).cos(),
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_lineaire_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..400 {
        budget(t0, max);

        let (x, y, z) = (rng.entier(6), rng.entier(6), rng.entier(3));
        let accuracy = rng.entier(12);

        match linear_algorithm(x, y, z, accuracy) {
            Ok(v) => {
                assert_eq!(v.digits() as i64, accuracy);
                assert!(v.to_f64().is_finite());
                seen_ok += 1;
            }
            Err(ErreurEval::EntreeInvalide(_)) => {
                assert!(accuracy < 0, "({x},{y},{z},{accuracy})");
                seen_err += 1;
            }
            Err(ErreurEval::DivisionParZero(_)) => {
                assert!(
                    z == 0 || matches!((x, y), (0, 0) | (1, 1) | (-1, -1)),
                    "({x},{y},{z})"
                );
                seen_err += 1;
            }
            Err(e) => panic!("erreur non attendue: ({x},{y},{z},{accuracy}) err={e}"),
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 50, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_branchement_valeurs_piegeuses() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..400 {
        budget(t0, max);

        let (x, y, f) = (gen_special(&mut rng), gen_special(&mut rng), rng.fonction());

        match branching_algorithm(x, y, f) {
            Ok(v) => {
                assert!(v.is_finite(), "({x},{y},{f}) -> {v}");
                assert!(!pole_de_f(x, f), "({x},{y},{f}) : pôle non détecté");
            }
            Err(ErreurEval::EntreeInvalide(_)) => {
                assert!(!x.is_finite() || !y.is_finite() || !(x * y).is_finite())
            }
            Err(ErreurEval::DivisionParZero(e)) => {
                let pole_cot_y = selectionner_branche(x * y) == Branche::Un
                    && y.sin().abs() <= TOLERANCE_POLE;
                assert!(
                    pole_de_f(x, f) || pole_cot_y,
                    "({x},{y},{f}) : division par zéro sans pôle ({e})"
                );
            }
            Err(ErreurEval::Indefini(e)) => {
                assert!(
                    !valeur_brute(x, y, f).is_finite(),
                    "({x},{y},{f}) : indéfini mais valeur brute finie ({e})"
                );
            }
        }
    }
}

#[test]
fn fuzz_safe_determinisme_meme_seed() {
    let tirage = |seed: u64| {
        let mut rng = Rng::new(seed);
        (0..100)
            .map(|_| {
                let (x, y, f) = (rng.reel(15.0), rng.reel(15.0), rng.fonction());
                branching_algorithm(x, y, f)
            })
            .collect::<Vec<_>>()
    };
    assert_eq!(tirage(42), tirage(42));
}

/* ------------------------ Propriétés ------------------------ */

fn fonction_strategy() -> impl Strategy<Value = Fonction> {
    prop::sample::select(Fonction::TOUTES.to_vec())
}

proptest! {
    #[test]
    fn prop_lineaire_deterministe(
        x in -50i64..50,
        y in -50i64..50,
        z in -50i64..50,
        accuracy in 0i64..15,
    ) {
        prop_assert_eq!(
            linear_algorithm(x, y, z, accuracy),
            linear_algorithm(x, y, z, accuracy)
        );
    }

    #[test]
    fn prop_lineaire_nombre_de_decimales(
        x in -20i64..20,
        y in -8i64..8,
        z in 1i64..50,
        accuracy in 1i64..15,
    ) {
        if let Ok(v) = linear_algorithm(x, y, z, accuracy) {
            let texte = v.to_string();
            let decimales = texte.split_once('.').map(|(_, d)| d.len());
            prop_assert_eq!(decimales, Some(accuracy as usize));
        }
    }

    #[test]
    fn prop_precision_negative_toujours_refusee(
        x in any::<i64>(),
        y in any::<i64>(),
        z in any::<i64>(),
        accuracy in i64::MIN..0,
    ) {
        prop_assert!(matches!(
            linear_algorithm(x, y, z, accuracy),
            Err(ErreurEval::EntreeInvalide(_))
        ));
    }

    #[test]
    fn prop_gardes_ordonnees(p in -1e6f64..1e6) {
        let b = selectionner_branche(p);
        match b {
            Branche::Un => prop_assert!(p > 12.0),
            Branche::Deux => prop_assert!(p < 7.0),
            Branche::Trois => prop_assert!((7.0..=12.0).contains(&p)),
        }
    }

    #[test]
    fn prop_branchement_deterministe(
        x in -20.0f64..20.0,
        y in -20.0f64..20.0,
        f in fonction_strategy(),
    ) {
        prop_assert_eq!(branching_algorithm(x, y, f), branching_algorithm(x, y, f));
    }
}
