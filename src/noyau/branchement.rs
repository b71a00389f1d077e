// src/noyau/branchement.rs
//
// Algorithme à branchement (fonction par morceaux)
// ------------------------------------------------
//   x·y > 12        : f(x)³ + cot(y)
//   sinon x·y < 7   : sinh(f(x)³) + y²
//   sinon           : cos(x - f(x)³)        (7 ≤ x·y ≤ 12, bornes incluses)
//
// Liste de décision ORDONNÉE : la première garde vraie gagne.
// Seule la branche retenue est évaluée (cot(y) n’est calculé qu’en branche 1).

use std::fmt;

use super::erreur::ErreurEval;
use super::numerique::{fini, puissance_entiere_f64};
use super::trig::{cot, Fonction};

/// Seuil haut (strict) de la branche 1.
pub const SEUIL_HAUT: f64 = 12.0;

/// Seuil bas (strict) de la branche 2.
pub const SEUIL_BAS: f64 = 7.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Branche {
    /// x·y > 12 : f(x)³ + cot(y)
    Un,
    /// x·y < 7 : sinh(f(x)³) + y²
    Deux,
    /// 7 ≤ x·y ≤ 12 : cos(x - f(x)³)
    Trois,
}

impl Branche {
    /// Formule de la branche, pour affichage.
    pub fn formule(self) -> &'static str {
        match self {
            Branche::Un => "x·y > 12 : f(x)³ + cot(y)",
            Branche::Deux => "x·y < 7 : sinh(f(x)³) + y²",
            Branche::Trois => "7 ≤ x·y ≤ 12 : cos(x − f(x)³)",
        }
    }
}

impl fmt::Display for Branche {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.formule())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EvaluationBranchee {
    pub branche: Branche,
    pub valeur: f64,
}

/// Sélection ordonnée (première garde vraie).
pub fn selectionner_branche(produit: f64) -> Branche {
    if produit > SEUIL_HAUT {
        Branche::Un
    } else if produit < SEUIL_BAS {
        Branche::Deux
    } else {
        Branche::Trois
    }
}

fn verifier_fini(nom: &str, v: f64) -> Result<f64, ErreurEval> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(ErreurEval::EntreeInvalide(format!("{nom} = {v} (non fini)")))
    }
}

/// Évalue la fonction par morceaux et indique la branche retenue.
pub fn evaluer_branchement(
    x: f64,
    y: f64,
    f: Fonction,
) -> Result<EvaluationBranchee, ErreurEval> {
    let x = verifier_fini("x", x)?;
    let y = verifier_fini("y", y)?;
    let produit = verifier_fini("x·y", x * y)?;

    let branche = selectionner_branche(produit);
    log::debug!("branchement x={x} y={y} f={f} x·y={produit} -> {branche:?}");

    let f_cube = puissance_entiere_f64(f.appliquer(x)?, 3);

    let valeur = match branche {
        Branche::Un => f_cube + cot(y)?,
        Branche::Deux => f_cube.sinh() + y * y,
        Branche::Trois => (x - f_cube).cos(),
    };

    Ok(EvaluationBranchee {
        branche,
        valeur: fini(valeur, branche.formule())?,
    })
}

/// API publique : valeur seule.
pub fn branching_algorithm(x: f64, y: f64, f: Fonction) -> Result<f64, ErreurEval> {
    evaluer_branchement(x, y, f).map(|e| e.valeur).inspect_err(|e| {
        log::debug!(
            "branchement x={x} y={y} f={f} -> échec {} ({e})",
            e.genre()
        )
    })
}
