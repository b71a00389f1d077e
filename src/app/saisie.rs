//! src/app/saisie.rs
//!
//! Saisie texte -> nombres -> noyau -> texte affiché.
//!
//! Contrats :
//! - Aucune formule ici : on lit, on appelle le noyau, on formate.
//! - Affichage à DIGITS_AFFICHAGE décimales, indépendant de `accuracy`
//!   (qui ne gouverne que l’arrondi interne du noyau).
//! - Tout échec (lecture ou noyau) devient une ErreurEval ; l’UI affiche
//!   MSG_ENTREE_INVALIDE quel qu’en soit le genre.

use crate::noyau::{evaluer_branchement, linear_algorithm, Branche, ErreurEval, Fonction};

/// Décimales affichées dans le champ résultat.
pub const DIGITS_AFFICHAGE: usize = 5;

/// Message unique affiché pour tout échec.
pub const MSG_ENTREE_INVALIDE: &str = "Invalid input";

/// Lit un entier (espaces autour tolérés).
pub fn lire_entier(nom: &str, texte: &str) -> Result<i64, ErreurEval> {
    texte
        .trim()
        .parse::<i64>()
        .map_err(|e| ErreurEval::EntreeInvalide(format!("{nom} = {texte:?} : {e}")))
}

/// Lit un réel (espaces autour tolérés). "inf"/"NaN" sont lus puis refusés par le noyau.
pub fn lire_reel(nom: &str, texte: &str) -> Result<f64, ErreurEval> {
    texte
        .trim()
        .parse::<f64>()
        .map_err(|e| ErreurEval::EntreeInvalide(format!("{nom} = {texte:?} : {e}")))
}

fn formater(v: f64) -> String {
    format!("{v:.prec$}", prec = DIGITS_AFFICHAGE)
}

/// Onglet linéaire : quatre champs texte -> résultat affiché.
pub fn calculer_lineaire(
    x: &str,
    y: &str,
    z: &str,
    accuracy: &str,
) -> Result<String, ErreurEval> {
    let x = lire_entier("x", x)?;
    let y = lire_entier("y", y)?;
    let z = lire_entier("z", z)?;
    let accuracy = lire_entier("accuracy", accuracy)?;

    let v = linear_algorithm(x, y, z, accuracy)?;
    Ok(formater(v.to_f64()))
}

/// Onglet branchement : deux champs texte + fonction -> résultat affiché
/// + branche retenue (panneau “Démarche”).
pub fn calculer_branchement(
    x: &str,
    y: &str,
    f: Fonction,
) -> Result<(String, Branche), ErreurEval> {
    let x = lire_reel("x", x)?;
    let y = lire_reel("y", y)?;

    let e = evaluer_branchement(x, y, f)?;
    Ok((formater(e.valeur), e.branche))
}
