// src/noyau/erreur.rs
//
// Taxonomie des échecs du noyau
// -----------------------------
// - EntreeInvalide  : texte non numérique, précision hors bornes, NaN/∞
// - DivisionParZero : z == 0, dénominateur nul, pôle de cot/tan
// - Indefini        : résultat NaN/∞ (dépassement, forme indéterminée)
//
// L’UI n’affiche qu’un seul message pour tous les cas, mais le noyau les
// distingue (tests + journal).

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErreurEval {
    #[error("entrée invalide : {0}")]
    EntreeInvalide(String),

    #[error("division par zéro : {0}")]
    DivisionParZero(String),

    #[error("résultat indéfini : {0}")]
    Indefini(String),
}

impl ErreurEval {
    /// Nom court du type d’échec (journal).
    pub fn genre(&self) -> &'static str {
        match self {
            ErreurEval::EntreeInvalide(_) => "entree_invalide",
            ErreurEval::DivisionParZero(_) => "division_par_zero",
            ErreurEval::Indefini(_) => "indefini",
        }
    }
}
