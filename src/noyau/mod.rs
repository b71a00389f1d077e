//! Noyau d’évaluation : deux formules fermées
//!
//! Organisation interne :
//! - erreur.rs      : ErreurEval (entrée invalide / division par zéro / indéfini)
//! - numerique.rs   : division sûre, puissances (0^0 = 1), arrondi décimal exact
//! - trig.rs        : sélecteur cot/sin/cos/tan + détection des pôles
//! - lineaire.rs    : algorithme linéaire (partie rationnelle exacte)
//! - branchement.rs : fonction par morceaux (liste de décision ordonnée)

pub mod branchement;
pub mod erreur;
pub mod lineaire;
pub mod numerique;
pub mod trig;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use branchement::{branching_algorithm, evaluer_branchement, Branche, EvaluationBranchee};
pub use erreur::ErreurEval;
pub use lineaire::{linear_algorithm, PRECISION_DEFAUT};
pub use numerique::ValeurArrondie;
pub use trig::Fonction;
