//! Calculatrice à deux formules
//!
//! - `noyau` : évaluation pure (linéaire + branchement), sans UI
//! - `app`   : état + vue egui, appelle le noyau avec des valeurs primitives

pub mod app;
pub mod noyau;

pub use noyau::{branching_algorithm, linear_algorithm, ErreurEval, Fonction, ValeurArrondie};
