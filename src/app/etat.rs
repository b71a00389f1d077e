//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir les champs des deux onglets (linéaire / branchement),
//! les résultats affichés et l’onglet actif, plus les actions simples.
//!
//! Contrats :
//! - Pas de formule ici : évaluation déléguée à saisie.rs (puis au noyau).
//! - Un échec affiche MSG_ENTREE_INVALIDE, quel qu’en soit le genre ;
//!   le genre part dans le journal.

use crate::noyau::{Branche, Fonction, PRECISION_DEFAUT};

use super::saisie::{calculer_branchement, calculer_lineaire, MSG_ENTREE_INVALIDE};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Onglet {
    #[default]
    Lineaire,
    Branchement,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    pub onglet: Onglet,

    // --- onglet linéaire ---
    pub x_lin: String,
    pub y_lin: String,
    pub z_lin: String,
    pub accuracy: String,
    pub resultat_lin: String,

    // --- onglet branchement ---
    pub x_br: String,
    pub y_br: String,
    pub fonction: Fonction,
    pub resultat_br: String,
    pub branche: Option<Branche>, // branche retenue au dernier calcul réussi
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            onglet: Onglet::default(),
            x_lin: String::new(),
            y_lin: String::new(),
            z_lin: String::new(),
            accuracy: PRECISION_DEFAUT.to_string(),
            resultat_lin: String::new(),
            x_br: String::new(),
            y_br: String::new(),
            fonction: Fonction::default(),
            resultat_br: String::new(),
            branche: None,
        }
    }
}

impl AppCalc {
    /// "Calculate" (onglet linéaire).
    pub fn evaluer_lineaire(&mut self) {
        let resultat = calculer_lineaire(&self.x_lin, &self.y_lin, &self.z_lin, &self.accuracy);
        self.resultat_lin = match resultat {
            Ok(texte) => texte,
            Err(e) => {
                log::debug!("onglet linéaire : {} ({e})", e.genre());
                MSG_ENTREE_INVALIDE.to_string()
            }
        };
    }

    /// "Calculate" (onglet branchement).
    pub fn evaluer_branchement(&mut self) {
        match calculer_branchement(&self.x_br, &self.y_br, self.fonction) {
            Ok((texte, branche)) => {
                self.resultat_br = texte;
                self.branche = Some(branche);
            }
            Err(e) => {
                log::debug!("onglet branchement : {} ({e})", e.genre());
                self.resultat_br = MSG_ENTREE_INVALIDE.to_string();
                self.branche = None;
            }
        }
    }

    /// Remise à zéro totale (champs + résultats, précision par défaut).
    pub fn reset_total(&mut self) {
        let onglet = self.onglet;
        *self = Self::default();
        self.onglet = onglet;
    }
}
