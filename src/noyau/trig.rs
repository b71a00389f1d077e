// src/noyau/trig.rs
//
// Fonctions trig du sélecteur (cot/sin/cos/tan) + pôles
// -----------------------------------------------------
// - Ensemble FERMÉ : pas de table de correspondance dynamique
// - cot(a) = cos(a)/sin(a), pôle si |sin(a)| ≤ TOLERANCE_POLE
// - tan(a) = sin(a)/cos(a), pôle si |cos(a)| ≤ TOLERANCE_POLE
//
// En f64, sin(π) vaut ~1.22e-16 et non 0 : sans tolérance, cot(π) donnerait
// ~-8.2e15 au lieu d’un pôle.

use std::fmt;
use std::str::FromStr;

use super::erreur::ErreurEval;
use super::numerique::div_sure;

/// Seuil sous lequel le diviseur de cot/tan est considéré nul.
pub const TOLERANCE_POLE: f64 = 1e-12;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Fonction {
    #[default]
    Cot,
    Sin,
    Cos,
    Tan,
}

impl Fonction {
    /// Ordre du sélecteur (UI).
    pub const TOUTES: [Fonction; 4] = [
        Fonction::Cot,
        Fonction::Sin,
        Fonction::Cos,
        Fonction::Tan,
    ];

    pub fn nom(self) -> &'static str {
        match self {
            Fonction::Cot => "cot",
            Fonction::Sin => "sin",
            Fonction::Cos => "cos",
            Fonction::Tan => "tan",
        }
    }

    /// f(a) ; échoue sur un pôle de cot/tan.
    pub fn appliquer(self, a: f64) -> Result<f64, ErreurEval> {
        match self {
            Fonction::Sin => Ok(a.sin()),
            Fonction::Cos => Ok(a.cos()),
            Fonction::Cot => cot(a),
            Fonction::Tan => tan(a),
        }
    }
}

impl fmt::Display for Fonction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.nom())
    }
}

impl FromStr for Fonction {
    type Err = ErreurEval;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "cot" => Ok(Fonction::Cot),
            "sin" => Ok(Fonction::Sin),
            "cos" => Ok(Fonction::Cos),
            "tan" => Ok(Fonction::Tan),
            autre => Err(ErreurEval::EntreeInvalide(format!(
                "fonction inconnue {autre:?}"
            ))),
        }
    }
}

/// cot(a) ; pôle si a ≡ 0 (mod π).
pub fn cot(a: f64) -> Result<f64, ErreurEval> {
    let (s, c) = a.sin_cos();
    if s.abs() <= TOLERANCE_POLE {
        return Err(ErreurEval::DivisionParZero(format!("cot({a}) : pôle")));
    }
    div_sure(c, s, &format!("cot({a})"))
}

/// tan(a) ; pôle si a ≡ π/2 (mod π).
pub fn tan(a: f64) -> Result<f64, ErreurEval> {
    let (s, c) = a.sin_cos();
    if c.abs() <= TOLERANCE_POLE {
        return Err(ErreurEval::DivisionParZero(format!("tan({a}) : pôle")));
    }
    div_sure(s, c, &format!("tan({a})"))
}
