// src/noyau/numerique.rs
//
// Noyau numérique partagé
// -----------------------
// - division sûre (échoue au lieu de produire ∞)
// - puissance entière exacte (BigRational) et flottante, avec 0^0 = 1
// - arrondi décimal exact : demi-écart loin de zéro, sur la valeur binaire exacte du f64
// - ValeurArrondie : entier “scalé” (×10^digits) + affichage à digits décimales exactes

use std::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};

use super::erreur::ErreurEval;

/* ------------------------ Division sûre ------------------------ */

/// a / b en f64 ; échoue si b == 0 ou si le quotient n’est pas fini.
pub fn div_sure(a: f64, b: f64, contexte: &str) -> Result<f64, ErreurEval> {
    if b == 0.0 {
        return Err(ErreurEval::DivisionParZero(contexte.to_string()));
    }
    fini(a / b, contexte)
}

/// a / b exact ; échoue si b == 0.
pub fn div_sure_exacte(
    a: &BigRational,
    b: &BigRational,
    contexte: &str,
) -> Result<BigRational, ErreurEval> {
    if b.is_zero() {
        return Err(ErreurEval::DivisionParZero(contexte.to_string()));
    }
    Ok(a / b)
}

/// Rejette NaN / ∞ (résultat indéfini).
pub fn fini(v: f64, contexte: &str) -> Result<f64, ErreurEval> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(ErreurEval::Indefini(format!("{contexte} = {v}")))
    }
}

/* ------------------------ Puissances (0^0 = 1) ------------------------ */

/// base^exp exact (exposant naturel), exponentiation rapide.
/// Convention : 0^0 = 1.
pub fn puissance_entiere(base: &BigRational, exp: u64) -> BigRational {
    if exp == 0 {
        return BigRational::one();
    }
    if base.is_zero() {
        return BigRational::zero();
    }

    let mut e = exp;
    let mut acc = BigRational::one();
    let mut b = base.clone();

    while e > 0 {
        if (e & 1) == 1 {
            acc *= b.clone();
        }
        e >>= 1;
        if e > 0 {
            b *= b.clone();
        }
    }
    acc
}

/// base^exp en f64, même convention (0^0 = 1).
pub fn puissance_entiere_f64(base: f64, exp: u64) -> f64 {
    if exp == 0 {
        return 1.0;
    }
    match i32::try_from(exp) {
        Ok(n) => base.powi(n),
        Err(_) => base.powf(exp as f64),
    }
}

/* ------------------------ Décimal (scaled -> texte) ------------------------ */

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Convertit un entier “scalé” (×10^digits) en texte décimal à `digits` décimales.
fn scaled_to_decimal(scaled: &BigInt, digits: usize) -> String {
    let neg = scaled.is_negative();
    let abs = scaled.abs();

    let scale = pow10(digits);
    let int_part = &abs / &scale;
    let frac_part = &abs % &scale;

    let signe = if neg { "-" } else { "" };

    if digits == 0 {
        return format!("{signe}{int_part}");
    }

    let mut frac = frac_part.to_str_radix(10);
    while frac.len() < digits {
        frac.insert(0, '0');
    }

    format!("{signe}{int_part}.{frac}")
}

/* ------------------------ Arrondi ------------------------ */

/// Valeur arrondie à `digits` décimales : `scaled / 10^digits` exactement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValeurArrondie {
    scaled: BigInt,
    digits: usize,
}

impl ValeurArrondie {
    /// Nombre de décimales demandé (affiché par `Display`).
    pub fn digits(&self) -> usize {
        self.digits
    }

    /// Valeur exacte (rationnel décimal).
    pub fn exacte(&self) -> BigRational {
        BigRational::new(self.scaled.clone(), pow10(self.digits))
    }

    /// Valeur réelle la plus proche.
    pub fn to_f64(&self) -> f64 {
        self.exacte().to_f64().unwrap_or(f64::NAN)
    }
}

impl fmt::Display for ValeurArrondie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&scaled_to_decimal(&self.scaled, self.digits))
    }
}

/// Arrondit `v` à `digits` décimales, demi-écart loin de zéro.
///
/// L’arrondi porte sur la valeur binaire EXACTE du f64 : 0.125 -> 0.13,
/// mais 2.675 (stocké 2.67499999…) -> 2.67.
pub fn arrondir(v: f64, digits: usize) -> Result<ValeurArrondie, ErreurEval> {
    let r = BigRational::from_float(v)
        .ok_or_else(|| ErreurEval::Indefini(format!("arrondi de {v}")))?;

    let scaled = (r * BigRational::from_integer(pow10(digits))).round();

    Ok(ValeurArrondie {
        scaled: scaled.to_integer(),
        digits,
    })
}
