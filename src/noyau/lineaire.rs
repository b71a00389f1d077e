// src/noyau/lineaire.rs
//
// Algorithme linéaire
// -------------------
//   ((1 + sin²(x + y)) / |x - 2y/(1 + x²y²)|) · x^|y| + cos²(atan(1/z))
//
// Partie exacte (BigRational) : tout ce qui est rationnel en x, y, z
//   - 2y/(1 + x²y²), |x - …| (test de nullité EXACT, ex. x = y = 1)
//   - x^|y| (0^0 = 1)
//   - cos²(atan(t)) = 1/(1 + t²), t = 1/z
// Partie flottante : sin²(x + y), puis assemblage et arrondi.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive};

use super::erreur::ErreurEval;
use super::numerique::{arrondir, div_sure_exacte, fini, puissance_entiere, ValeurArrondie};

/// Précision par défaut (décimales) de l’arrondi interne.
pub const PRECISION_DEFAUT: i64 = 5;

/// Garde-fou : au-delà, l’arrondi n’a plus de sens en f64 (et coûte cher).
pub const PRECISION_MAX: i64 = 200;

/// Au-delà (avec |x| ≥ 2), |x|^|y| sort du domaine f64 : on ne construit pas le BigInt.
pub const EXPOSANT_MAX: u64 = 2048;

fn rat(n: i64) -> BigRational {
    BigRational::from_integer(BigInt::from(n))
}

fn vers_f64(r: &BigRational, contexte: &str) -> Result<f64, ErreurEval> {
    let v = r
        .to_f64()
        .ok_or_else(|| ErreurEval::Indefini(format!("{contexte} hors domaine f64")))?;
    fini(v, contexte)
}

/// Valide la précision demandée (0..=PRECISION_MAX).
pub fn valider_precision(accuracy: i64) -> Result<usize, ErreurEval> {
    if !(0..=PRECISION_MAX).contains(&accuracy) {
        return Err(ErreurEval::EntreeInvalide(format!(
            "précision {accuracy} hors de 0..={PRECISION_MAX}"
        )));
    }
    usize::try_from(accuracy)
        .map_err(|_| ErreurEval::EntreeInvalide(format!("précision {accuracy}")))
}

/// x^|y| exact, borné par EXPOSANT_MAX quand |x| ≥ 2.
fn puissance_abs(x: i64, y: i64) -> Result<BigRational, ErreurEval> {
    let exposant = y.unsigned_abs();
    if x.unsigned_abs() >= 2 && exposant > EXPOSANT_MAX {
        return Err(ErreurEval::Indefini(format!(
            "{x}^{exposant} dépasse le domaine f64"
        )));
    }
    Ok(puissance_entiere(&rat(x), exposant))
}

/// Évalue l’algorithme linéaire et arrondit à `accuracy` décimales
/// (demi-écart loin de zéro).
///
/// Ordre des contrôles : précision, 1/z, x^|y|, dénominateur.
/// Ainsi (0, 0, 1) passe 0^0 = 1 puis échoue sur |0 - 0| = 0.
pub fn linear_algorithm(
    x: i64,
    y: i64,
    z: i64,
    accuracy: i64,
) -> Result<ValeurArrondie, ErreurEval> {
    let resultat = evaluer(x, y, z, accuracy);
    match &resultat {
        Ok(v) => log::debug!("linéaire x={x} y={y} z={z} accuracy={accuracy} -> {v}"),
        Err(e) => log::debug!(
            "linéaire x={x} y={y} z={z} accuracy={accuracy} -> échec {} ({e})",
            e.genre()
        ),
    }
    resultat
}

fn evaluer(x: i64, y: i64, z: i64, accuracy: i64) -> Result<ValeurArrondie, ErreurEval> {
    let digits = valider_precision(accuracy)?;

    // cos²(atan(1/z)) = 1/(1 + (1/z)²)
    let t = div_sure_exacte(&BigRational::one(), &rat(z), "1/z avec z = 0")?;
    let cos_term = BigRational::one() / (BigRational::one() + &t * &t);

    let puissance = puissance_abs(x, y)?;

    // |x - 2y/(1 + x²y²)| ; 1 + x²y² ≥ 1
    let (xr, yr) = (rat(x), rat(y));
    let denom_expr = (rat(2) * &yr) / (BigRational::one() + &xr * &xr * &yr * &yr);
    let denominateur = (xr - denom_expr).abs();

    let rapport = div_sure_exacte(&puissance, &denominateur, "|x - 2y/(1 + x²y²)| = 0")?;

    // i128 : x + y ne déborde pas
    let somme = (i128::from(x) + i128::from(y)) as f64;
    let numerateur = 1.0 + somme.sin().powi(2);

    let v = numerateur * vers_f64(&rapport, "x^|y| / dénominateur")?
        + vers_f64(&cos_term, "cos²(atan(1/z))")?;

    arrondir(fini(v, "résultat linéaire")?, digits)
}
