// src/noyau/fonctions.rs
//
// Dispatch des fonctions scientifiques : un emplacement + le drapeau INV
// + le mode d'angle donnent la transformation unaire concrète, avec
// validation de domaine avant calcul.

use super::erreur::ErreurCalc;
use super::touche::{FonctionSci, ModeAngle};

/// Borne factorielle : 170! est le dernier fini en double précision.
const FACTORIELLE_MAX: f64 = 170.0;

/// Applique la fonction `f` (sens direct, ou réciproque si `inverse`)
/// à `x`. Le mode d'angle ne touche que la trigonométrie : argument
/// converti vers les radians en sens direct, résultat converti depuis
/// les radians en sens réciproque.
pub fn appliquer_fonction(
    f: FonctionSci,
    inverse: bool,
    mode: ModeAngle,
    x: f64,
) -> Result<f64, ErreurCalc> {
    let resultat = match (f, inverse) {
        (FonctionSci::Sin, false) => mode.en_radians(x).sin(),
        (FonctionSci::Sin, true) => {
            verifier_arc(x)?;
            mode.depuis_radians(x.asin())
        }
        (FonctionSci::Cos, false) => mode.en_radians(x).cos(),
        (FonctionSci::Cos, true) => {
            verifier_arc(x)?;
            mode.depuis_radians(x.acos())
        }
        (FonctionSci::Tan, false) => mode.en_radians(x).tan(),
        (FonctionSci::Tan, true) => mode.depuis_radians(x.atan()),

        (FonctionSci::Ln, false) => {
            verifier_positif_strict(x)?;
            x.ln()
        }
        (FonctionSci::Ln, true) => x.exp(),

        (FonctionSci::Log10, false) => {
            verifier_positif_strict(x)?;
            x.log10()
        }
        (FonctionSci::Log10, true) => 10f64.powf(x),

        // même paire ln/exp que l'emplacement Ln, sens croisé
        (FonctionSci::Exp, false) => x.exp(),
        (FonctionSci::Exp, true) => {
            verifier_positif_strict(x)?;
            x.ln()
        }

        (FonctionSci::RacineCarree, false) => {
            if x < 0.0 {
                return Err(ErreurCalc::DomaineNumerique);
            }
            x.sqrt()
        }
        (FonctionSci::RacineCarree, true) => x * x,

        // pas de réciproque pour % et n!
        (FonctionSci::Pourcent, _) => x / 100.0,
        (FonctionSci::Factorielle, _) => factorielle(x)?,
    };

    if resultat.is_nan() {
        return Err(ErreurCalc::DomaineNumerique);
    }
    Ok(resultat)
}

fn verifier_arc(x: f64) -> Result<(), ErreurCalc> {
    if !(-1.0..=1.0).contains(&x) {
        return Err(ErreurCalc::DomaineNumerique);
    }
    Ok(())
}

fn verifier_positif_strict(x: f64) -> Result<(), ErreurCalc> {
    if x <= 0.0 {
        return Err(ErreurCalc::DomaineNumerique);
    }
    Ok(())
}

/// Factorielle entière 0..=170, par produit double.
fn factorielle(x: f64) -> Result<f64, ErreurCalc> {
    if x < 0.0 || x > FACTORIELLE_MAX || x != x.trunc() {
        return Err(ErreurCalc::DomaineFactorielle);
    }
    let n = x as u32;
    let mut produit = 1.0f64;
    for i in 2..=n {
        produit *= f64::from(i);
    }
    Ok(produit)
}
