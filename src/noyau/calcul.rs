// src/noyau/calcul.rs
//
// Cœur arithmétique à exécution immédiate : un seul opérateur en
// attente, évalué dès que l'opérande droit est connu. Aucune priorité
// d'opérateurs — `2 + 3 * 4` vaut `(2+3)*4`.

use super::erreur::ErreurCalc;
use super::touche::OpBinaire;

/// Applique `gauche op droite`. Les échecs posent le verrou côté machine.
pub fn calcul_binaire(gauche: f64, op: OpBinaire, droite: f64) -> Result<f64, ErreurCalc> {
    let resultat = match op {
        OpBinaire::Plus => gauche + droite,
        OpBinaire::Moins => gauche - droite,
        OpBinaire::Fois => gauche * droite,
        OpBinaire::Division => {
            if droite == 0.0 {
                return Err(ErreurCalc::DivisionParZero);
            }
            gauche / droite
        }
        OpBinaire::Puissance => gauche.powf(droite),
        OpBinaire::Racine => {
            if droite == 0.0 {
                return Err(ErreurCalc::DivisionParZero);
            }
            gauche.powf(1.0 / droite)
        }
    };
    // pow hors domaine (p.ex. (-8)^0.5) sort en NaN
    if resultat.is_nan() {
        return Err(ErreurCalc::DomaineNumerique);
    }
    Ok(resultat)
}
