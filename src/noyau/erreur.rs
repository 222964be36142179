// src/noyau/erreur.rs
//
// Genres d'erreurs du noyau. Toutes posent le verrou collant de la
// machine : l'affichage dégrade en "ERR" et seule la touche Effacer
// est acceptée ensuite.

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ErreurCalc {
    /// `/` ou racine y-ième avec diviseur nul.
    #[error("division par zéro")]
    DivisionParZero,

    /// Résultat hors domaine : `^`/racine produisant NaN, ln/log/√ hors
    /// domaine, asin/acos hors [-1, 1].
    #[error("hors du domaine de définition")]
    DomaineNumerique,

    /// Factorielle d'un négatif, d'un non-entier ou d'un entier > 170.
    #[error("factorielle : entier 0..=170 attendu")]
    DomaineFactorielle,

    /// Neuvième `(` imbriquée (pile de groupes pleine).
    #[error("parenthèses trop imbriquées (profondeur max 8)")]
    ProfondeurDepassee,

    /// `)` sans groupe ouvert.
    #[error("parenthèse fermante sans ouvrante")]
    ParentheseOrpheline,

    /// `)` sur un groupe sans aucune valeur à résoudre.
    #[error("groupe vide")]
    GroupeVide,

    /// `=` pressé alors qu'un groupe reste ouvert.
    #[error("parenthèse non refermée avant =")]
    GroupeOuvert,
}
