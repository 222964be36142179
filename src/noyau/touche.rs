// src/noyau/touche.rs

use std::f64::consts;

/// Opérateur binaire de la chaîne immédiate.
///
/// `Racine` est la réciproque de `Puissance` : `a r b = a^(1/b)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpBinaire {
    Plus,
    Moins,
    Fois,
    Division,
    Puissance,
    Racine,
}

impl OpBinaire {
    /// Symbole à un caractère, tel qu'il apparaît dans la trace
    /// et dans l'indicateur d'opération en attente.
    pub fn symbole(self) -> char {
        match self {
            OpBinaire::Plus => '+',
            OpBinaire::Moins => '-',
            OpBinaire::Fois => '*',
            OpBinaire::Division => '/',
            OpBinaire::Puissance => '^',
            OpBinaire::Racine => 'r',
        }
    }
}

/// Emplacements de fonctions scientifiques.
///
/// Le sens concret (direct / réciproque) dépend du drapeau INV au moment
/// de l'appui — voir `fonctions::appliquer_fonction`.
///
/// NOTE: `Ln` et `Exp` donnent volontairement deux chemins redondants vers
/// la même paire ln/exp sous INV. On ne déduplique pas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FonctionSci {
    Sin,
    Cos,
    Tan,
    Ln,
    Log10,
    Exp,
    RacineCarree,
    Pourcent,
    Factorielle,
}

/// Unité d'angle pour la trigonométrie (et seulement pour elle).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeAngle {
    Radians,
    Degres,
}

impl ModeAngle {
    /// Convertit un argument trigonométrique vers les radians.
    pub fn en_radians(self, valeur: f64) -> f64 {
        match self {
            ModeAngle::Radians => valeur,
            ModeAngle::Degres => valeur * (consts::PI / 180.0),
        }
    }

    /// Convertit un résultat de trig réciproque depuis les radians.
    pub fn depuis_radians(self, valeur: f64) -> f64 {
        match self {
            ModeAngle::Radians => valeur,
            ModeAngle::Degres => valeur * (180.0 / consts::PI),
        }
    }
}

/// Constantes insérables dans la saisie.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Constante {
    Pi,
    E,
}

impl Constante {
    pub fn valeur(self) -> f64 {
        match self {
            Constante::Pi => consts::PI,
            Constante::E => consts::E,
        }
    }
}

/// Alphabet d'actions de la machine : une touche = une transition d'état.
///
/// La couche UI (exclue du noyau) se contente de fabriquer des `Touche`
/// et de relire l'affichage après chaque `appuyer`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    /// Chiffre 0..=9.
    Chiffre(u8),
    /// Point décimal.
    Point,
    /// Marqueur d'exposant (`e`).
    Exposant,
    /// Bascule de signe (+/-), mantisse ou exposant selon la saisie.
    Signe,
    /// Efface le dernier caractère de la saisie.
    Retour,
    Operation(OpBinaire),
    Egal,
    ParentheseOuvrante,
    ParentheseFermante,
    /// Bascule du drapeau INV (mode, pas un coup unique).
    Inverse,
    Fonction(FonctionSci),
    /// Remise à zéro (seule touche acceptée quand le verrou d'erreur est posé).
    Effacer,
}
