//! Noyau de la calculatrice scientifique à exécution immédiate
//!
//! Organisation interne :
//! - touche.rs    : alphabet d'actions (chiffres, opérateurs, fonctions…)
//! - erreur.rs    : genres d'erreurs (verrou collant côté machine)
//! - saisie.rs    : éditeur du nombre en cours de frappe
//! - calcul.rs    : arithmétique binaire immédiate (sans priorité)
//! - fonctions.rs : dispatch scientifique (INV + mode d'angle)
//! - format.rs    : affichage à 15 chiffres significatifs
//! - trace.rs     : reconstruction du texte d'expression (borné à 256)
//! - machine.rs   : l'état complet + le point d'entrée `appuyer`

pub mod calcul;
pub mod erreur;
pub mod fonctions;
pub mod format;
pub mod machine;
pub mod saisie;
pub mod touche;
pub mod trace;

#[cfg(test)]
mod tests_machine;

// API publique minimale
pub use erreur::ErreurCalc;
pub use machine::MachineCalc;
pub use touche::{Constante, FonctionSci, ModeAngle, OpBinaire, Touche};
