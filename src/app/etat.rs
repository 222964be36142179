//! src/app/etat.rs
//!
//! État UI.
//!
//! Rôle : porter la machine du noyau et la correspondance clavier → touche.
//! Aucune logique d'affichage ici ; la vue (vue.rs) fabrique des `Touche`
//! et relit `affichage()` / `trace()` après chaque appui.

use crate::noyau::{FonctionSci, MachineCalc, OpBinaire, Touche};

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    pub machine: MachineCalc,
}

impl AppCalc {
    /// Appui unique, avec journalisation de la pose du verrou d'erreur.
    pub fn appuyer(&mut self, touche: Touche) {
        log::debug!("touche : {touche:?}");
        let deja_en_erreur = self.machine.erreur().is_some();
        self.machine.appuyer(touche);
        if !deja_en_erreur {
            if let Some(e) = self.machine.erreur() {
                log::warn!("verrou d'erreur posé : {e}");
            }
        }
    }
}

/// Touche équivalente d'un caractère tapé au clavier physique.
/// `None` : caractère sans équivalent, ignoré.
pub fn touche_du_caractere(c: char) -> Option<Touche> {
    let touche = match c {
        '0'..='9' => Touche::Chiffre(c as u8 - b'0'),
        '.' | ',' => Touche::Point,
        '+' => Touche::Operation(OpBinaire::Plus),
        '-' => Touche::Operation(OpBinaire::Moins),
        '*' => Touche::Operation(OpBinaire::Fois),
        '/' => Touche::Operation(OpBinaire::Division),
        '^' => Touche::Operation(OpBinaire::Puissance),
        '(' => Touche::ParentheseOuvrante,
        ')' => Touche::ParentheseFermante,
        '=' => Touche::Egal,
        '%' => Touche::Fonction(FonctionSci::Pourcent),
        '!' => Touche::Fonction(FonctionSci::Factorielle),
        // marqueur d'exposant, comme la touche EE
        'e' | 'E' => Touche::Exposant,
        _ => return None,
    };
    Some(touche)
}
