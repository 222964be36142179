// src/noyau/format.rs
//
// Affichage numérique "général" à 15 chiffres significatifs, sémantique
// %.15g du printf C : notation fixe quand l'exposant
// décimal tient dans [-4, 14], scientifique sinon, zéros de fin coupés,
// exposant signé sur deux chiffres minimum.

/// Précision d'affichage (chiffres significatifs).
pub const CHIFFRES_SIGNIFICATIFS: usize = 15;

pub fn format_nombre(valeur: f64) -> String {
    if valeur == 0.0 {
        return "0".to_string();
    }
    if valeur.is_nan() {
        return "nan".to_string();
    }
    if valeur.is_infinite() {
        return if valeur < 0.0 { "-inf" } else { "inf" }.to_string();
    }

    // L'exposant est lu sur la forme scientifique déjà arrondie, pour que
    // les retenues d'arrondi (9.99...e2 -> 1e3) choisissent la bonne branche.
    let scientifique = format!("{:.*e}", CHIFFRES_SIGNIFICATIFS - 1, valeur);
    let (mantisse, exposant) = match scientifique.split_once('e') {
        Some(parts) => parts,
        None => return scientifique,
    };
    let exposant: i32 = match exposant.parse() {
        Ok(e) => e,
        Err(_) => return scientifique,
    };

    if exposant < -4 || exposant >= CHIFFRES_SIGNIFICATIFS as i32 {
        let mantisse = couper_zeros(mantisse);
        let signe = if exposant < 0 { '-' } else { '+' };
        return format!("{mantisse}e{signe}{:02}", exposant.abs());
    }

    let decimales = (CHIFFRES_SIGNIFICATIFS as i32 - 1 - exposant).max(0) as usize;
    let fixe = format!("{valeur:.decimales$}");
    couper_zeros(&fixe).to_string()
}

/// Coupe les zéros de fin (et le point devenu pendu) d'une forme décimale.
fn couper_zeros(texte: &str) -> &str {
    if texte.contains('.') {
        texte.trim_end_matches('0').trim_end_matches('.')
    } else {
        texte
    }
}
