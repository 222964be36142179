// src/noyau/saisie.rs
//
// Éditeur de saisie numérique : le texte brut du nombre en cours de
// frappe, exactement tel que tapé.
//
// Invariant : le contenu, quand il est non vide, est toujours un préfixe
// d'un littéral réel analysable (au plus un '.', au plus un marqueur
// d'exposant, signe de mantisse en tête, signe d'exposant juste après
// le marqueur). `valeur()` résout ce préfixe comme `strtod` : le plus
// long préfixe valide, 0 pour un signe seul.

/// Capacité du tampon de saisie (contractuelle, pas extensible).
pub const CAPACITE_SAISIE: usize = 64;

#[derive(Clone, Debug, Default)]
pub struct SaisieNumerique {
    texte: String,
}

impl SaisieNumerique {
    pub fn est_vide(&self) -> bool {
        self.texte.is_empty()
    }

    pub fn texte(&self) -> &str {
        &self.texte
    }

    pub fn vider(&mut self) {
        self.texte.clear();
    }

    /// Remplace tout le contenu (résultat formaté, constante).
    /// Tronqué à la capacité par prudence — les résultats formatés
    /// tiennent toujours largement dedans.
    pub fn remplacer(&mut self, texte: &str) {
        self.texte.clear();
        let borne = texte.len().min(CAPACITE_SAISIE);
        self.texte.push_str(&texte[..borne]);
    }

    /// Ajoute un chiffre (0..=9). Silencieux à pleine capacité.
    pub fn ajouter_chiffre(&mut self, chiffre: u8) {
        debug_assert!(chiffre <= 9);
        if self.texte.len() >= CAPACITE_SAISIE {
            return;
        }
        self.texte.push(char::from(b'0' + chiffre));
    }

    /// Ajoute le point décimal. Sans effet si la saisie contient déjà
    /// un point ou un marqueur d'exposant. Amorce "0." sur saisie vide,
    /// "-0." après un signe seul.
    pub fn ajouter_point(&mut self) {
        if self.contient_exposant() || self.contient_point() {
            return;
        }
        if self.texte.is_empty() || self.texte == "-" {
            self.texte.push_str("0.");
            return;
        }
        if self.texte.len() >= CAPACITE_SAISIE {
            return;
        }
        self.texte.push('.');
    }

    /// Ajoute le marqueur d'exposant `e`. Sans effet s'il est déjà là.
    /// Amorce la mantisse ("0" ou "-0") si nécessaire.
    pub fn ajouter_exposant(&mut self) {
        if self.contient_exposant() {
            return;
        }
        if self.texte.is_empty() || self.texte == "-" {
            self.texte.push('0');
        }
        if self.texte.len() >= CAPACITE_SAISIE {
            return;
        }
        self.texte.push('e');
    }

    /// Bascule le signe : celui de l'exposant si un marqueur existe
    /// (jamais de '+' inséré), sinon celui de la mantisse.
    pub fn basculer_signe(&mut self) {
        if self.texte.is_empty() {
            self.texte.push('-');
            return;
        }

        if let Some(pos) = self.texte.find(['e', 'E']) {
            let idx = pos + 1;
            match self.texte.as_bytes().get(idx) {
                Some(b'-') => {
                    self.texte.remove(idx);
                }
                Some(b'+') => {
                    self.texte.replace_range(idx..idx + 1, "-");
                }
                _ => {
                    if self.texte.len() < CAPACITE_SAISIE {
                        self.texte.insert(idx, '-');
                    }
                }
            }
            return;
        }

        if self.texte.starts_with('-') {
            self.texte.remove(0);
        } else if self.texte.len() < CAPACITE_SAISIE {
            self.texte.insert(0, '-');
        }
    }

    /// Retire le dernier caractère.
    pub fn retirer_dernier(&mut self) {
        self.texte.pop();
    }

    /// Valeur numérique de la saisie, sémantique `strtod` : un préfixe
    /// incomplet ("5e", "5e-", "-") résout sur sa partie valide, 0 à défaut.
    pub fn valeur(&self) -> f64 {
        valeur_litterale(&self.texte)
    }

    fn contient_exposant(&self) -> bool {
        self.texte.contains(['e', 'E'])
    }

    fn contient_point(&self) -> bool {
        // le point de l'exposant n'existe pas : on ne regarde que la mantisse
        self.texte
            .chars()
            .take_while(|c| *c != 'e' && *c != 'E')
            .any(|c| c == '.')
    }
}

fn valeur_litterale(texte: &str) -> f64 {
    if let Ok(v) = texte.parse::<f64>() {
        return v;
    }
    // préfixe incomplet : on retire un signe d'exposant pendu, puis le
    // marqueur lui-même
    let tronque = texte
        .trim_end_matches(['+', '-'])
        .trim_end_matches(['e', 'E']);
    if tronque.is_empty() || tronque == "-" {
        return 0.0;
    }
    tronque.parse::<f64>().unwrap_or(0.0)
}
