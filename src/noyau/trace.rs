// src/noyau/trace.rs
//
// Reconstruction du texte d'expression : un tampon secondaire, purement
// d'affichage, qui reflète la suite des jetons engagés plus la saisie en
// cours. Borné à 256 caractères avec éviction par l'avant en cas de
// débordement. Ne réinjecte jamais rien dans l'arithmétique.
//
// La zone `[depart_saisie, fin)` — quand elle n'est pas détachée —
// reproduit exactement la saisie courante. Détachée (`None`) : le dernier
// jeton engagé n'est pas la saisie vivante (après un opérateur, une
// parenthèse fermante, une éviction).
//
// Le repérage de la "dernière valeur" (balayage arrière, parenthèses
// appariées, signes d'exposant) est isolé en fonctions pures testables.

use super::format::format_nombre;

/// Capacité du tampon de trace (contractuelle).
pub const CAPACITE_TRACE: usize = 256;

#[derive(Clone, Debug, Default)]
pub struct TraceExpression {
    texte: String,
    depart_saisie: Option<usize>,
}

impl TraceExpression {
    pub fn texte(&self) -> &str {
        &self.texte
    }

    pub fn est_vide(&self) -> bool {
        self.texte.is_empty()
    }

    /// Vrai quand la trace peut refléter la saisie : zone vivante active,
    /// ou tampon encore vierge.
    pub fn suit_la_saisie(&self) -> bool {
        self.depart_saisie.is_some() || self.texte.is_empty()
    }

    pub fn remettre(&mut self) {
        self.texte.clear();
        self.depart_saisie = None;
    }

    pub fn detacher(&mut self) {
        self.depart_saisie = None;
    }

    /// Remplace tout le tampon (résultat d'un `=`), zone vivante en tête.
    pub fn remplacer(&mut self, texte: &str) {
        let garde = &texte[texte.len().saturating_sub(CAPACITE_TRACE)..];
        self.texte.clear();
        self.texte.push_str(garde);
        self.depart_saisie = if garde.is_empty() { None } else { Some(0) };
    }

    /// Reflète la saisie courante dans la zone vivante (ou l'y attache en
    /// fin de tampon si elle était détachée). Éviction par l'avant et
    /// recalage du départ si la borne serait dépassée.
    pub fn maj_saisie(&mut self, saisie: &str) {
        if saisie.is_empty() {
            return;
        }
        if let Some(depart) = self.depart_saisie {
            self.texte.truncate(depart.min(self.texte.len()));
        }
        self.ajouter_texte(saisie);
        self.depart_saisie = Some(self.texte.len().saturating_sub(saisie.len()));
    }

    /// Retombe sur le texte engagé avant la zone vivante (saisie effacée
    /// au complet par retours arrière), puis détache.
    pub fn tronquer_a_la_saisie(&mut self) {
        if let Some(depart) = self.depart_saisie.take() {
            self.texte.truncate(depart.min(self.texte.len()));
        }
    }

    /// Engage la saisie (ou un "0" si la chaîne vient d'ouvrir), ajoute le
    /// symbole d'opérateur, détache. Un opérateur qui en suit un autre le
    /// remplace ; après `(` on matérialise d'abord un "0".
    pub fn ajouter_operateur(&mut self, op: char, saisie: &str) {
        if !saisie.is_empty() {
            if self.suit_la_saisie() {
                self.maj_saisie(saisie);
            }
            self.depart_saisie = None;
            self.ajouter_caractere(op);
            return;
        }
        if self.texte.is_empty() {
            self.ajouter_texte("0");
            self.ajouter_caractere(op);
            return;
        }
        let dernier = self.texte.as_bytes()[self.texte.len() - 1];
        if est_operateur(dernier) {
            self.texte.pop();
            self.texte.push(op);
            return;
        }
        if dernier == b'(' {
            self.ajouter_texte("0");
        }
        self.ajouter_caractere(op);
    }

    /// `(` : engage la saisie si pertinent, insère le `*` implicite
    /// demandé, ajoute la parenthèse, détache.
    pub fn ouvrir_groupe(&mut self, multiplication_implicite: bool, saisie: &str) {
        if !saisie.is_empty() && self.suit_la_saisie() {
            self.maj_saisie(saisie);
        }
        if multiplication_implicite {
            self.ajouter_caractere('*');
        }
        self.ajouter_caractere('(');
        self.depart_saisie = None;
    }

    /// `)` : engage la saisie si pertinent, ferme, détache.
    pub fn fermer_groupe(&mut self, saisie: &str) {
        if !saisie.is_empty() && self.suit_la_saisie() {
            self.maj_saisie(saisie);
        }
        self.ajouter_caractere(')');
        self.depart_saisie = None;
    }

    /// Habille la dernière valeur de `prefixe`/`suffixe` (p.ex. `sin(`…`)`).
    /// Engage d'abord la saisie, ou matérialise l'accumulateur si le tampon
    /// est encore vierge.
    pub fn envelopper_fonction(
        &mut self,
        prefixe: &str,
        suffixe: &str,
        saisie: &str,
        accumulateur: Option<f64>,
    ) {
        if !saisie.is_empty() && self.suit_la_saisie() {
            self.maj_saisie(saisie);
        } else if self.texte.is_empty() {
            if let Some(valeur) = accumulateur {
                self.remplacer(&format_nombre(valeur));
            }
        }
        if let Some((debut, fin)) = derniere_plage_valeur(&self.texte) {
            self.envelopper_plage(debut, fin, prefixe, suffixe);
        }
    }

    fn envelopper_plage(&mut self, debut: usize, fin: usize, prefixe: &str, suffixe: &str) {
        let fin = fin.min(self.texte.len());
        let debut = debut.min(fin);

        let mut nouveau =
            String::with_capacity(self.texte.len() + prefixe.len() + suffixe.len());
        nouveau.push_str(&self.texte[..debut]);
        nouveau.push_str(prefixe);
        nouveau.push_str(&self.texte[debut..fin]);
        nouveau.push_str(suffixe);
        nouveau.push_str(&self.texte[fin..]);

        if nouveau.len() > CAPACITE_TRACE {
            nouveau.drain(..nouveau.len() - CAPACITE_TRACE);
        }
        self.texte = nouveau;
        self.depart_saisie = None;
    }

    fn ajouter_caractere(&mut self, c: char) {
        let mut tampon = [0u8; 4];
        let texte: &str = c.encode_utf8(&mut tampon);
        self.ajouter_texte(texte);
    }

    /// Ajout brut avec éviction par l'avant ; l'éviction détache la zone
    /// vivante (ses indices ne sont plus fiables).
    fn ajouter_texte(&mut self, texte: &str) {
        if texte.is_empty() {
            return;
        }
        let garde = &texte[texte.len().saturating_sub(CAPACITE_TRACE)..];
        if self.texte.len() + garde.len() > CAPACITE_TRACE {
            let surplus = self.texte.len() + garde.len() - CAPACITE_TRACE;
            if surplus >= self.texte.len() {
                self.texte.clear();
            } else {
                self.texte.drain(..surplus);
            }
            self.depart_saisie = None;
        }
        self.texte.push_str(garde);
    }
}

fn est_operateur(c: u8) -> bool {
    matches!(c, b'+' | b'-' | b'*' | b'/' | b'^' | b'r')
}

/// Repère la plage `[debut, fin)` de la dernière valeur du texte.
///
/// Si le texte finit par `)`, on apparie la parenthèse ouvrante par
/// comptage de profondeur puis on absorbe l'identifiant qui précède
/// (lettres, chiffres, `^`) pour envelopper un appel de fonction avec son
/// argument. Sinon, balayage arrière sur chiffres et point : un `-` qui
/// suit un marqueur `e`/`E` fait partie de l'exposant, un signe de tête
/// (début de texte ou précédé d'un opérateur/parenthèse) fait partie de
/// la valeur.
pub fn derniere_plage_valeur(texte: &str) -> Option<(usize, usize)> {
    let octets = texte.as_bytes();
    if octets.is_empty() {
        return None;
    }
    let fin = octets.len();

    if octets[fin - 1] == b')' {
        let mut profondeur = 1usize;
        let mut i = fin as i64 - 2;
        while i >= 0 {
            match octets[i as usize] {
                b')' => profondeur += 1,
                b'(' => {
                    profondeur -= 1;
                    if profondeur == 0 {
                        break;
                    }
                }
                _ => {}
            }
            i -= 1;
        }
        if i < 0 {
            // fermante sans ouvrante : rien d'enveloppable
            return None;
        }
        let mut j = i - 1;
        while j >= 0 {
            let c = octets[j as usize];
            if c.is_ascii_alphanumeric() || c == b'^' {
                j -= 1;
            } else {
                break;
            }
        }
        return Some(((j + 1) as usize, fin));
    }

    let mut i = fin as i64 - 1;
    while i >= 0 {
        let c = octets[i as usize];
        if matches!(c, b'+' | b'*' | b'/' | b'^' | b'r' | b'(' | b')') {
            break;
        }
        if c == b'-' {
            if i == 0 {
                i = -1;
                break;
            }
            let avant = octets[(i - 1) as usize];
            if avant == b'e' || avant == b'E' {
                i -= 1;
                continue;
            }
            if est_operateur(avant) || avant == b'(' {
                i -= 1;
            }
            break;
        }
        i -= 1;
    }
    let debut = (i + 1) as usize;
    if debut < fin {
        Some((debut, fin))
    } else {
        None
    }
}
