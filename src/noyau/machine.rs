// src/noyau/machine.rs
//
// La machine : tout l'état de la calculatrice et le point d'entrée
// unique `appuyer`. Une touche = une transition atomique ; la couche UI
// relit ensuite `affichage()` / `trace()`.
//
// Contrats :
// - Verrou d'erreur collant : une fois posé, tout est sans effet sauf
//   Effacer. L'affichage dégrade en "ERR".
// - Exécution immédiate, gauche à droite, sans priorité d'opérateurs.
// - La trace d'expression est mise à jour en parallèle du calcul,
//   toujours avant l'opération noyau (elle doit voir la saisie telle
//   qu'elle était à l'appui).

use super::calcul::calcul_binaire;
use super::erreur::ErreurCalc;
use super::fonctions::appliquer_fonction;
use super::format::format_nombre;
use super::saisie::SaisieNumerique;
use super::touche::{Constante, FonctionSci, ModeAngle, OpBinaire, Touche};
use super::trace::TraceExpression;

/// Profondeur maximale d'imbrication de groupes (contractuelle).
pub const PROFONDEUR_MAX: usize = 8;

/// Cadre sauvegardé à l'ouverture d'un groupe : l'état de la chaîne
/// externe, restauré à la fermeture.
#[derive(Clone, Copy, Debug, Default)]
struct CadreGroupe {
    accumulateur: Option<f64>,
    operation: Option<OpBinaire>,
}

/// Pile bornée de cadres de groupe. Capacité fixe : le débordement est
/// une erreur d'entrée, pas une occasion de croître.
#[derive(Clone, Debug, Default)]
struct PileGroupes {
    cadres: [CadreGroupe; PROFONDEUR_MAX],
    profondeur: usize,
}

impl PileGroupes {
    fn est_vide(&self) -> bool {
        self.profondeur == 0
    }

    fn est_pleine(&self) -> bool {
        self.profondeur >= PROFONDEUR_MAX
    }

    fn empiler(&mut self, cadre: CadreGroupe) -> Result<(), ErreurCalc> {
        if self.est_pleine() {
            return Err(ErreurCalc::ProfondeurDepassee);
        }
        self.cadres[self.profondeur] = cadre;
        self.profondeur += 1;
        Ok(())
    }

    fn depiler(&mut self) -> Option<CadreGroupe> {
        if self.profondeur == 0 {
            return None;
        }
        self.profondeur -= 1;
        Some(self.cadres[self.profondeur])
    }

    fn vider(&mut self) {
        self.profondeur = 0;
    }
}

#[derive(Clone, Debug)]
pub struct MachineCalc {
    saisie: SaisieNumerique,
    accumulateur: Option<f64>,
    operation: Option<OpBinaire>,
    pile: PileGroupes,
    erreur: Option<ErreurCalc>,
    /// Vrai juste après `=`, une fonction scientifique aboutie ou une
    /// constante : le prochain chiffre repart sur une saisie neuve.
    juste_calcule: bool,
    inverse: bool,
    mode_angle: ModeAngle,
    trace: TraceExpression,
    trace_visible: bool,
}

impl Default for MachineCalc {
    fn default() -> Self {
        Self {
            saisie: SaisieNumerique::default(),
            accumulateur: None,
            operation: None,
            pile: PileGroupes::default(),
            erreur: None,
            juste_calcule: false,
            inverse: false,
            mode_angle: ModeAngle::Radians,
            trace: TraceExpression::default(),
            trace_visible: false,
        }
    }
}

impl MachineCalc {
    /* ------------------------ point d'entrée ------------------------ */

    /// Route une touche. Sans effet si le verrou d'erreur est posé,
    /// Effacer excepté.
    pub fn appuyer(&mut self, touche: Touche) {
        if let Touche::Effacer = touche {
            self.effacer();
            return;
        }
        if self.erreur.is_some() {
            return;
        }

        match touche {
            Touche::Chiffre(c) => self.sur_chiffre(c.min(9)),
            Touche::Point => self.sur_point(),
            Touche::Exposant => self.sur_exposant(),
            Touche::Signe => self.sur_signe(),
            Touche::Retour => self.sur_retour(),
            Touche::Operation(op) => self.sur_operation(op),
            Touche::Egal => self.sur_egal(),
            Touche::ParentheseOuvrante => self.sur_ouvrante(),
            Touche::ParentheseFermante => self.sur_fermante(),
            Touche::Inverse => self.inverse = !self.inverse,
            Touche::Fonction(f) => self.sur_fonction(f),
            Touche::Effacer => unreachable!("traitée plus haut"),
        }
    }

    /// Insère une constante formatée comme saisie complète (commande de
    /// configuration, hors alphabet des touches).
    pub fn inserer_constante(&mut self, constante: Constante) {
        if self.erreur.is_some() {
            return;
        }
        if self.juste_calcule {
            self.trace.remettre();
        }
        self.saisie.remplacer(&format_nombre(constante.valeur()));
        // la constante se comporte comme un résultat : un chiffre repart à neuf
        self.juste_calcule = true;
        self.trace.maj_saisie(self.saisie.texte());
    }

    pub fn regler_mode_angle(&mut self, mode: ModeAngle) {
        self.mode_angle = mode;
    }

    pub fn regler_affichage_trace(&mut self, visible: bool) {
        self.trace_visible = visible;
    }

    /* ------------------------ sorties (interrogées par l'UI) ------------------------ */

    /// Valeur d'écran : "ERR" sous verrou, sinon la saisie, sinon
    /// l'accumulateur formaté, sinon "0".
    pub fn affichage(&self) -> String {
        if self.erreur.is_some() {
            return "ERR".to_string();
        }
        if !self.saisie.est_vide() {
            return self.saisie.texte().to_string();
        }
        if let Some(valeur) = self.accumulateur {
            return format_nombre(valeur);
        }
        "0".to_string()
    }

    pub fn trace(&self) -> &str {
        self.trace.texte()
    }

    pub fn trace_visible(&self) -> bool {
        self.trace_visible
    }

    pub fn erreur(&self) -> Option<ErreurCalc> {
        self.erreur
    }

    pub fn inverse(&self) -> bool {
        self.inverse
    }

    pub fn mode_angle(&self) -> ModeAngle {
        self.mode_angle
    }

    pub fn operation_en_attente(&self) -> Option<OpBinaire> {
        self.operation
    }

    /* ------------------------ touches ------------------------ */

    fn sur_chiffre(&mut self, chiffre: u8) {
        if self.juste_calcule {
            self.trace.remettre();
            self.saisie.vider();
            self.juste_calcule = false;
        }
        self.saisie.ajouter_chiffre(chiffre);
        self.trace.maj_saisie(self.saisie.texte());
    }

    fn sur_point(&mut self) {
        if self.juste_calcule {
            self.trace.remettre();
            self.saisie.vider();
            self.juste_calcule = false;
        }
        self.saisie.ajouter_point();
        self.trace.maj_saisie(self.saisie.texte());
    }

    fn sur_exposant(&mut self) {
        // sur un résultat : l'exposant prolonge la saisie au lieu de repartir
        if self.juste_calcule {
            self.trace.remplacer(self.saisie.texte());
            self.juste_calcule = false;
        }
        self.saisie.ajouter_exposant();
        if self.trace.suit_la_saisie() {
            self.trace.maj_saisie(self.saisie.texte());
        }
    }

    fn sur_signe(&mut self) {
        if self.juste_calcule {
            self.trace.remplacer(self.saisie.texte());
            self.juste_calcule = false;
        }
        self.saisie.basculer_signe();
        if self.trace.suit_la_saisie() {
            self.trace.maj_saisie(self.saisie.texte());
        }
    }

    fn sur_retour(&mut self) {
        if self.saisie.est_vide() {
            return;
        }
        self.saisie.retirer_dernier();
        self.juste_calcule = false;
        if self.trace.suit_la_saisie() {
            if !self.saisie.est_vide() {
                self.trace.maj_saisie(self.saisie.texte());
            } else {
                self.trace.tronquer_a_la_saisie();
            }
        }
    }

    fn sur_operation(&mut self, op: OpBinaire) {
        self.trace.ajouter_operateur(op.symbole(), self.saisie.texte());

        if self.accumulateur.is_none() && self.saisie.est_vide() {
            self.accumulateur = Some(0.0);
        }
        if !self.saisie.est_vide() {
            let valeur = self.saisie.valeur();
            match (self.accumulateur, self.operation) {
                (Some(gauche), Some(en_attente)) => {
                    match calcul_binaire(gauche, en_attente, valeur) {
                        Ok(resultat) => self.accumulateur = Some(resultat),
                        Err(e) => {
                            self.erreur = Some(e);
                            return;
                        }
                    }
                }
                // pas d'opération en attente : l'opérande remplace l'accumulateur
                _ => self.accumulateur = Some(valeur),
            }
            self.saisie.vider();
        }
        self.operation = Some(op);
        self.juste_calcule = false;
    }

    fn sur_egal(&mut self) {
        if !self.saisie.est_vide() && self.trace.suit_la_saisie() {
            self.trace.maj_saisie(self.saisie.texte());
            self.trace.detacher();
        }

        // `=` n'est valable qu'au niveau le plus externe : pas d'auto-fermeture
        if !self.pile.est_vide() {
            self.erreur = Some(ErreurCalc::GroupeOuvert);
            return;
        }

        if self.accumulateur.is_none() && self.saisie.est_vide() {
            self.saisie.remplacer("0");
            self.juste_calcule = true;
            self.trace.remplacer(self.saisie.texte());
            return;
        }

        let valeur = if !self.saisie.est_vide() {
            self.saisie.valeur()
        } else {
            self.accumulateur.unwrap_or(0.0)
        };

        let resultat = match self.operation {
            Some(op) => {
                let gauche = self.accumulateur.unwrap_or(0.0);
                match calcul_binaire(gauche, op, valeur) {
                    Ok(r) => r,
                    Err(e) => {
                        self.erreur = Some(e);
                        return;
                    }
                }
            }
            None => valeur,
        };

        self.accumulateur = Some(resultat);
        self.operation = None;
        self.saisie.remplacer(&format_nombre(resultat));
        self.juste_calcule = true;
        // trace repartie à neuf sur le résultat
        self.trace.remplacer(self.saisie.texte());
    }

    fn sur_ouvrante(&mut self) {
        let implicite =
            !self.saisie.est_vide() && self.operation.is_none() && self.accumulateur.is_none();
        self.trace.ouvrir_groupe(implicite, self.saisie.texte());

        if self.pile.est_pleine() {
            self.erreur = Some(ErreurCalc::ProfondeurDepassee);
            return;
        }

        // `5(` vaut `5*(` : la saisie devient l'accumulateur externe
        if implicite {
            self.accumulateur = Some(self.saisie.valeur());
            self.operation = Some(OpBinaire::Fois);
            self.saisie.vider();
        }

        let cadre = CadreGroupe {
            accumulateur: self.accumulateur,
            operation: self.operation,
        };
        if let Err(e) = self.pile.empiler(cadre) {
            self.erreur = Some(e);
            return;
        }

        // chaîne interne indépendante
        self.accumulateur = None;
        self.operation = None;
        self.saisie.vider();
        self.juste_calcule = false;
    }

    fn sur_fermante(&mut self) {
        self.trace.fermer_groupe(self.saisie.texte());

        if self.pile.est_vide() {
            self.erreur = Some(ErreurCalc::ParentheseOrpheline);
            return;
        }

        // résolution de la chaîne interne, comme `=` le ferait
        let valeur = if !self.saisie.est_vide() {
            self.saisie.valeur()
        } else if let Some(a) = self.accumulateur {
            a
        } else {
            self.erreur = Some(ErreurCalc::GroupeVide);
            return;
        };

        let resultat = match (self.accumulateur, self.operation) {
            (Some(gauche), Some(op)) => match calcul_binaire(gauche, op, valeur) {
                Ok(r) => r,
                Err(e) => {
                    self.erreur = Some(e);
                    return;
                }
            },
            _ => valeur,
        };

        let cadre = match self.pile.depiler() {
            Some(c) => c,
            None => {
                self.erreur = Some(ErreurCalc::ParentheseOrpheline);
                return;
            }
        };
        self.accumulateur = cadre.accumulateur;
        self.operation = cadre.operation;

        // la valeur résolue redevient un jeton de saisie, prêt à se
        // combiner avec la chaîne externe — sans drapeau juste_calcule
        self.saisie.remplacer(&format_nombre(resultat));
    }

    fn sur_fonction(&mut self, f: FonctionSci) {
        let (prefixe, suffixe) = habillage_fonction(f, self.inverse);
        self.trace
            .envelopper_fonction(prefixe, suffixe, self.saisie.texte(), self.accumulateur);

        // opérande : la saisie, sinon l'accumulateur sans opération en attente
        let (valeur, depuis_accumulateur) = if !self.saisie.est_vide() {
            (self.saisie.valeur(), false)
        } else if let (Some(a), None) = (self.accumulateur, self.operation) {
            (a, true)
        } else {
            return;
        };

        match appliquer_fonction(f, self.inverse, self.mode_angle, valeur) {
            Ok(resultat) => {
                self.saisie.remplacer(&format_nombre(resultat));
                self.juste_calcule = true;
                // l'opérande venait de l'accumulateur : on l'y répercute
                // pour garder la chaîne externe cohérente
                if depuis_accumulateur {
                    self.accumulateur = Some(resultat);
                }
            }
            Err(e) => self.erreur = Some(e),
        }
    }

    /// Remise à zéro : chaîne, saisie, pile, trace, verrou et INV.
    /// La configuration hors alphabet (mode d'angle, affichage de la
    /// trace) survit, comme des coches de menu.
    fn effacer(&mut self) {
        self.saisie.vider();
        self.accumulateur = None;
        self.operation = None;
        self.pile.vider();
        self.erreur = None;
        self.juste_calcule = false;
        self.inverse = false;
        self.trace.remettre();
    }
}

/// Préfixe/suffixe de l'habillage de trace d'un emplacement de fonction,
/// selon le drapeau INV au moment de l'appui.
fn habillage_fonction(f: FonctionSci, inverse: bool) -> (&'static str, &'static str) {
    match (f, inverse) {
        (FonctionSci::Sin, false) => ("sin(", ")"),
        (FonctionSci::Sin, true) => ("asin(", ")"),
        (FonctionSci::Cos, false) => ("cos(", ")"),
        (FonctionSci::Cos, true) => ("acos(", ")"),
        (FonctionSci::Tan, false) => ("tan(", ")"),
        (FonctionSci::Tan, true) => ("atan(", ")"),
        (FonctionSci::Ln, false) => ("ln(", ")"),
        (FonctionSci::Ln, true) => ("exp(", ")"),
        (FonctionSci::Log10, false) => ("log(", ")"),
        (FonctionSci::Log10, true) => ("10^(", ")"),
        (FonctionSci::Exp, false) => ("e^(", ")"),
        (FonctionSci::Exp, true) => ("ln(", ")"),
        (FonctionSci::RacineCarree, false) => ("sqrt(", ")"),
        (FonctionSci::RacineCarree, true) => ("(", ")^2"),
        (FonctionSci::Pourcent, _) => ("", "%"),
        (FonctionSci::Factorielle, _) => ("", "!"),
    }
}
