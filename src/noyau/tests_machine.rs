// src/noyau/tests_machine.rs
//
// Scénarios bout-en-bout sur la machine : séquences de touches réalistes,
// vérifiées sur l'affichage, la trace et le verrou d'erreur.

use super::erreur::ErreurCalc;
use super::machine::{MachineCalc, PROFONDEUR_MAX};
use super::touche::{Constante, FonctionSci, ModeAngle, OpBinaire, Touche};

fn chiffres(machine: &mut MachineCalc, texte: &str) {
    for c in texte.chars() {
        match c {
            '0'..='9' => machine.appuyer(Touche::Chiffre(c as u8 - b'0')),
            '.' => machine.appuyer(Touche::Point),
            autre => panic!("caractère de saisie inattendu : {autre}"),
        }
    }
}

fn op(machine: &mut MachineCalc, operation: OpBinaire) {
    machine.appuyer(Touche::Operation(operation));
}

/* ------------------------ saisie et affichage ------------------------ */

#[test]
fn saisie_simple() {
    let mut m = MachineCalc::default();
    chiffres(&mut m, "123");
    assert_eq!(m.affichage(), "123");
    assert_eq!(m.trace(), "123");
}

#[test]
fn affichage_initial_et_egal_a_vide() {
    let mut m = MachineCalc::default();
    assert_eq!(m.affichage(), "0");
    m.appuyer(Touche::Egal);
    assert_eq!(m.affichage(), "0");
    assert_eq!(m.trace(), "0");
    assert!(m.erreur().is_none());
}

#[test]
fn retour_arriere() {
    let mut m = MachineCalc::default();
    chiffres(&mut m, "123");
    m.appuyer(Touche::Retour);
    assert_eq!(m.affichage(), "12");
    assert_eq!(m.trace(), "12");
    m.appuyer(Touche::Retour);
    m.appuyer(Touche::Retour);
    assert_eq!(m.affichage(), "0");
    assert_eq!(m.trace(), "");
    // saisie déjà vide : sans effet
    m.appuyer(Touche::Retour);
    assert_eq!(m.affichage(), "0");
}

#[test]
fn exposant_et_signe_d_exposant() {
    let mut m = MachineCalc::default();
    chiffres(&mut m, "2");
    m.appuyer(Touche::Exposant);
    m.appuyer(Touche::Signe);
    chiffres(&mut m, "3");
    assert_eq!(m.affichage(), "2e-3");
    assert_eq!(m.trace(), "2e-3");
    m.appuyer(Touche::Egal);
    assert_eq!(m.affichage(), "0.002");
}

#[test]
fn un_resultat_puis_un_chiffre_repart_a_neuf() {
    let mut m = MachineCalc::default();
    chiffres(&mut m, "2");
    op(&mut m, OpBinaire::Plus);
    chiffres(&mut m, "3");
    m.appuyer(Touche::Egal);
    assert_eq!(m.affichage(), "5");
    assert_eq!(m.trace(), "5");
    chiffres(&mut m, "7");
    assert_eq!(m.affichage(), "7");
    assert_eq!(m.trace(), "7");
}

#[test]
fn un_resultat_puis_un_operateur_enchaine() {
    let mut m = MachineCalc::default();
    chiffres(&mut m, "2");
    op(&mut m, OpBinaire::Plus);
    chiffres(&mut m, "3");
    m.appuyer(Touche::Egal);
    op(&mut m, OpBinaire::Plus);
    chiffres(&mut m, "1");
    m.appuyer(Touche::Egal);
    assert_eq!(m.affichage(), "6");
}

/* ------------------------ chaîne immédiate ------------------------ */

#[test]
fn execution_immediate_sans_priorite() {
    let mut m = MachineCalc::default();
    chiffres(&mut m, "2");
    op(&mut m, OpBinaire::Plus);
    chiffres(&mut m, "3");
    op(&mut m, OpBinaire::Fois);
    // l'addition est déjà résolue à l'appui du deuxième opérateur
    assert_eq!(m.affichage(), "5");
    chiffres(&mut m, "4");
    m.appuyer(Touche::Egal);
    assert_eq!(m.affichage(), "20");
}

#[test]
fn operateur_remplace_operateur() {
    let mut m = MachineCalc::default();
    chiffres(&mut m, "5");
    op(&mut m, OpBinaire::Plus);
    op(&mut m, OpBinaire::Fois);
    assert_eq!(m.trace(), "5*");
    assert_eq!(m.operation_en_attente(), Some(OpBinaire::Fois));
    chiffres(&mut m, "3");
    m.appuyer(Touche::Egal);
    assert_eq!(m.affichage(), "15");
}

#[test]
fn operateur_d_entree_part_de_zero() {
    let mut m = MachineCalc::default();
    op(&mut m, OpBinaire::Moins);
    chiffres(&mut m, "4");
    m.appuyer(Touche::Egal);
    assert_eq!(m.affichage(), "-4");
    assert_eq!(m.trace(), "-4");
}

#[test]
fn egal_sans_operande_replie_l_accumulateur() {
    // opération en attente, saisie vide : l'accumulateur sert des deux côtés
    let mut m = MachineCalc::default();
    chiffres(&mut m, "2");
    op(&mut m, OpBinaire::Plus);
    m.appuyer(Touche::Egal);
    assert_eq!(m.affichage(), "4");
    assert!(m.erreur().is_none());
}

#[test]
fn egal_repete_sans_operation() {
    let mut m = MachineCalc::default();
    chiffres(&mut m, "8");
    m.appuyer(Touche::Egal);
    m.appuyer(Touche::Egal);
    assert_eq!(m.affichage(), "8");
}

#[test]
fn puissance_et_racine() {
    let mut m = MachineCalc::default();
    chiffres(&mut m, "2");
    op(&mut m, OpBinaire::Puissance);
    chiffres(&mut m, "10");
    m.appuyer(Touche::Egal);
    assert_eq!(m.affichage(), "1024");

    let mut m = MachineCalc::default();
    chiffres(&mut m, "27");
    op(&mut m, OpBinaire::Racine);
    chiffres(&mut m, "3");
    m.appuyer(Touche::Egal);
    assert_eq!(m.affichage(), "3");
}

/* ------------------------ verrou d'erreur ------------------------ */

#[test]
fn division_par_zero_pose_le_verrou() {
    let mut m = MachineCalc::default();
    chiffres(&mut m, "5");
    op(&mut m, OpBinaire::Division);
    chiffres(&mut m, "0");
    m.appuyer(Touche::Egal);
    assert_eq!(m.erreur(), Some(ErreurCalc::DivisionParZero));
    assert_eq!(m.affichage(), "ERR");

    // tout est ignoré sous verrou, Effacer excepté
    chiffres(&mut m, "9");
    m.appuyer(Touche::Egal);
    m.appuyer(Touche::Inverse);
    assert_eq!(m.affichage(), "ERR");
    assert!(!m.inverse());

    m.appuyer(Touche::Effacer);
    assert!(m.erreur().is_none());
    assert_eq!(m.affichage(), "0");
    assert_eq!(m.trace(), "");
}

#[test]
fn effacer_garde_la_configuration() {
    let mut m = MachineCalc::default();
    m.regler_mode_angle(ModeAngle::Degres);
    m.regler_affichage_trace(true);
    m.appuyer(Touche::Inverse);
    assert!(m.inverse());
    m.appuyer(Touche::Effacer);
    // INV retombe, le mode d'angle et l'affichage de trace survivent
    assert!(!m.inverse());
    assert_eq!(m.mode_angle(), ModeAngle::Degres);
    assert!(m.trace_visible());
}

/* ------------------------ groupes ------------------------ */

#[test]
fn groupe_change_l_ordre() {
    let mut m = MachineCalc::default();
    chiffres(&mut m, "2");
    op(&mut m, OpBinaire::Fois);
    m.appuyer(Touche::ParentheseOuvrante);
    chiffres(&mut m, "3");
    op(&mut m, OpBinaire::Plus);
    chiffres(&mut m, "4");
    m.appuyer(Touche::ParentheseFermante);
    assert_eq!(m.trace(), "2*(3+4)");
    assert_eq!(m.affichage(), "7");
    m.appuyer(Touche::Egal);
    assert_eq!(m.affichage(), "14");
}

#[test]
fn multiplication_implicite_avant_groupe() {
    let mut m = MachineCalc::default();
    chiffres(&mut m, "5");
    m.appuyer(Touche::ParentheseOuvrante);
    chiffres(&mut m, "3");
    m.appuyer(Touche::ParentheseFermante);
    assert_eq!(m.trace(), "5*(3)");
    m.appuyer(Touche::Egal);
    assert_eq!(m.affichage(), "15");
}

#[test]
fn fermante_ne_fige_pas_la_saisie() {
    let mut m = MachineCalc::default();
    chiffres(&mut m, "2");
    op(&mut m, OpBinaire::Fois);
    m.appuyer(Touche::ParentheseOuvrante);
    chiffres(&mut m, "3");
    m.appuyer(Touche::ParentheseFermante);
    // la valeur du groupe se comporte comme une saisie ordinaire
    chiffres(&mut m, "5");
    assert_eq!(m.affichage(), "35");
}

#[test]
fn profondeur_bornee() {
    let mut m = MachineCalc::default();
    for _ in 0..PROFONDEUR_MAX {
        m.appuyer(Touche::ParentheseOuvrante);
    }
    assert!(m.erreur().is_none());
    m.appuyer(Touche::ParentheseOuvrante);
    assert_eq!(m.erreur(), Some(ErreurCalc::ProfondeurDepassee));
}

#[test]
fn fermante_orpheline() {
    let mut m = MachineCalc::default();
    m.appuyer(Touche::ParentheseFermante);
    assert_eq!(m.erreur(), Some(ErreurCalc::ParentheseOrpheline));
}

#[test]
fn groupe_vide() {
    let mut m = MachineCalc::default();
    m.appuyer(Touche::ParentheseOuvrante);
    m.appuyer(Touche::ParentheseFermante);
    assert_eq!(m.erreur(), Some(ErreurCalc::GroupeVide));
}

#[test]
fn egal_sur_groupe_ouvert() {
    let mut m = MachineCalc::default();
    m.appuyer(Touche::ParentheseOuvrante);
    chiffres(&mut m, "2");
    m.appuyer(Touche::Egal);
    assert_eq!(m.erreur(), Some(ErreurCalc::GroupeOuvert));
}

#[test]
fn groupes_imbriques() {
    // 2*((1+2)*(3+4)) = 42
    let mut m = MachineCalc::default();
    chiffres(&mut m, "2");
    op(&mut m, OpBinaire::Fois);
    m.appuyer(Touche::ParentheseOuvrante);
    m.appuyer(Touche::ParentheseOuvrante);
    chiffres(&mut m, "1");
    op(&mut m, OpBinaire::Plus);
    chiffres(&mut m, "2");
    m.appuyer(Touche::ParentheseFermante);
    op(&mut m, OpBinaire::Fois);
    m.appuyer(Touche::ParentheseOuvrante);
    chiffres(&mut m, "3");
    op(&mut m, OpBinaire::Plus);
    chiffres(&mut m, "4");
    m.appuyer(Touche::ParentheseFermante);
    m.appuyer(Touche::ParentheseFermante);
    m.appuyer(Touche::Egal);
    assert_eq!(m.affichage(), "42");
    assert!(m.erreur().is_none());
}

/* ------------------------ fonctions et INV ------------------------ */

#[test]
fn racine_puis_carre_inverse() {
    let mut m = MachineCalc::default();
    chiffres(&mut m, "4");
    m.appuyer(Touche::Fonction(FonctionSci::RacineCarree));
    assert_eq!(m.affichage(), "2");
    assert_eq!(m.trace(), "sqrt(4)");

    m.appuyer(Touche::Inverse);
    m.appuyer(Touche::Fonction(FonctionSci::RacineCarree));
    assert_eq!(m.affichage(), "4");
    assert_eq!(m.trace(), "(sqrt(4))^2");
    // INV est un mode, pas un coup unique
    assert!(m.inverse());
}

#[test]
fn sinus_en_degres() {
    let mut m = MachineCalc::default();
    m.regler_mode_angle(ModeAngle::Degres);
    chiffres(&mut m, "90");
    m.appuyer(Touche::Fonction(FonctionSci::Sin));
    assert_eq!(m.affichage(), "1");
    assert_eq!(m.trace(), "sin(90)");
}

#[test]
fn arcsinus_hors_domaine() {
    let mut m = MachineCalc::default();
    m.appuyer(Touche::Inverse);
    chiffres(&mut m, "2");
    m.appuyer(Touche::Fonction(FonctionSci::Sin));
    assert_eq!(m.erreur(), Some(ErreurCalc::DomaineNumerique));
    assert_eq!(m.affichage(), "ERR");
}

#[test]
fn factorielle() {
    let mut m = MachineCalc::default();
    chiffres(&mut m, "5");
    m.appuyer(Touche::Fonction(FonctionSci::Factorielle));
    assert_eq!(m.affichage(), "120");
    assert_eq!(m.trace(), "5!");

    let mut m = MachineCalc::default();
    chiffres(&mut m, "171");
    m.appuyer(Touche::Fonction(FonctionSci::Factorielle));
    assert_eq!(m.erreur(), Some(ErreurCalc::DomaineFactorielle));

    let mut m = MachineCalc::default();
    chiffres(&mut m, "170");
    m.appuyer(Touche::Fonction(FonctionSci::Factorielle));
    assert!(m.affichage().ends_with("e+306"));
}

#[test]
fn fonction_sur_resultat_de_chaine() {
    // 2+7= puis sqrt : après =, la saisie porte le résultat formaté,
    // c'est elle qui fournit l'opérande
    let mut m = MachineCalc::default();
    chiffres(&mut m, "2");
    op(&mut m, OpBinaire::Plus);
    chiffres(&mut m, "7");
    m.appuyer(Touche::Egal);
    m.appuyer(Touche::Fonction(FonctionSci::RacineCarree));
    assert_eq!(m.affichage(), "3");
}

#[test]
fn fonction_repercutee_sur_l_accumulateur() {
    // saisie vidée au retour arrière : l'opérande vient de l'accumulateur,
    // et le résultat doit y retourner pour garder la chaîne cohérente
    let mut m = MachineCalc::default();
    chiffres(&mut m, "9");
    m.appuyer(Touche::Egal);
    m.appuyer(Touche::Retour);
    // saisie vide : l'affichage retombe sur l'accumulateur formaté
    assert_eq!(m.affichage(), "9");
    m.appuyer(Touche::Fonction(FonctionSci::RacineCarree));
    assert_eq!(m.affichage(), "3");
    assert_eq!(m.trace(), "sqrt(9)");
    // la saisie re-vidée, l'affichage relit l'accumulateur répercuté
    m.appuyer(Touche::Retour);
    m.appuyer(Touche::Egal);
    assert_eq!(m.affichage(), "3");
}

#[test]
fn fonction_sans_operande_est_ignoree() {
    // opération en attente, saisie vide : rien à transformer
    let mut m = MachineCalc::default();
    chiffres(&mut m, "5");
    op(&mut m, OpBinaire::Plus);
    m.appuyer(Touche::Fonction(FonctionSci::Pourcent));
    assert_eq!(m.affichage(), "5");
    assert_eq!(m.trace(), "5+");
    assert!(m.erreur().is_none());
}

#[test]
fn pourcent_dans_une_chaine() {
    let mut m = MachineCalc::default();
    chiffres(&mut m, "200");
    op(&mut m, OpBinaire::Fois);
    chiffres(&mut m, "15");
    m.appuyer(Touche::Fonction(FonctionSci::Pourcent));
    assert_eq!(m.affichage(), "0.15");
    assert_eq!(m.trace(), "200*15%");
    m.appuyer(Touche::Egal);
    assert_eq!(m.affichage(), "30");
}

#[test]
fn fonctions_imbriquees_dans_la_trace() {
    let mut m = MachineCalc::default();
    chiffres(&mut m, "12");
    m.appuyer(Touche::Fonction(FonctionSci::Sin));
    m.appuyer(Touche::Fonction(FonctionSci::RacineCarree));
    // sin(12) < 0 : la racine refuse
    assert_eq!(m.erreur(), Some(ErreurCalc::DomaineNumerique));
    assert_eq!(m.trace(), "sqrt(sin(12))");
}

/* ------------------------ constantes ------------------------ */

#[test]
fn constante_pi() {
    let mut m = MachineCalc::default();
    m.inserer_constante(Constante::Pi);
    assert_eq!(m.affichage(), "3.14159265358979");
    assert_eq!(m.trace(), "3.14159265358979");
    // comme un résultat : un chiffre repart à neuf
    chiffres(&mut m, "5");
    assert_eq!(m.affichage(), "5");
}

#[test]
fn constante_dans_une_chaine() {
    let mut m = MachineCalc::default();
    chiffres(&mut m, "2");
    op(&mut m, OpBinaire::Fois);
    m.inserer_constante(Constante::Pi);
    m.appuyer(Touche::Egal);
    // la constante entre par sa forme affichée à 15 chiffres
    assert_eq!(m.affichage(), "6.28318530717958");
}
