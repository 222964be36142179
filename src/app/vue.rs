// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Tactile : gros boutons, grille fixe façon pocket
// - Les étiquettes scientifiques suivent le drapeau INV (sin/asin, x^y/y√x…)
//
// La vue ne calcule rien : elle fabrique des `Touche`, appelle `appuyer`,
// puis relit `affichage()` et `trace()`.

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::{Constante, FonctionSci, ModeAngle, OpBinaire, Touche};

/* ------------------------ dimensions ------------------------ */

const LARGEUR_TOUCHE: f32 = 62.0;
const HAUTEUR_TOUCHE: f32 = 34.0;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                self.ui_ecran(ui);
                ui.add_space(6.0);
                self.ui_reglages(ui);
                ui.add_space(8.0);
                self.ui_clavier(ui);
            });
    }

    /* ------------------------ écran ------------------------ */

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());

                // ligne d'expression (optionnelle), au-dessus de la valeur
                if self.machine.trace_visible() {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let trace = self.machine.trace();
                        ui.monospace(if trace.is_empty() { " " } else { trace });
                    });
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let texte = egui::RichText::new(self.machine.affichage())
                        .monospace()
                        .size(30.0);
                    if self.machine.erreur().is_some() {
                        ui.label(texte.color(ui.visuals().error_fg_color));
                    } else {
                        ui.label(texte);
                    }
                });

                // indicateurs : INV, mode d'angle, opération en attente
                ui.horizontal(|ui| {
                    if self.machine.inverse() {
                        ui.small("INV");
                    }
                    ui.small(match self.machine.mode_angle() {
                        ModeAngle::Radians => "RAD",
                        ModeAngle::Degres => "DEG",
                    });
                    if let Some(op) = self.machine.operation_en_attente() {
                        ui.small(op.symbole().to_string());
                    }
                    if let Some(e) = self.machine.erreur() {
                        ui.small(
                            egui::RichText::new(e.to_string())
                                .color(ui.visuals().error_fg_color),
                        );
                    }
                });
            });
    }

    /* ------------------------ réglages ------------------------ */

    fn ui_reglages(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let mode = self.machine.mode_angle();
            if ui
                .selectable_label(mode == ModeAngle::Radians, "Rad")
                .clicked()
            {
                self.machine.regler_mode_angle(ModeAngle::Radians);
            }
            if ui
                .selectable_label(mode == ModeAngle::Degres, "Deg")
                .clicked()
            {
                self.machine.regler_mode_angle(ModeAngle::Degres);
            }

            ui.separator();

            let mut trace = self.machine.trace_visible();
            if ui.checkbox(&mut trace, "Expression").changed() {
                self.machine.regler_affichage_trace(trace);
            }

            ui.separator();

            // constantes : entrent comme saisie complète
            if ui.button("π").on_hover_text("Insère π").clicked() {
                self.machine.inserer_constante(Constante::Pi);
            }
            if ui.button("e").on_hover_text("Insère e").clicked() {
                self.machine.inserer_constante(Constante::E);
            }
        });
    }

    /* ------------------------ clavier ------------------------ */

    fn ui_clavier(&mut self, ui: &mut egui::Ui) {
        let inv = self.machine.inverse();

        egui::Grid::new("clavier_sci")
            .num_columns(5)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                // rangée scientifique : les étiquettes suivent INV
                self.touche(ui, si(inv, "asin", "sin"), Touche::Fonction(FonctionSci::Sin));
                self.touche(ui, si(inv, "acos", "cos"), Touche::Fonction(FonctionSci::Cos));
                self.touche(ui, si(inv, "atan", "tan"), Touche::Fonction(FonctionSci::Tan));
                self.touche(ui, si(inv, "eˣ", "ln"), Touche::Fonction(FonctionSci::Ln));
                self.touche(ui, si(inv, "10ˣ", "log"), Touche::Fonction(FonctionSci::Log10));
                ui.end_row();

                self.touche(ui, si(inv, "ln", "eˣ"), Touche::Fonction(FonctionSci::Exp));
                self.touche(
                    ui,
                    si(inv, "x²", "√x"),
                    Touche::Fonction(FonctionSci::RacineCarree),
                );
                // x^y devient la racine y-ième sous INV
                self.touche(
                    ui,
                    si(inv, "y√x", "xʸ"),
                    Touche::Operation(si(inv, OpBinaire::Racine, OpBinaire::Puissance)),
                );
                self.touche(ui, "n!", Touche::Fonction(FonctionSci::Factorielle));
                self.touche(ui, "%", Touche::Fonction(FonctionSci::Pourcent));
                ui.end_row();

                let bouton_inv = ui
                    .add_sized(
                        [LARGEUR_TOUCHE, HAUTEUR_TOUCHE],
                        egui::Button::new("INV").selected(inv),
                    )
                    .on_hover_text("Bascule les fonctions réciproques");
                if bouton_inv.clicked() {
                    self.appuyer(Touche::Inverse);
                }
                self.touche(ui, "(", Touche::ParentheseOuvrante);
                self.touche(ui, ")", Touche::ParentheseFermante);
                self.touche_avec_aide(ui, "DEL", "Efface le dernier caractère", Touche::Retour);
                self.touche_avec_aide(ui, "C", "Remise à zéro", Touche::Effacer);
                ui.end_row();

                self.touche(ui, "7", Touche::Chiffre(7));
                self.touche(ui, "8", Touche::Chiffre(8));
                self.touche(ui, "9", Touche::Chiffre(9));
                self.touche(ui, "×", Touche::Operation(OpBinaire::Fois));
                self.touche(ui, "÷", Touche::Operation(OpBinaire::Division));
                ui.end_row();

                self.touche(ui, "4", Touche::Chiffre(4));
                self.touche(ui, "5", Touche::Chiffre(5));
                self.touche(ui, "6", Touche::Chiffre(6));
                self.touche(ui, "+", Touche::Operation(OpBinaire::Plus));
                self.touche(ui, "−", Touche::Operation(OpBinaire::Moins));
                ui.end_row();

                self.touche(ui, "1", Touche::Chiffre(1));
                self.touche(ui, "2", Touche::Chiffre(2));
                self.touche(ui, "3", Touche::Chiffre(3));
                self.touche_avec_aide(ui, "EE", "Exposant décimal", Touche::Exposant);
                self.touche_avec_aide(ui, "±", "Signe (mantisse ou exposant)", Touche::Signe);
                ui.end_row();

                self.touche(ui, "0", Touche::Chiffre(0));
                self.touche(ui, ".", Touche::Point);
                self.touche(ui, "=", Touche::Egal);
                ui.label("");
                ui.label("");
                ui.end_row();
            });
    }

    fn touche(&mut self, ui: &mut egui::Ui, etiquette: &str, touche: Touche) {
        let resp = ui.add_sized([LARGEUR_TOUCHE, HAUTEUR_TOUCHE], egui::Button::new(etiquette));
        if resp.clicked() {
            self.appuyer(touche);
        }
    }

    fn touche_avec_aide(&mut self, ui: &mut egui::Ui, etiquette: &str, aide: &str, touche: Touche) {
        let resp = ui
            .add_sized([LARGEUR_TOUCHE, HAUTEUR_TOUCHE], egui::Button::new(etiquette))
            .on_hover_text(aide);
        if resp.clicked() {
            self.appuyer(touche);
        }
    }
}

/// Petit sélecteur INV (évite les if répétés dans la grille).
fn si<T>(inverse: bool, alors: T, sinon: T) -> T {
    if inverse {
        alors
    } else {
        sinon
    }
}
