// src/app.rs
//
// Calculatrice scientifique — module App (racine)
// -----------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l'impl eframe::App (compatible NATIF + WEB)
//
// Le clavier physique est traité ici, au niveau du contexte : chaque
// caractère ou touche reconnu devient une `Touche` du noyau, comme un
// clic sur le bouton correspondant.

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use crate::noyau::Touche;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut touches: Vec<Touche> = Vec::new();
        ctx.input(|i| {
            for evenement in &i.events {
                match evenement {
                    egui::Event::Text(texte) => {
                        touches.extend(texte.chars().filter_map(etat::touche_du_caractere));
                    }
                    egui::Event::Key {
                        key, pressed: true, ..
                    } => match key {
                        egui::Key::Enter => touches.push(Touche::Egal),
                        egui::Key::Backspace => touches.push(Touche::Retour),
                        // ESC = remise à zéro, comme le bouton "C"
                        egui::Key::Escape => touches.push(Touche::Effacer),
                        _ => {}
                    },
                    _ => {}
                }
            }
        });
        for touche in touches {
            self.appuyer(touche);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
