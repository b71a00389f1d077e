// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Deux onglets :
// - Linéaire    : x, y, z, Accuracy -> Result
// - Branchement : x, y, fonction (cot/sin/cos/tan) -> Result + branche retenue
//
// Clavier : Enter dans un champ évalue l’onglet courant.

use eframe::egui;

use super::etat::{AppCalc, Onglet};
use crate::noyau::Fonction;

const FORMULE_LINEAIRE: &str =
    "((1 + sin²(x + y)) / |x − 2y/(1 + x²y²)|) · x^|y| + cos²(atan(1/z))";

const FORMULE_BRANCHEMENT: &str = "f(x)³ + cot(y)          si x·y > 12\n\
     sinh(f(x)³) + y²        si x·y < 7\n\
     cos(x − f(x)³)          sinon";

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.horizontal(|ui| {
            ui.selectable_value(&mut self.onglet, Onglet::Lineaire, "Algorithme linéaire");
            ui.selectable_value(
                &mut self.onglet,
                Onglet::Branchement,
                "Algorithme à branchement",
            );
        });

        ui.separator();
        ui.add_space(6.0);

        match self.onglet {
            Onglet::Lineaire => self.ui_lineaire(ui),
            Onglet::Branchement => self.ui_branchement(ui),
        }
    }

    fn ui_lineaire(&mut self, ui: &mut egui::Ui) {
        Self::champ_formule(ui, FORMULE_LINEAIRE);
        ui.add_space(8.0);

        let mut enter = false;
        egui::Grid::new("grille_lineaire")
            .num_columns(2)
            .spacing([8.0, 6.0])
            .show(ui, |ui| {
                enter |= Self::champ_saisie(ui, "x:", "lin_x", &mut self.x_lin);
                enter |= Self::champ_saisie(ui, "y:", "lin_y", &mut self.y_lin);
                enter |= Self::champ_saisie(ui, "z:", "lin_z", &mut self.z_lin);
                enter |= Self::champ_saisie(ui, "Accuracy:", "lin_acc", &mut self.accuracy);

                ui.label("Result:");
                ui.monospace(&self.resultat_lin);
                ui.end_row();
            });

        ui.add_space(6.0);
        if Self::boutons(ui, self) || enter {
            self.evaluer_lineaire();
        }
    }

    fn ui_branchement(&mut self, ui: &mut egui::Ui) {
        Self::champ_formule(ui, FORMULE_BRANCHEMENT);
        ui.add_space(8.0);

        let mut enter = false;
        egui::Grid::new("grille_branchement")
            .num_columns(2)
            .spacing([8.0, 6.0])
            .show(ui, |ui| {
                enter |= Self::champ_saisie(ui, "x:", "br_x", &mut self.x_br);
                enter |= Self::champ_saisie(ui, "y:", "br_y", &mut self.y_br);

                ui.label("Fonction f :");
                egui::ComboBox::from_id_salt("br_fonction")
                    .selected_text(self.fonction.nom())
                    .show_ui(ui, |ui| {
                        for f in Fonction::TOUTES {
                            ui.selectable_value(&mut self.fonction, f, f.nom());
                        }
                    });
                ui.end_row();

                ui.label("Result:");
                ui.monospace(&self.resultat_br);
                ui.end_row();
            });

        if let Some(b) = self.branche {
            ui.add_space(4.0);
            ui.label(format!("Branche : {b}"));
        }

        ui.add_space(6.0);
        if Self::boutons(ui, self) || enter {
            self.evaluer_branchement();
        }
    }

    /// Ligne “label + champ” ; renvoie true si Enter a été pressé dans le champ.
    fn champ_saisie(ui: &mut egui::Ui, label: &str, id: &str, texte: &mut String) -> bool {
        ui.label(label);
        let resp = ui.add(
            egui::TextEdit::singleline(texte)
                .id_salt(id)
                .desired_width(160.0),
        );
        ui.end_row();

        resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
    }

    /// Calculate + AC ; renvoie true si Calculate a été cliqué.
    fn boutons(ui: &mut egui::Ui, app: &mut AppCalc) -> bool {
        let mut calcul = false;
        ui.horizontal(|ui| {
            calcul = ui
                .add_sized([96.0, 30.0], egui::Button::new("Calculate"))
                .clicked();

            let ac = ui
                .add_sized([56.0, 30.0], egui::Button::new("AC"))
                .on_hover_text("Remise à zéro totale");
            if ac.clicked() {
                app.reset_total();
            }
        });
        calcul
    }

    fn champ_formule(ui: &mut egui::Ui, contenu: &str) {
        // Remplace l’image de la formule : texte monospace en lecture seule.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.monospace(contenu);
            });
    }
}
