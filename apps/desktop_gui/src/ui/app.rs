use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use simon_core::Color;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_backend_command;
use crate::controller::reducer::ViewState;
use crate::ui::theme::{button_fill, lighten_color, BUTTON_SIZE};

pub struct SimonApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    view: ViewState,
    typed_voice: bool,
    transcript_input: String,
}

impl SimonApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>, typed_voice: bool) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            view: ViewState {
                status: "Starting...".to_string(),
                ..ViewState::default()
            },
            typed_voice,
            transcript_input: String::new(),
        }
    }

    fn dispatch(&mut self, cmd: BackendCommand) {
        dispatch_backend_command(&self.cmd_tx, cmd, &mut self.view.status);
    }

    fn process_ui_events(&mut self) {
        let now = Instant::now();
        while let Ok(event) = self.ui_rx.try_recv() {
            self.view.apply(event, now);
        }
        self.view.expire_toasts(now);
    }

    fn show_buttons(&mut self, ui: &mut egui::Ui) {
        let mut pressed = None;
        egui::Grid::new("simon_buttons")
            .spacing(egui::vec2(12.0, 12.0))
            .show(ui, |ui| {
                for (index, color) in Color::ALL.into_iter().enumerate() {
                    let shining = self.view.is_shining(color);
                    let mut button = egui::Button::new("")
                        .fill(button_fill(color, shining))
                        .corner_radius(18.0);
                    if shining {
                        button = button.stroke(egui::Stroke::new(3.0, egui::Color32::WHITE));
                    }
                    let response = ui
                        .add_sized([BUTTON_SIZE, BUTTON_SIZE], button)
                        .on_hover_text(color.name());
                    if response.clicked() {
                        pressed = Some(color);
                    }
                    if index % 2 == 1 {
                        ui.end_row();
                    }
                }
            });

        if let Some(color) = pressed {
            self.dispatch(BackendCommand::Press(color));
        }
    }

    fn show_voice_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let label = if self.view.listening {
                "Listening..."
            } else {
                "Voice command"
            };
            if ui
                .add_enabled(!self.view.listening, egui::Button::new(label))
                .clicked()
            {
                self.dispatch(BackendCommand::StartVoice);
            }
        });

        if self.typed_voice && self.view.listening {
            ui.horizontal(|ui| {
                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.transcript_input)
                        .hint_text("say a color")
                        .desired_width(160.0),
                );
                let submitted =
                    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if submitted || ui.button("Say").clicked() {
                    let utterance = std::mem::take(&mut self.transcript_input);
                    self.dispatch(BackendCommand::SubmitTranscript(utterance));
                }
                response.request_focus();
            });
        }
    }

    fn show_banner(&self, ui: &mut egui::Ui) {
        if let Some(banner) = &self.view.banner {
            egui::Frame::NONE
                .fill(lighten_color(egui::Color32::from_rgb(0x5a, 0x1e, 0x1e), 0.1))
                .corner_radius(8.0)
                .inner_margin(egui::Margin::symmetric(12, 8))
                .show(ui, |ui| {
                    ui.colored_label(egui::Color32::WHITE, banner.message());
                });
        }
    }

    fn show_toasts(&self, ctx: &egui::Context) {
        if self.view.toasts.is_empty() {
            return;
        }
        egui::Area::new(egui::Id::new("simon_toasts"))
            .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-12.0, 12.0))
            .show(ctx, |ui| {
                for toast in &self.view.toasts {
                    egui::Frame::popup(ui.style()).show(ui, |ui| {
                        ui.label(egui::RichText::new(&toast.message).strong());
                    });
                }
            });
    }

    fn show_permission_prompt(&mut self, ctx: &egui::Context) {
        if !self.view.permission_prompt_open {
            return;
        }
        let mut answer = None;
        egui::Window::new("Notifications")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label("Allow notifications?");
                ui.horizontal(|ui| {
                    if ui.button("Allow").clicked() {
                        answer = Some(true);
                    }
                    if ui.button("Block").clicked() {
                        answer = Some(false);
                    }
                });
            });

        if let Some(granted) = answer {
            self.view.permission_prompt_open = false;
            self.dispatch(BackendCommand::AnswerNotificationPrompt { granted });
        }
    }
}

impl Drop for SimonApp {
    fn drop(&mut self) {
        let _ = self.cmd_tx.try_send(BackendCommand::Shutdown);
    }
}

impl eframe::App for SimonApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(16.0);
                self.show_banner(ui);
                self.show_buttons(ui);
                ui.add_space(12.0);
                self.show_voice_controls(ui);
                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new(format!("SCORE : {}", self.view.score()))
                        .size(22.0)
                        .strong(),
                );

                if self.view.is_lost() {
                    ui.horizontal(|ui| {
                        ui.label("You lost !");
                        if ui.button("Restart").clicked() {
                            self.dispatch(BackendCommand::Restart);
                        }
                    });
                }

                ui.add_space(8.0);
                ui.weak(&self.view.status);
            });
        });

        self.show_toasts(ctx);
        self.show_permission_prompt(ctx);

        if self.view.is_machine_turn() || self.view.listening {
            ctx.request_repaint_after(Duration::from_millis(16));
        } else {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
