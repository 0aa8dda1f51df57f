pub const WELCOME: &str = "Welcome to the Calculator!";
pub const OPERATION_PROMPT: &str = "Enter an operation:";
pub const ARGUMENTS_PROMPT: &str = "Enter arguments:";

#[cfg(not(feature = "gui"))]
mod terminal {
    use std::io::{self, BufRead, Write};

    use anyhow::Context;
    use tracing::{error, info};

    use super::{ARGUMENTS_PROMPT, OPERATION_PROMPT, WELCOME};
    use crate::{dispatch, registry::Registry};

    /// Prompts and reads one line. `None` once input is exhausted.
    fn prompt_line(
        prompt: &str,
        input: &mut impl BufRead,
        output: &mut impl Write,
    ) -> anyhow::Result<Option<String>> {
        writeln!(output, "{}", prompt).context("cannot write prompt")?;
        output.flush().context("cannot flush output")?;
        let mut buf = Vec::new();
        let read = input.read_until(b'\n', &mut buf).context("cannot read input")?;
        if read == 0 {
            return Ok(None);
        }
        // Invalid UTF-8 becomes U+FFFD and fails later as a bad number or name.
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    /// Runs the read/evaluate/print loop until `input` reaches end of file.
    pub fn run_session(
        registry: &Registry,
        mut input: impl BufRead,
        mut output: impl Write,
    ) -> anyhow::Result<()> {
        writeln!(output, "{}", WELCOME).context("cannot write banner")?;
        loop {
            let Some(operation) = prompt_line(OPERATION_PROMPT, &mut input, &mut output)? else {
                break;
            };
            let Some(arguments) = prompt_line(ARGUMENTS_PROMPT, &mut input, &mut output)? else {
                break;
            };
            let outcome = dispatch::evaluate(registry, &operation, &arguments);
            writeln!(output, "{}", outcome).context("cannot write result")?;
            writeln!(output).context("cannot write result")?;
        }
        output.flush().context("cannot flush output")?;
        Ok(())
    }

    pub fn run() -> std::process::ExitCode {
        let registry = Registry::default();
        info!(operations = ?registry.names(), "starting session");
        match run_session(&registry, io::stdin().lock(), io::stdout().lock()) {
            Ok(()) => {
                info!("input closed, exiting");
                std::process::ExitCode::SUCCESS
            }
            Err(e) => {
                error!(error = %e, "session aborted");
                eprintln!("{:#}", e);
                std::process::ExitCode::FAILURE
            }
        }
    }
}

#[cfg(not(feature = "gui"))]
pub use terminal::*;

#[cfg(feature = "gui")]
mod gui {
    use eframe::egui;
    use std::collections::VecDeque;

    use crate::{
        dispatch::{self, Outcome},
        registry::Registry,
    };

    const MAX_HISTORY_LEN: usize = 10;

    struct App {
        registry: Registry,
        operation: &'static str,
        arguments: String,
        result: String,
        history: VecDeque<String>,
    }

    impl Default for App {
        fn default() -> Self {
            let registry = Registry::default();
            let operation = registry.names().first().copied().unwrap_or_default();
            Self {
                registry,
                operation,
                arguments: String::new(),
                result: String::new(),
                history: VecDeque::new(),
            }
        }
    }

    impl eframe::App for App {
        fn update(&mut self, ctx: &egui::Context, _: &mut eframe::Frame) {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.heading(super::WELCOME);
                self.operation_selector(ui);
                ui.horizontal(|ui| {
                    ui.label(super::ARGUMENTS_PROMPT);
                    let edit = ui.text_edit_singleline(&mut self.arguments);
                    let submitted =
                        edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    if ui.add(large_btn("=")).clicked() || submitted {
                        self.solve();
                    }
                });
                ui.label(&self.result);
                ui.separator();
                for line in self.history.iter().rev() {
                    ui.label(line);
                }
            });
        }
    }

    impl App {
        fn operation_selector(&mut self, ui: &mut egui::Ui) {
            ui.horizontal(|ui| {
                ui.label(super::OPERATION_PROMPT);
                for &name in self.registry.names() {
                    ui.selectable_value(&mut self.operation, name, name);
                }
            });
        }

        fn solve(&mut self) {
            let outcome = dispatch::evaluate(&self.registry, self.operation, &self.arguments);
            tracing::debug!(%outcome, "evaluated");
            self.result = outcome.to_string();
            self.history.push_back(format!(
                "{} {} => {}",
                self.operation,
                self.arguments.trim(),
                self.result
            ));
            if self.history.len() > MAX_HISTORY_LEN {
                self.history.pop_front();
            }
            if let Outcome::Value(_) = outcome {
                self.arguments.clear();
            }
        }
    }

    fn large_btn(n: &str) -> egui::Button {
        egui::Button::new(n).min_size(egui::Vec2::new(BTN_LARGE_WIDTH, BTN_HEGHT))
    }

    const BTN_HEGHT: f32 = 20.0;
    const BTN_LARGE_WIDTH: f32 = 40.0;
    const W_WIDTH: f32 = 360.0;
    const W_HEIGHT: f32 = 320.0;

    #[cfg(test)]
    mod gui_tests {
        use super::*;

        #[test]
        fn test_history_keeps_failures() {
            let mut app = App {
                operation: "/",
                arguments: "5 0".to_string(),
                ..App::default()
            };
            app.solve();
            assert_eq!(app.result, "Error: Divisor cannot be zero.");
            assert_eq!(app.history.len(), 1);
            assert!(app.history[0].ends_with("Error: Divisor cannot be zero."));
            assert_eq!(app.arguments, "5 0");
        }

        #[test]
        fn test_history_is_bounded() {
            let mut app = App {
                operation: "+",
                ..App::default()
            };
            for i in 0..MAX_HISTORY_LEN + 3 {
                app.arguments = format!("{} 1", i);
                app.solve();
            }
            assert_eq!(app.history.len(), MAX_HISTORY_LEN);
            assert!(app.history.back().unwrap().ends_with("Result: 13"));
        }
    }

    pub fn run() -> std::process::ExitCode {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default().with_inner_size([W_WIDTH, W_HEIGHT]),
            ..Default::default()
        };
        match eframe::run_native("Calculator", options, Box::new(|_| Box::<App>::default())) {
            Ok(_) => std::process::ExitCode::SUCCESS,
            Err(e) => {
                tracing::error!(error = %e, "cannot run application");
                eprintln!("Cannot run application: {}", e);
                std::process::ExitCode::FAILURE
            }
        }
    }
}

#[cfg(feature = "gui")]
pub use gui::*;
