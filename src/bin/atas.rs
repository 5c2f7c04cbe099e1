use std::path::PathBuf;

use atas::command::{Command, CommandResult};
use atas::storage::Storage;
use atas::traits::LineUi;
use atas::ui::TerminalUi;

fn main() {
    env_logger::init();

    let storage = match std::env::args().nth(1) {
        Some(path) => Storage::new(&PathBuf::from(path)),
        None => Storage::default_file(),
    };
    log::info!("Using task file {:?}", storage.path());
    let mut task_list = storage.load_or_default();

    let mut ui = TerminalUi::stdio();
    ui.show_to_user("Hello! What would you like to do?");

    loop {
        let line = ui.get_user_input();
        if ui.is_input_closed() && line.is_empty() {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        let (result, command) = match Command::parse(&line) {
            Ok(command) => (command.execute(&mut task_list, &mut ui), Some(command)),
            Err(err) => (CommandResult::failure(err), None),
        };
        ui.show_to_user(result.feedback());

        if let Some(command) = command {
            if command.is_exit() {
                break;
            }
            if command.is_mutating() && result.is_success() {
                if let Err(err) = storage.save(&task_list) {
                    log::warn!("Unable to save tasks: {}", err);
                }
            }
        }
    }
}
