use hangman::cli;
use hangman::services::game::Game;
use log::error;

fn main() {
    env_logger::try_init().unwrap_or(());
    cli::args::parse();

    let mut game = Game::default();
    if let Err(e) = game.run() {
        error!("session aborted: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
