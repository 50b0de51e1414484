use tactician::{MoveSelector, host};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Tactician - interactive terminal");
    host::run_interactive_terminal(MoveSelector::default());
}
