mod app;
mod effects;
mod keymap;
mod logging;
mod ui;

fn main() -> std::io::Result<()> {
    logging::initialize();
    let initial_url = std::env::args().nth(1).unwrap_or_default();
    app::run(initial_url)
}
