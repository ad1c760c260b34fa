fn main() {
    env_logger::init();

    if let Err(e) = invasion::run() {
        eprintln!("alien invasion failed to start: {e:#}");
        std::process::exit(1);
    }
}
