mod platform;

fn main() {
    if let Err(err) = platform::run_app() {
        eprintln!("keeper: {err}");
        std::process::exit(1);
    }
}
