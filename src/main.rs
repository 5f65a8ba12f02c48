fn main() {
    if let Err(e) = menucrawl::cli::run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
