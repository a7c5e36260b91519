fn main() {
    if let Err(err) = geotest::run() {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }
}
