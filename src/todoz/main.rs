//! The binary only wires up `cli::run()` and turns errors into exit codes.
//! Everything else lives in the library or in `cli/`.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        if e.is_storage_corrupt() {
            eprintln!("Run `todoz reset` to start over with an empty list.");
        }
        std::process::exit(1);
    }
}
