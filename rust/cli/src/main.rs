use std::io;

fn main() {
    omaha_cli::logging::init_logging();
    let code = omaha_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
