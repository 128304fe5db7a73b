use std::process;

fn main() {
    process::exit(cli_sample::cli::run());
}
