use clap::Parser;

fn main() {
    let cli = docklayout::cli::Cli::parse();
    docklayout::logging::init(cli.verbose);

    if let Err(err) = docklayout::run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
