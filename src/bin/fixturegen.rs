use clap::Parser;
use fixturegen::template::CONFIRMATION;

#[derive(Parser, Debug)]
#[command(
    name = "fixturegen",
    version,
    about = "Writes the large_test.csv lock-file-style fixture into the current directory",
    long_about = None
)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();
    let _ = fixturegen::logger::init();
    match fixturegen::generate() {
        Ok(_) => println!("{CONFIRMATION}"),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
