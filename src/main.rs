use std::env::args_os;
use std::io;
use std::process::ExitCode;

use pixel_flipper::{flip_pixel_file, CLIParser};

fn main() -> ExitCode {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    match flip_pixel_file(&arguments, &mut io::stdout().lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Flipping failed because of: {}", e);
            ExitCode::FAILURE
        }
    }
}
