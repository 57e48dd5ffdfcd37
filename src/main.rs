use std::process::ExitCode;

use rgb565_progmem::{convert_image_to_rgb565_array, Config};

fn main() -> ExitCode {
    let config = Config::default();
    match convert_image_to_rgb565_array(&config) {
        Ok(summary) => {
            println!("{}", summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Conversion failed because of: {}", e);
            ExitCode::FAILURE
        }
    }
}
