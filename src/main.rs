mod interrupt;
mod reader;
mod serial;

use crate::interrupt::StopFlag;
use crate::reader::{LineReader, Outcome};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::process::ExitCode;

const DEVICE_PATH: &str = "/dev/ttyUSB1";
const BAUD_RATE: u32 = 9600;
const LOG_LEVEL: LevelFilter = LevelFilter::Info;

fn main() -> ExitCode {
    // stdout is reserved for readings
    if let Err(e) = TermLogger::init(
        LOG_LEVEL,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("failed to initialise logger: {}", e);
    }

    let stop = StopFlag::new();
    if let Err(e) = stop.install_ctrlc_handler() {
        log::error!("Failed to install Ctrl+C handler: {}", e);
        return ExitCode::FAILURE;
    }

    let conn = match serial::new(DEVICE_PATH, BAUD_RATE, stop) {
        Ok(conn) => conn,
        Err(e) => {
            log::error!("Failed to open {}: {}", DEVICE_PATH, e);
            return ExitCode::FAILURE;
        }
    };
    log::info!("Reading from {} at {} baud", DEVICE_PATH, BAUD_RATE);

    match LineReader::new(conn, std::io::stdout()).run() {
        Outcome::Interrupted => {
            println!("Keyboard Interrupt");
            ExitCode::SUCCESS
        }
        Outcome::Failed(e) => {
            log::error!("Stopped reading: {}", e);
            ExitCode::FAILURE
        }
    }
}
