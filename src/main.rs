//! rfidconv main entrypoint.

use rfidconv::run;
use rfidconv::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
