//! stempeluhr main entrypoint.

use stempeluhr::run;

fn main() {
    if let Err(e) = run() {
        stempeluhr::ui::messages::error(e.to_string());
        std::process::exit(1);
    }
}
