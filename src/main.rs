//! sheetlens main entrypoint.

use sheetlens::run;
use sheetlens::ui::messages;

fn main() {
    println!();
    if let Err(e) = run() {
        messages::error(e);
        std::process::exit(1);
    }
}
