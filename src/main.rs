use mrrbar_icon::iconset::{ICNS_FILE, make_icns};
use mrrbar_icon::logger::log_error;

fn main() {
    make_icns().unwrap_or_else(|e| {
        log_error("icns export failed", &e);
        panic!("failed to create {}: {}", ICNS_FILE, e)
    });
    println!("Created {}", ICNS_FILE);
}
