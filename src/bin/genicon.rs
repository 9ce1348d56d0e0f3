use std::fs;
use std::path::Path;

use mrrbar_icon::icon::generate_icon;

fn main() {
    // Master sprite for inspection; the icns export renders each size natively.
    let size = 1024u32;
    let img = generate_icon(size);
    let out_dir = Path::new("assets");
    fs::create_dir_all(out_dir).expect("create assets dir");
    let out = out_dir.join("icon_1024.png");
    img.save(&out).expect("failed to save icon png");
    println!("Wrote {}", out.display());
}
