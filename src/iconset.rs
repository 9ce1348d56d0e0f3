//! Iconset export: renders the icon at the conventional macOS sizes, writes
//! the `AppIcon.iconset` PNG set, and packs it into `AppIcon.icns` with
//! `iconutil`.

use std::fs;
use std::io;
use std::path::Path;
use std::process::Command;

use crate::icon::generate_icon;
use crate::logger::{log_command, log_error, log_line};

/// Render sizes, ascending. Order matters: the 64 and 1024 renders overwrite
/// the @2x files first written at 32 and 512.
pub const SIZES: [u32; 7] = [16, 32, 64, 128, 256, 512, 1024];

/// Working directory consumed by `iconutil`.
pub const ICONSET_DIR: &str = "AppIcon.iconset";

/// Final multi-resolution artifact.
pub const ICNS_FILE: &str = "AppIcon.icns";

/// Output names for one render size: `(base, @2x)`. 64 and 1024 have no base
/// name of their own; they only back-fill the @2x slot of the next size down.
pub fn iconset_names(size: u32) -> (Option<&'static str>, Option<&'static str>) {
    match size {
        16 => (Some("icon_16x16.png"), Some("icon_16x16@2x.png")),
        32 => (Some("icon_32x32.png"), Some("icon_32x32@2x.png")),
        64 => (None, Some("icon_32x32@2x.png")),
        128 => (Some("icon_128x128.png"), Some("icon_128x128@2x.png")),
        256 => (Some("icon_256x256.png"), Some("icon_256x256@2x.png")),
        512 => (Some("icon_512x512.png"), Some("icon_512x512@2x.png")),
        1024 => (None, Some("icon_512x512@2x.png")),
        _ => (None, None),
    }
}

/// Render every supported size into `dir`, saving one PNG per mapped name.
pub fn write_iconset(dir: &Path) -> io::Result<()> {
    fs::create_dir_all(dir)?;
    for &size in &SIZES {
        let img = generate_icon(size);
        let (base, retina) = iconset_names(size);
        for name in [base, retina].into_iter().flatten() {
            let path = dir.join(name);
            img.save(&path).map_err(|e| {
                io::Error::new(
                    io::ErrorKind::Other,
                    format!("save {}: {}", path.display(), e),
                )
            })?;
        }
        log_line(&format!("rendered {}x{}", size, size));
        println!("  {}x{}", size, size);
    }
    Ok(())
}

/// Pack a populated iconset directory into an icns file via `iconutil`.
pub fn pack_icns(iconset_dir: &Path, icns_path: &Path) -> io::Result<()> {
    let args = [
        "-c".to_string(),
        "icns".to_string(),
        iconset_dir.display().to_string(),
        "-o".to_string(),
        icns_path.display().to_string(),
    ];
    log_command("iconutil", &args);
    let output = match Command::new("iconutil").args(&args).output() {
        Ok(o) => o,
        Err(e) => {
            log_error("Failed to run iconutil", &e);
            return Err(e);
        }
    };
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        log_line(&format!(
            "iconutil exited with {}: {}",
            output.status,
            stderr.trim()
        ));
        return Err(io::Error::new(
            io::ErrorKind::Other,
            format!("iconutil failed: {}", stderr.trim()),
        ));
    }
    Ok(())
}

/// Full export: fresh `AppIcon.iconset` in the current directory, all sizes,
/// pack to `AppIcon.icns`, then remove the working directory.
pub fn make_icns() -> io::Result<()> {
    let iconset = Path::new(ICONSET_DIR);
    if iconset.exists() {
        fs::remove_dir_all(iconset)?;
    }
    write_iconset(iconset)?;
    pack_icns(iconset, Path::new(ICNS_FILE))?;
    fs::remove_dir_all(iconset)?;
    log_line(&format!("created {}", ICNS_FILE));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPECTED_NAMES: [&str; 10] = [
        "icon_16x16.png",
        "icon_16x16@2x.png",
        "icon_32x32.png",
        "icon_32x32@2x.png",
        "icon_128x128.png",
        "icon_128x128@2x.png",
        "icon_256x256.png",
        "icon_256x256@2x.png",
        "icon_512x512.png",
        "icon_512x512@2x.png",
    ];

    #[test]
    fn test_every_size_maps_to_at_least_one_name() {
        for &size in &SIZES {
            let (base, retina) = iconset_names(size);
            assert!(
                base.is_some() || retina.is_some(),
                "size {} has no output name",
                size
            );
        }
    }

    #[test]
    fn test_aliased_sizes_have_no_base_name() {
        assert_eq!(iconset_names(64), (None, Some("icon_32x32@2x.png")));
        assert_eq!(iconset_names(1024), (None, Some("icon_512x512@2x.png")));
    }

    #[test]
    fn test_write_iconset_produces_the_ten_conventional_files() {
        let dir = tempfile::tempdir().unwrap();
        write_iconset(dir.path()).unwrap();
        let mut names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        let mut expected: Vec<&str> = EXPECTED_NAMES.to_vec();
        expected.sort();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_retina_aliases_hold_the_double_resolution_render() {
        let dir = tempfile::tempdir().unwrap();
        write_iconset(dir.path()).unwrap();
        let probe = |name: &str| image::image_dimensions(dir.path().join(name)).unwrap();
        // 64 and 1024 overwrite the files first written at 32 and 512.
        assert_eq!(probe("icon_32x32@2x.png"), (64, 64));
        assert_eq!(probe("icon_512x512@2x.png"), (1024, 1024));
        // Nothing overwrites the 16 px placeholder.
        assert_eq!(probe("icon_16x16@2x.png"), (16, 16));
        assert_eq!(probe("icon_512x512.png"), (512, 512));
    }
}
