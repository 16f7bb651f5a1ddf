use anyhow::{anyhow, Result};

const CANDIDATES: &[&str] = &[
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Bold.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Bold.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    "C:\\Windows\\Fonts\\arialbd.ttf",
];

/// Reads the first system font found in [`CANDIDATES`].
pub fn load_system_font() -> Result<Vec<u8>> {
    first_readable(CANDIDATES).ok_or_else(|| {
        anyhow!("no usable font found; install DejaVu Sans or Noto Sans (tried {})", CANDIDATES.join(", "))
    })
}

fn first_readable(paths: &[&str]) -> Option<Vec<u8>> {
    paths.iter().find_map(|p| match std::fs::read(p) {
        Ok(bytes) => {
            log::info!("using font {p}");
            Some(bytes)
        }
        Err(e) => {
            log::trace!("skipping font {p}: {e}");
            None
        }
    })
}
