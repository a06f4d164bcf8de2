use log::{error, info, warn};
use std::fs;
use std::path::Path;
use std::process;

use crate::settings::Settings;

/// Run boot checks before rendering or serving.
/// Creates missing output directories, warns about missing optional files,
/// and aborts if a configured file is absent.
pub fn run(settings: &Settings) {
    info!("Folio boot check starting...");

    let mut warnings = 0u32;
    let mut errors = 0u32;

    // ── 1. Directories for generated files ────────────
    for file in [&settings.database, &settings.output] {
        let Some(dir) = Path::new(file).parent().filter(|d| !d.as_os_str().is_empty()) else {
            continue;
        };
        if !dir.exists() {
            match fs::create_dir_all(dir) {
                Ok(_) => info!("  Created directory: {}", dir.display()),
                Err(e) => {
                    error!("  FAILED to create directory {}: {}", dir.display(), e);
                    errors += 1;
                }
            }
        }
    }

    // ── 2. Custom skeleton ─────────────────────────────
    if let Some(ref skeleton) = settings.skeleton {
        if !Path::new(skeleton).exists() {
            error!("  MISSING page skeleton: {}", skeleton);
            errors += 1;
        }
    }

    // ── 3. Local configuration document ────────────────
    let is_remote = settings.config.starts_with("http://") || settings.config.starts_with("https://");
    if !is_remote && !Path::new(&settings.config).exists() {
        warn!("  Configuration not found: {} (page will stay unrendered)", settings.config);
        warnings += 1;
    }

    // ── 4. Static assets ───────────────────────────────
    if !Path::new(&settings.static_dir).exists() {
        warn!("  Static directory missing: {} (page will be unstyled)", settings.static_dir);
        warnings += 1;
    }

    // ── Summary ────────────────────────────────────────
    if errors > 0 {
        error!(
            "Boot check FAILED: {} error(s), {} warning(s). Aborting.",
            errors, warnings
        );
        process::exit(1);
    }

    if warnings > 0 {
        warn!("Boot check passed with {} warning(s).", warnings);
    } else {
        info!("Boot check passed.");
    }
}
