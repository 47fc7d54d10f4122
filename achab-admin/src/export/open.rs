//! Hand a rendered document to the system browser

use std::path::PathBuf;

const HTML_FILENAME: &str = "reservations_dar_al_achab.html";

/// Write `html` to a file in the system temp directory and open it with the
/// platform's default handler. Returns the path written in either case.
pub fn open_html(html: &str) -> std::io::Result<PathBuf> {
    let path = std::env::temp_dir().join(HTML_FILENAME);
    std::fs::write(&path, html)?;
    platform::open(&path)?;
    tracing::info!(path = %path.display(), "Print document opened");
    Ok(path)
}

#[cfg(target_os = "windows")]
mod platform {
    use std::path::Path;

    pub fn open(path: &Path) -> std::io::Result<()> {
        std::process::Command::new("cmd")
            .args(["/C", "start", ""])
            .arg(path)
            .spawn()?;
        Ok(())
    }
}

#[cfg(target_os = "macos")]
mod platform {
    use std::path::Path;

    pub fn open(path: &Path) -> std::io::Result<()> {
        std::process::Command::new("open").arg(path).spawn()?;
        Ok(())
    }
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
mod platform {
    use std::path::Path;

    pub fn open(path: &Path) -> std::io::Result<()> {
        std::process::Command::new("xdg-open").arg(path).spawn()?;
        Ok(())
    }
}
