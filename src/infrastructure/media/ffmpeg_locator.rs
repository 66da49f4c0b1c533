use std::path::{Path, PathBuf};

/// Resolves the muxing executable without running it.
///
/// A configured value containing a path separator is taken literally and must
/// be an existing file; a bare name is searched on `PATH`.
pub fn locate_ffmpeg(configured: &str) -> Option<PathBuf> {
    let configured = configured.trim();
    if configured.is_empty() {
        return None;
    }

    let candidate = Path::new(configured);
    if candidate.components().count() > 1 || candidate.is_absolute() {
        return candidate.is_file().then(|| candidate.to_path_buf());
    }

    let path_var = std::env::var_os("PATH")?;
    std::env::split_paths(&path_var)
        .flat_map(|dir| executable_names(configured).map(move |name| dir.join(name)))
        .find(|path| path.is_file())
}

#[cfg(target_os = "windows")]
fn executable_names(name: &str) -> impl Iterator<Item = String> {
    let with_exe = if name.to_lowercase().ends_with(".exe") {
        None
    } else {
        Some(format!("{name}.exe"))
    };
    std::iter::once(name.to_string()).chain(with_exe)
}

#[cfg(not(target_os = "windows"))]
fn executable_names(name: &str) -> impl Iterator<Item = String> {
    std::iter::once(name.to_string())
}
