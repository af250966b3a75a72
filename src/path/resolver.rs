use std::ffi::CString;
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

/// Result of looking a command name up on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Found(PathBuf),
    /// A candidate exists but the current user may not execute it.
    NotExecutable(PathBuf),
    NotFound,
}

#[derive(Clone, Debug, Default)]
pub struct PathResolver;

impl PathResolver {
    pub fn new() -> Self {
        Self
    }

    /// Names containing `/` are checked as given. Anything else is looked up
    /// in each `path_var` directory in order; an empty entry stands for the
    /// current directory.
    pub fn resolve(&self, name: &str, path_var: Option<&str>) -> Resolution {
        if name.is_empty() {
            return Resolution::NotFound;
        }

        if name.contains('/') {
            return check_candidate(Path::new(name)).unwrap_or(Resolution::NotFound);
        }

        let path_var = match path_var {
            Some(value) if !value.is_empty() => value,
            _ => {
                log::debug!("PATH unset, cannot resolve {}", name);
                return Resolution::NotFound;
            }
        };

        let mut denied = None;
        for dir in path_var.split(':') {
            let dir = if dir.is_empty() { "." } else { dir };
            let candidate = Path::new(dir).join(name);

            match check_candidate(&candidate) {
                Some(Resolution::Found(path)) => {
                    log::trace!("resolved {} to {}", name, path.display());
                    return Resolution::Found(path);
                }
                Some(not_executable) => {
                    denied.get_or_insert(not_executable);
                }
                None => {}
            }
        }

        denied.unwrap_or(Resolution::NotFound)
    }
}

/// `None` when nothing exists at `path`.
fn check_candidate(path: &Path) -> Option<Resolution> {
    let metadata = std::fs::metadata(path).ok()?;

    if metadata.is_file() && is_executable(path) {
        Some(Resolution::Found(path.to_path_buf()))
    } else {
        Some(Resolution::NotExecutable(path.to_path_buf()))
    }
}

fn is_executable(path: &Path) -> bool {
    let Ok(c_path) = CString::new(path.as_os_str().as_bytes()) else {
        return false;
    };
    // SAFETY: c_path is a valid NUL-terminated string for the duration of the call.
    unsafe { libc::access(c_path.as_ptr(), libc::X_OK) == 0 }
}
