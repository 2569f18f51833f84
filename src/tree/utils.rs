//! Shared utility functions for tree walking

use std::io;
use std::path::Path;

/// Format a size in bytes to human-readable format.
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1}G", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1}M", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1}K", bytes as f64 / KB as f64)
    } else {
        format!("{}B", bytes)
    }
}

/// Block size of the file system holding `path`, as reported by `statvfs`.
#[cfg(unix)]
pub fn block_size(path: &Path) -> io::Result<u64> {
    use std::ffi::CString;
    use std::mem::MaybeUninit;
    use std::os::unix::ffi::OsStrExt;

    let c_path = CString::new(path.as_os_str().as_bytes())
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    let mut fs_info = MaybeUninit::<libc::statvfs>::uninit();
    let result = unsafe { libc::statvfs(c_path.as_ptr(), fs_info.as_mut_ptr()) };
    if result != 0 {
        return Err(io::Error::last_os_error());
    }

    let fs_info = unsafe { fs_info.assume_init() };
    Ok(fs_info.f_bsize as u64)
}

/// Without `statvfs` the directory's own metadata length stands in.
#[cfg(not(unix))]
pub fn block_size(path: &Path) -> io::Result<u64> {
    Ok(std::fs::metadata(path)?.len())
}
