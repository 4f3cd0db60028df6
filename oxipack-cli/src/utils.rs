//! Utility functions for the CLI.

use dialoguer::Confirm;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::Path;

/// Create a progress bar with standard styling.
pub fn create_progress_bar(len: u64, enable: bool) -> ProgressBar {
    if !enable {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .expect("progress bar template is valid")
            .progress_chars("█▓▒░ "),
    );
    pb
}

/// Final path component of `path` as UTF-8.
pub fn file_name_of(path: &Path) -> Result<String, Box<dyn std::error::Error>> {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(str::to_owned)
        .ok_or_else(|| format!("{} has no valid file name", path.display()).into())
}

/// Write `data` to `path`, asking before replacing an existing file unless
/// `force` is set. Returns `false` if the user declined.
pub fn write_output(
    path: &Path,
    data: &[u8],
    force: bool,
    pb: &ProgressBar,
) -> Result<bool, Box<dyn std::error::Error>> {
    if path.exists() && !force {
        let overwrite = pb.suspend(|| {
            Confirm::new()
                .with_prompt(format!("Overwrite {}?", path.display()))
                .default(false)
                .interact()
        })?;
        if !overwrite {
            return Ok(false);
        }
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, data)?;
    Ok(true)
}

/// Ratio of original to compressed size, rounded to two decimals.
pub fn compression_ratio(original: usize, compressed: usize) -> f64 {
    if compressed == 0 {
        return 0.0;
    }
    (original as f64 / compressed as f64 * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compression_ratio() {
        assert_eq!(compression_ratio(100, 50), 2.0);
        assert_eq!(compression_ratio(10, 3), 3.33);
        assert_eq!(compression_ratio(5, 0), 0.0);
    }

    #[test]
    fn test_file_name_of() {
        assert_eq!(file_name_of(Path::new("dir/report.txt")).unwrap(), "report.txt");
        assert!(file_name_of(Path::new("/")).is_err());
    }
}
