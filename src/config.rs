//! Tool configuration
//!
//! Settings live in an INI file next to the print-dispatch script. The file
//! is read once at startup into a [`Config`] value that is passed explicitly
//! to the renderer and dispatcher; there is no ambient configuration state.

use std::path::{Path, PathBuf};

use ini::Ini;

use crate::error::{Error, Result};

/// Section the tool reads its settings from
const SETTINGS_SECTION: &str = "settings";

/// Dispatch script used when the config does not name one
const DEFAULT_PRINT_SCRIPT: &str = "print-page.sh";

/// Loaded tool configuration
///
/// Relative paths (`sample_pdf`, `print_script`) resolve against the
/// directory containing the config file, so the config, the generated PDF
/// and the dispatch script stay colocated.
#[derive(Debug, Clone)]
pub struct Config {
    /// Output path of the generated PDF, relative to the config directory
    pub sample_pdf: PathBuf,
    /// Printer name, surfaced in diagnostics only; the dispatch script
    /// owns the actual printer selection
    pub printer: Option<String>,
    /// Path of the print-dispatch script, relative to the config directory
    pub print_script: PathBuf,
    /// Directory containing the config file
    base_dir: PathBuf,
}

impl Config {
    /// Load the configuration from an INI file
    ///
    /// Requires a `[settings]` section with a `sample_pdf` key. `printer`
    /// and `print_script` are optional.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ConfigNotFound(path.to_path_buf()));
        }

        let file = Ini::load_from_file(path)?;

        let settings = file
            .section(Some(SETTINGS_SECTION))
            .ok_or_else(|| Error::MissingSection(SETTINGS_SECTION.to_string()))?;

        let sample_pdf = settings
            .get("sample_pdf")
            .ok_or_else(|| Error::MissingKey {
                section: SETTINGS_SECTION.to_string(),
                key: "sample_pdf".to_string(),
            })?;

        let printer = settings.get("printer").map(str::to_string);
        let print_script = settings.get("print_script").unwrap_or(DEFAULT_PRINT_SCRIPT);

        let base_dir = path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf);

        log::debug!("loaded config from {}", path.display());

        Ok(Self {
            sample_pdf: PathBuf::from(sample_pdf),
            printer,
            print_script: PathBuf::from(print_script),
            base_dir,
        })
    }

    /// Absolute-or-relative path the PDF is written to
    pub fn output_path(&self) -> PathBuf {
        self.base_dir.join(&self.sample_pdf)
    }

    /// Path of the print-dispatch script
    pub fn script_path(&self) -> PathBuf {
        self.base_dir.join(&self.print_script)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("config.ini");
        fs::write(&path, contents).expect("Failed to write config");
        path
    }

    #[test]
    fn test_load_full_config() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            "[settings]\nprinter = HP_DeskJet_2700\nsample_pdf = sample.pdf\n",
        );

        let config = Config::load(&path).unwrap();
        assert_eq!(config.sample_pdf, PathBuf::from("sample.pdf"));
        assert_eq!(config.printer.as_deref(), Some("HP_DeskJet_2700"));
        assert_eq!(config.output_path(), dir.path().join("sample.pdf"));
        assert_eq!(config.script_path(), dir.path().join("print-page.sh"));
    }

    #[test]
    fn test_load_print_script_override() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            "[settings]\nsample_pdf = sample.pdf\nprint_script = dispatch.sh\n",
        );

        let config = Config::load(&path).unwrap();
        assert_eq!(config.script_path(), dir.path().join("dispatch.sh"));
    }

    #[test]
    fn test_load_relative_subdirectory_output() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[settings]\nsample_pdf = out/test.pdf\n");

        let config = Config::load(&path).unwrap();
        assert_eq!(config.output_path(), dir.path().join("out/test.pdf"));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Config::load(Path::new("nonexistent/config.ini"));
        assert!(matches!(result, Err(Error::ConfigNotFound(_))));
    }

    #[test]
    fn test_load_missing_section() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[other]\nsample_pdf = sample.pdf\n");

        let result = Config::load(&path);
        assert!(matches!(result, Err(Error::MissingSection(_))));
    }

    #[test]
    fn test_load_missing_sample_pdf_key() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[settings]\nprinter = HP_DeskJet_2700\n");

        let result = Config::load(&path);
        match result {
            Err(Error::MissingKey { section, key }) => {
                assert_eq!(section, "settings");
                assert_eq!(key, "sample_pdf");
            }
            other => panic!("Expected MissingKey, got {:?}", other),
        }
    }
}
