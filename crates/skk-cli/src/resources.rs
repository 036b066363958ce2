//! Loading dictionaries and configuration files named on the command line.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use skk_core::dict::{CompositeDictionary, DictEncoding, Dictionary, SkkDictionary};
use skk_core::romaji::RomajiTable;
use skk_core::settings;

use crate::CliError;

const APP_DIR: &str = "skk-cli";
const DEFAULT_DICT: &str = "SKK-JISYO.L";

/// `<config dir>/skk-cli/SKK-JISYO.L`, if the platform has a config dir.
pub fn default_dict_path() -> Option<PathBuf> {
    let mut path = dirs::config_dir()?;
    path.push(APP_DIR);
    path.push(DEFAULT_DICT);
    Some(path)
}

/// Open every dictionary in order. Any failure is fatal.
pub fn load_dictionaries(
    paths: &[PathBuf],
    encoding: DictEncoding,
) -> Result<CompositeDictionary, CliError> {
    let mut layers: Vec<Arc<dyn Dictionary>> = Vec::with_capacity(paths.len());
    for path in paths {
        let dict = SkkDictionary::open(path, encoding).map_err(|source| CliError::DictionaryLoad {
            path: path.clone(),
            source,
        })?;
        layers.push(Arc::new(dict));
    }
    Ok(CompositeDictionary::new(layers))
}

fn read_config(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Install a settings file before the first `settings()` call.
pub fn init_settings(path: &Path) -> Result<(), CliError> {
    settings::init_custom(read_config(path)?)?;
    Ok(())
}

/// Install a custom romaji table before the first conversion.
pub fn init_romaji(path: &Path) -> Result<(), CliError> {
    RomajiTable::init_custom(read_config(path)?)?;
    Ok(())
}
