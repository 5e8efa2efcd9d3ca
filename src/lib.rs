use log::{debug, trace};
use serde_json::{Map, Value};

use std::fs;
use std::io::{self, Write};
use std::path::Path;

mod error;
mod keys;

pub use error::{Error, LoadError, Result, Role};
pub use keys::{diff, flatten, KeyDiff, KeySet};

/// Help text printed when the arguments are not usable.
pub const USAGE: &str = "\
USAGE: translate_check [--strict] <original_snippet_file.json> <translated_snippet_file.json>

This tool will compare the two files and check if any keys are missing from the translated file
and if there are any keys in the translated file that is not in the original file

    --strict    exit with status 2 if any key is missing or can be deleted

";

/// Compare the keys of two JSON files and print the report to stdout.
pub fn run(config: &Config) -> Result<KeyDiff> {
    let delta = compare(config.original, config.translated)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report(&mut out, &delta)?;
    out.flush()?;
    Ok(delta)
}

/// Program configuration.
#[derive(Debug)]
pub struct Config<'a> {
    original: &'a str,   // original snippet filename
    translated: &'a str, // translated snippet filename
    strict: bool,        // non-zero exit when keys differ
}

impl<'a> Config<'a> {
    /// Initializes the program configuration from the process arguments,
    /// program name included.
    pub fn new(args: &'a [String]) -> Result<Config<'a>> {
        let mut strict = false;
        let mut inputs = Vec::with_capacity(2);
        for arg in args.iter().skip(1) {
            match arg.as_str() {
                "--strict" => strict = true,
                opt if opt.starts_with('-') && opt.len() > 1 => {
                    return Err(Error::usage(format!("Unknown option: {}", opt)));
                }
                path => inputs.push(path),
            }
        }
        if inputs.len() < 2 {
            return Err(Error::usage(
                "Invalid number of arguments: <original> <translated>",
            ));
        }
        Ok(Config {
            original: inputs[0],
            translated: inputs[1],
            strict,
        })
    }

    pub fn original(&self) -> &str {
        self.original
    }

    pub fn translated(&self) -> &str {
        self.translated
    }

    /// Whether differences should turn into a failing exit status.
    pub fn strict(&self) -> bool {
        self.strict
    }
}

/// Load both files and diff their key sets.
pub fn compare<P: AsRef<Path>, Q: AsRef<Path>>(original: P, translated: Q) -> Result<KeyDiff> {
    let original = load(original).map_err(|err| Error::load(Role::Original, err))?;
    let translated = load(translated).map_err(|err| Error::load(Role::Translated, err))?;

    let original_keys = flatten(&original);
    let translated_keys = flatten(&translated);
    debug!(
        "flattened {} original keys and {} translated keys",
        original_keys.len(),
        translated_keys.len()
    );

    let delta = diff(&original_keys, &translated_keys);
    debug!(
        "{} keys missing, {} keys can be deleted",
        delta.missing.len(),
        delta.extra.len()
    );
    Ok(delta)
}

/// Parse a JSON file whose top-level value is an object.
pub fn load<P: AsRef<Path>>(path: P) -> std::result::Result<Map<String, Value>, LoadError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| LoadError::File {
        path: path.to_path_buf(),
        source,
    })?;
    trace!("read {} bytes from {}", bytes.len(), path.display());

    let val: Value = serde_json::from_slice(&bytes).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    match val {
        Value::Object(map) => {
            debug!("loaded {} with {} top-level keys", path.display(), map.len());
            Ok(map)
        }
        _ => Err(LoadError::Schema {
            path: path.to_path_buf(),
        }),
    }
}

/// Write the missing and deletable keys, one block each.
pub fn report<W: Write>(out: &mut W, delta: &KeyDiff) -> io::Result<()> {
    write_block(
        out,
        "These keys are missing:",
        "No keys are missing",
        &delta.missing,
    )?;
    write_block(
        out,
        "These keys can be deleted:",
        "No keys needs to be deleted",
        &delta.extra,
    )
}

fn write_block<W: Write>(out: &mut W, header: &str, none: &str, keys: &KeySet) -> io::Result<()> {
    if keys.is_empty() {
        return writeln!(out, "{}", none);
    }
    writeln!(out, "{}", header)?;
    for key in keys {
        writeln!(out, "{}", key)?;
    }
    writeln!(out)
}
