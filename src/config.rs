use std::env;
use std::ffi::OsString;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::inference::{CachedModelSource, FileModelSource, ModelSource};

pub const MODEL_ENV_VAR: &str = "MACHDETECT_MODEL";
pub const DEFAULT_MODEL_FILE: &str = "model.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub model_path: PathBuf,
    /// Keep the model in memory across submissions instead of reloading.
    pub cache_model: bool,
}

impl AppConfig {
    /// Resolves the model path: explicit override, then `MACHDETECT_MODEL`,
    /// then `model.json` next to the running executable.
    pub fn resolve(explicit: Option<PathBuf>, cache_model: bool) -> Result<Self> {
        let model_path =
            resolve_model_path(explicit, env::var_os(MODEL_ENV_VAR), env::current_exe)?;
        Ok(Self {
            model_path,
            cache_model,
        })
    }

    pub fn model_source(&self) -> Box<dyn ModelSource> {
        let file = FileModelSource::new(&self.model_path);
        if self.cache_model {
            Box::new(CachedModelSource::new(file))
        } else {
            Box::new(file)
        }
    }
}

fn resolve_model_path<F>(
    explicit: Option<PathBuf>,
    from_env: Option<OsString>,
    current_exe: F,
) -> Result<PathBuf>
where
    F: FnOnce() -> io::Result<PathBuf>,
{
    if let Some(path) = explicit {
        return Ok(path);
    }
    if let Some(path) = from_env.filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    let exe = current_exe().context("failed to locate the running executable")?;
    let dir = exe
        .parent()
        .with_context(|| format!("executable {} has no parent directory", exe.display()))?;
    Ok(dir.join(DEFAULT_MODEL_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exe() -> io::Result<PathBuf> {
        Ok(PathBuf::from("/opt/machdetect/bin/machdetect"))
    }

    #[test]
    fn explicit_path_wins() {
        let p = resolve_model_path(
            Some(PathBuf::from("custom.json")),
            Some("env.json".into()),
            exe,
        )
        .unwrap();
        assert_eq!(p, PathBuf::from("custom.json"));
    }

    #[test]
    fn env_beats_executable_dir() {
        let p = resolve_model_path(None, Some("env.json".into()), exe).unwrap();
        assert_eq!(p, PathBuf::from("env.json"));
    }

    #[test]
    fn empty_env_is_ignored() {
        let p = resolve_model_path(None, Some(OsString::new()), exe).unwrap();
        assert_eq!(p, PathBuf::from("/opt/machdetect/bin/model.json"));
    }

    #[test]
    fn falls_back_next_to_executable() {
        let p = resolve_model_path(None, None, exe).unwrap();
        assert_eq!(p, PathBuf::from("/opt/machdetect/bin/model.json"));
    }

    #[test]
    fn unknown_executable_is_an_error() {
        let err = resolve_model_path(None, None, || {
            Err(io::Error::new(io::ErrorKind::NotFound, "gone"))
        })
        .unwrap_err();
        assert!(err.to_string().contains("running executable"));
    }

    #[test]
    fn cached_config_reports_missing_model_lazily() {
        let cfg = AppConfig {
            model_path: PathBuf::from("/no/such/model.json"),
            cache_model: true,
        };
        assert!(cfg.model_source().acquire().is_err());
    }
}
