use std::path::PathBuf;

use dirs::home_dir;

const GIMNASIO_HOME_ENV: &str = "GIMNASIO_HOME";
const DEFAULT_HOME_DIRNAME: &str = ".gimnasio";

/// Returns the gimnasio configuration directory, which can be specified by
/// the `GIMNASIO_HOME` environment variable. If not set, defaults to
/// `~/.gimnasio`.
///
/// - If `GIMNASIO_HOME` is set, the value will be canonicalized and this
///   function will Err if the path does not exist.
/// - If `GIMNASIO_HOME` is not set, this function does not verify that the
///   directory exists.
pub fn find_gimnasio_home() -> std::io::Result<PathBuf> {
    resolve_home(std::env::var(GIMNASIO_HOME_ENV).ok().as_deref(), home_dir())
}

fn resolve_home(env_value: Option<&str>, user_home: Option<PathBuf>) -> std::io::Result<PathBuf> {
    if let Some(val) = env_value
        && !val.is_empty()
    {
        return PathBuf::from(val).canonicalize();
    }

    let mut p = user_home.ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Could not find home directory",
        )
    })?;
    p.push(DEFAULT_HOME_DIRNAME);
    Ok(p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn env_override_is_canonicalized() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let raw = dir.path().to_string_lossy().to_string();
        let resolved = resolve_home(Some(&raw), None)?;
        assert_eq!(dir.path().canonicalize()?, resolved);
        Ok(())
    }

    #[test]
    fn env_override_must_exist() {
        let missing = resolve_home(Some("/definitely/not/a/gimnasio/home"), None);
        assert!(missing.is_err());
    }

    #[test]
    fn empty_env_falls_back_to_user_home() -> anyhow::Result<()> {
        let resolved = resolve_home(Some(""), Some(PathBuf::from("/home/lucia")))?;
        assert_eq!(PathBuf::from("/home/lucia/.gimnasio"), resolved);
        Ok(())
    }

    #[test]
    fn no_user_home_is_not_found() {
        let err = resolve_home(None, None).err().map(|err| err.kind());
        assert_eq!(Some(std::io::ErrorKind::NotFound), err);
    }
}
