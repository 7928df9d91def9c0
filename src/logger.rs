use crate::config::Config;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

lazy_static::lazy_static! {
    static ref LOGGER: Mutex<Option<File>> = Mutex::new(None);
}

/// Opens the log file named by the config, if any. Safe to call repeatedly.
pub fn init(config: &Config) -> io::Result<()> {
    match &config.log_path {
        Some(path) => init_at(path),
        None => Ok(()),
    }
}

pub fn init_at(path: &Path) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    install(&LOGGER, file)
}

fn install(slot: &Mutex<Option<File>>, file: File) -> io::Result<()> {
    let mut logger = slot
        .lock()
        .map_err(|_| io::Error::other("logger lock poisoned"))?;
    *logger = Some(file);
    Ok(())
}

pub fn log(message: &str) {
    if let Ok(mut logger) = LOGGER.lock()
        && let Some(file) = logger.as_mut()
    {
        let timestamp = chrono::Local::now().format(TIMESTAMP_FORMAT);
        let _ = writeln!(file, "[{}] {}", timestamp, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_without_init_is_noop() {
        log("nobody is listening");
    }

    #[test]
    fn test_disabled_config_does_not_open_file() {
        let config = Config { log_path: None };
        assert!(init(&config).is_ok());
    }

    #[test]
    fn test_logger_writes_timestamped_lines() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("angulator.log");
        init_at(&path).unwrap();
        log("solved angle pair");

        let content = std::fs::read_to_string(&path).unwrap();
        let line = content
            .lines()
            .find(|l| l.ends_with("solved angle pair"))
            .unwrap();
        assert!(line.starts_with('['));
        assert!(line.contains("] "));
    }

    #[test]
    fn test_install_reports_poisoned_lock() {
        let slot = std::sync::Arc::new(Mutex::<Option<File>>::new(None));
        let poisoner = std::sync::Arc::clone(&slot);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.lock().unwrap();
            panic!("poison the logger slot");
        })
        .join();

        let temp_dir = tempfile::tempdir().unwrap();
        let file = File::create(temp_dir.path().join("angulator.log")).unwrap();
        let err = install(&slot, file).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Other);
    }
}
