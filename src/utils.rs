use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub fn write_csv<I, R, W>(records: I, writer: W) -> anyhow::Result<()>
where
    I: IntoIterator<Item = R>,
    R: serde::Serialize,
    W: io::Write,
{
    let mut wtr = csv::Writer::from_writer(writer);
    for record in records.into_iter() {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write `bytes` to a sibling temporary file, then rename it onto `path`.
///
/// Either the whole file appears at `path` or nothing does.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let tmp = partial_path(path);
    let result = fs::write(&tmp, bytes).and_then(|()| fs::rename(&tmp, path));
    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    result
}

fn partial_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".partial");
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("bgtax-utils-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn atomic_write_replaces_file() {
        let dir = scratch_dir("replace");
        let path = dir.join("chart.png");
        fs::write(&path, b"old").unwrap();

        write_atomic(&path, b"new").unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"new");
        assert!(!partial_path(&path).exists());
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn atomic_write_into_missing_dir_fails_cleanly() {
        let dir = scratch_dir("missing");
        let path = dir.join("nope").join("chart.png");

        assert!(write_atomic(&path, b"data").is_err());
        assert!(!path.exists());
        assert!(!partial_path(&path).exists());
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn csv_has_header() {
        #[derive(serde::Serialize)]
        struct Row {
            a: u32,
            b: &'static str,
        }
        let mut out = Vec::new();
        write_csv([Row { a: 1, b: "x" }, Row { a: 2, b: "y" }], &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "a,b\n1,x\n2,y\n");
    }
}
