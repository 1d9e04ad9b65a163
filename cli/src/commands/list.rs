use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::debug;
use seekpath::Resolver;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    /// One path per line
    Lines,
    /// NUL terminated paths, for `xargs -0`
    Null,
    /// Single json document
    Json,
}

pub(crate) struct ListOptions {
    pub recursive: bool,
    pub follow_links: bool,
    pub sort: bool,
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct Listing<'a> {
    count: usize,
    files: Vec<&'a str>,
}

pub(crate) fn command_list(paths: &[PathBuf], options: &ListOptions) -> Result<()> {
    let resolver = Resolver::new()
        .recursive(options.recursive)
        .follow_links(options.follow_links);
    debug!("{:?}", resolver);

    let mut files = resolver
        .resolve(paths)
        .context("got error while resolving input paths")?;

    if options.sort {
        files.sort();
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_files(&mut out, &files, options.format)?;
    out.flush().context("can't flush stdout")?;

    Ok(())
}

fn write_files<W: Write>(out: &mut W, files: &[PathBuf], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Lines => {
            for file in files {
                write_path(out, file, b'\n')?;
            }
        }
        OutputFormat::Null => {
            for file in files {
                write_path(out, file, b'\0')?;
            }
        }
        OutputFormat::Json => {
            // json can't carry raw bytes, refuse before anything reaches `out`
            let files = files
                .iter()
                .map(|file| {
                    file.to_str()
                        .with_context(|| format!("path is not valid UTF-8: {:?}", file))
                })
                .collect::<Result<Vec<_>>>()?;

            let listing = Listing {
                count: files.len(),
                files,
            };
            let mut buf =
                serde_json::to_vec_pretty(&listing).context("can't serialize file list")?;
            buf.push(b'\n');
            out.write_all(&buf)?;
        }
    }

    Ok(())
}

/// Writes the raw path bytes so non UTF-8 names survive for `xargs -0`
fn write_path<W: Write>(out: &mut W, path: &Path, terminator: u8) -> io::Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::ffi::OsStrExt;
        out.write_all(path.as_os_str().as_bytes())?;
    }
    #[cfg(not(unix))]
    write!(out, "{}", path.display())?;

    out.write_all(&[terminator])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(files: &[&str], format: OutputFormat) -> Vec<u8> {
        let files: Vec<PathBuf> = files.iter().map(PathBuf::from).collect();
        let mut out = Vec::new();
        write_files(&mut out, &files, format).unwrap();
        out
    }

    #[test]
    fn lines() {
        let out = render(&["a/1", "b/2"], OutputFormat::Lines);
        assert_eq!(out, b"a/1\nb/2\n");
    }

    #[test]
    fn null_separated() {
        let out = render(&["a/1", "b/2"], OutputFormat::Null);
        assert_eq!(out, b"a/1\0b/2\0");
    }

    #[test]
    fn json() {
        let out = render(&["a/1"], OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["count"], 1);
        assert_eq!(value["files"][0], "a/1");
    }

    #[cfg(unix)]
    #[test]
    fn raw_bytes_kept() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let files = vec![PathBuf::from(OsStr::from_bytes(b"dir/bad\xffname"))];

        let mut out = Vec::new();
        write_files(&mut out, &files, OutputFormat::Null).unwrap();
        assert_eq!(out, b"dir/bad\xffname\0");

        let mut out = Vec::new();
        write_files(&mut out, &files, OutputFormat::Lines).unwrap();
        assert_eq!(out, b"dir/bad\xffname\n");
    }

    #[cfg(unix)]
    #[test]
    fn json_rejects_non_utf8_without_output() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let files = vec![
            PathBuf::from("ok"),
            PathBuf::from(OsStr::from_bytes(b"bad\xffname")),
        ];

        let mut out = Vec::new();
        let err = write_files(&mut out, &files, OutputFormat::Json).unwrap_err();
        assert!(err.to_string().contains("not valid UTF-8"));
        assert!(out.is_empty());
    }
}
