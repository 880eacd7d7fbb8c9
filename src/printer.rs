use std::fmt;
use std::time::Duration;

use termcolor::{Color, ColorSpec, WriteColor};

use crate::evaluate::EmptyDir;

pub enum Printable<'a> {
    Header { delete: bool },
    Error(String),
    Stats(Stats),
    EmptyDir(&'a EmptyDir),
}

pub trait Printer {
    /// Colored output when the stream supports it, plain lines otherwise.
    fn print(&self, printable: Printable, stream: &mut dyn WriteColor) -> std::io::Result<()> {
        if stream.supports_color() {
            let result = self.print_generic(&printable, stream);
            stream.reset()?;
            result
        } else {
            match printable {
                Printable::Header { delete } => writeln!(stream, "{}", header(delete)),
                Printable::Error(err) => writeln!(stream, "{}", err),
                Printable::Stats(stats) => writeln!(stream, "{}", stats),
                Printable::EmptyDir(dir) => writeln!(stream, "{}", dir.path.display()),
            }
        }
    }

    fn print_generic(
        &self,
        printable: &Printable,
        stream: &mut dyn WriteColor,
    ) -> std::io::Result<()> {
        match printable {
            Printable::Header { delete } => self.print_header(*delete, stream),
            Printable::Error(err) => self.print_error(err, stream),
            Printable::Stats(stats) => self.print_stats(stats, stream),
            Printable::EmptyDir(dir) => self.print_empty_dir(dir, stream),
        }
    }

    fn print_header(&self, delete: bool, stream: &mut dyn WriteColor) -> std::io::Result<()>;
    fn print_error(&self, err: &str, stream: &mut dyn WriteColor) -> std::io::Result<()>;
    fn print_stats(&self, stats: &Stats, stream: &mut dyn WriteColor) -> std::io::Result<()>;
    fn print_empty_dir(&self, dir: &EmptyDir, stream: &mut dyn WriteColor)
        -> std::io::Result<()>;
}

pub fn header(delete: bool) -> &'static str {
    if delete {
        "Empty directories (will be removed):"
    } else {
        "Empty directories:"
    }
}

pub struct TerminalPrinter;

impl Printer for TerminalPrinter {
    fn print_header(&self, delete: bool, stream: &mut dyn WriteColor) -> std::io::Result<()> {
        stream.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
        writeln!(stream, "{}", header(delete))
    }

    fn print_error(&self, err: &str, stream: &mut dyn WriteColor) -> std::io::Result<()> {
        stream.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
        writeln!(stream, "{}", err)
    }

    fn print_stats(&self, stats: &Stats, stream: &mut dyn WriteColor) -> std::io::Result<()> {
        stream.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
        writeln!(stream, "{}", stats)
    }

    fn print_empty_dir(
        &self,
        dir: &EmptyDir,
        stream: &mut dyn WriteColor,
    ) -> std::io::Result<()> {
        stream.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        let uri = format!("file://{}", dir.path.display());
        let link = Hyperlink {
            uri: &uri,
            id: None,
        };
        writeln!(stream, "{link}{}{link:#}", dir.path.display())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stats {
    pub empty_dirs: usize,
    pub scanned_dirs: usize,
    /// Set when deletion was requested.
    pub removed_dirs: Option<usize>,
    pub duration: Duration,
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.removed_dirs {
            Some(removed) => write!(
                f,
                "Removed {} of {} empty directories among {} scanned in {:?}",
                removed, self.empty_dirs, self.scanned_dirs, self.duration
            ),
            None => write!(
                f,
                "Found {} empty directories among {} scanned in {:?}",
                self.empty_dirs, self.scanned_dirs, self.duration
            ),
        }
    }
}

#[derive(Default, Debug, PartialEq, Clone)]
pub struct Hyperlink<'a> {
    uri: &'a str,
    id: Option<&'a str>,
}

const OSC8: &str = "\x1b]8";

/// string terminator
const ST: &str = "\x1b\\";

impl fmt::Display for Hyperlink<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let url = self.uri;
        if f.alternate() {
            // the alternate form closes the link
            write!(f, "{OSC8};;{ST}")
        } else if let Some(id) = self.id {
            write!(f, "{OSC8};id={id};{url}{ST}")
        } else {
            write!(f, "{OSC8};;{url}{ST}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluate::Emptiness;
    use std::path::PathBuf;
    use termcolor::{Ansi, NoColor};

    fn empty_dir() -> EmptyDir {
        EmptyDir {
            path: PathBuf::from("/tmp/a/b"),
            emptiness: Emptiness::Bare,
        }
    }

    #[test]
    fn test_plain_output() {
        let mut out = NoColor::new(Vec::new());
        let dir = empty_dir();
        TerminalPrinter
            .print(Printable::Header { delete: true }, &mut out)
            .unwrap();
        TerminalPrinter
            .print(Printable::EmptyDir(&dir), &mut out)
            .unwrap();
        let text = String::from_utf8(out.into_inner()).unwrap();
        assert_eq!(text, "Empty directories (will be removed):\n/tmp/a/b\n");
    }

    #[test]
    fn test_colored_output_links_the_path() {
        let mut out = Ansi::new(Vec::new());
        let dir = empty_dir();
        TerminalPrinter
            .print(Printable::EmptyDir(&dir), &mut out)
            .unwrap();
        let text = String::from_utf8(out.into_inner()).unwrap();
        assert!(text.contains("\x1b]8;;file:///tmp/a/b\x1b\\/tmp/a/b\x1b]8;;\x1b\\"));
    }

    #[test]
    fn test_stats_display() {
        let stats = Stats {
            empty_dirs: 3,
            scanned_dirs: 10,
            removed_dirs: None,
            duration: Duration::from_millis(5),
        };
        assert_eq!(
            stats.to_string(),
            "Found 3 empty directories among 10 scanned in 5ms"
        );
        let stats = Stats {
            removed_dirs: Some(3),
            ..stats
        };
        assert!(stats.to_string().starts_with("Removed 3 of 3 empty directories"));
    }

    #[test]
    fn test_hyperlink_with_id() {
        let link = Hyperlink {
            uri: "file:///x",
            id: Some("7"),
        };
        assert_eq!(link.to_string(), "\x1b]8;id=7;file:///x\x1b\\");
        assert_eq!(format!("{link:#}"), "\x1b]8;;\x1b\\");
    }
}
