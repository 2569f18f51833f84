//! Streaming output formatter
//!
//! This module provides `StreamingFormatter` which writes the tree line by
//! line as the walker produces it.

use std::io::{self, Write};
use std::path::Path;

use termcolor::{BufferedStandardStream, Color, ColorChoice, ColorSpec, WriteColor};

use crate::tree::{Node, RenderContext, Totals, TreeOutput};

use super::config::OutputConfig;
use super::utils::{connector, date_text, size_text};

const OPEN_ERROR: &str = "[error opening dir]";

/// Console tree formatter. Writes to buffered stdout unless built with
/// `with_writer`.
pub struct StreamingFormatter<W: WriteColor = BufferedStandardStream> {
    config: OutputConfig,
    out: W,
}

impl StreamingFormatter<BufferedStandardStream> {
    pub fn new(config: OutputConfig) -> Self {
        let choice = if config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        Self::with_writer(config, BufferedStandardStream::stdout(choice))
    }
}

impl<W: WriteColor> StreamingFormatter<W> {
    pub fn with_writer(config: OutputConfig, out: W) -> Self {
        Self { config, out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_colored(&mut self, text: &str, spec: &ColorSpec) -> io::Result<()> {
        self.out.set_color(spec)?;
        write!(self.out, "{}", text)?;
        self.out.reset()
    }

    fn write_open_error(&mut self) -> io::Result<()> {
        write!(self.out, "  ")?;
        self.write_colored(OPEN_ERROR, ColorSpec::new().set_fg(Some(Color::Red)))
    }
}

fn label_color(node: &Node) -> Option<ColorSpec> {
    if node.symlink_target.is_some() {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Cyan)).set_bold(true);
        Some(spec)
    } else if node.is_dir {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Blue)).set_bold(true);
        Some(spec)
    } else {
        None
    }
}

impl<W: WriteColor> TreeOutput for StreamingFormatter<W> {
    fn root(&mut self, path: &Path, error: Option<&str>) -> io::Result<()> {
        let name = path.display().to_string();
        self.write_colored(
            &name,
            ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true),
        )?;
        if error.is_some() {
            self.write_open_error()?;
        }
        writeln!(self.out)
    }

    fn node(&mut self, node: &Node, ctx: &RenderContext, is_last: bool) -> io::Result<()> {
        write!(self.out, "{}{}", ctx.prefix, connector(is_last))?;

        if let Some(size) = size_text(&node.size, self.config.human_sizes) {
            write!(self.out, "[{}] ", size)?;
        }
        if let Some(date) = date_text(&node.modified) {
            write!(self.out, "[{}] ", date)?;
        }

        match label_color(node) {
            Some(spec) => self.write_colored(&node.label, &spec)?,
            None => write!(self.out, "{}", node.label)?,
        }

        if let Some(ref target) = node.symlink_target {
            write!(self.out, " -> {}", target.display())?;
        }
        if node.error.is_some() {
            self.write_open_error()?;
        }
        writeln!(self.out)
    }

    fn end_root(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    fn finish(&mut self, totals: &Totals) -> io::Result<()> {
        if !self.config.no_report {
            writeln!(self.out, "{}", totals.summary())?;
        }
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use termcolor::Buffer;

    use super::*;
    use crate::tree::Lookup;

    fn plain() -> StreamingFormatter<Buffer> {
        StreamingFormatter::with_writer(OutputConfig::default(), Buffer::no_color())
    }

    fn text(formatter: StreamingFormatter<Buffer>) -> String {
        String::from_utf8(formatter.into_inner().into_inner()).unwrap()
    }

    fn node(label: &str, is_dir: bool) -> Node {
        Node {
            label: label.to_string(),
            is_dir,
            symlink_target: None,
            size: Lookup::Skipped,
            modified: Lookup::Skipped,
            error: None,
        }
    }

    #[test]
    fn test_plain_tree_lines() {
        let mut f = plain();
        let root = RenderContext::root();
        f.root(Path::new("."), None).unwrap();
        f.node(&node("src", true), &root, false).unwrap();
        f.node(&node("main.rs", false), &root.child(false), true)
            .unwrap();
        f.node(&node("README", false), &root, true).unwrap();
        f.end_root().unwrap();
        f.finish(&Totals {
            directories: 1,
            files: 2,
        })
        .unwrap();

        assert_eq!(
            text(f),
            ".\n├── src\n│   └── main.rs\n└── README\n\n1 directory, 2 files.\n"
        );
    }

    #[test]
    fn test_size_and_symlink_annotations() {
        let mut f = plain();
        let mut n = node("link", true);
        n.size = Lookup::Found(4096);
        n.symlink_target = Some(PathBuf::from("../target"));
        f.node(&n, &RenderContext::root(), true).unwrap();

        assert_eq!(text(f), "└── [4096] link -> ../target\n");
    }

    #[test]
    fn test_human_size_and_failed_lookup() {
        let config = OutputConfig {
            human_sizes: true,
            ..Default::default()
        };
        let mut f = StreamingFormatter::with_writer(config, Buffer::no_color());
        let mut big = node("big.bin", false);
        big.size = Lookup::Found(3 * 1024 * 1024);
        let mut broken = node("broken", false);
        broken.size = Lookup::Failed;
        let root = RenderContext::root();
        f.node(&big, &root, false).unwrap();
        f.node(&broken, &root, true).unwrap();

        assert_eq!(text(f), "├── [3.0M] big.bin\n└── [?] broken\n");
    }

    #[test]
    fn test_error_annotations() {
        let mut f = plain();
        f.root(Path::new("missing"), Some("No such file or directory"))
            .unwrap();
        let mut locked = node("locked", true);
        locked.error = Some("Permission denied".to_string());
        f.node(&locked, &RenderContext::root(), true).unwrap();

        assert_eq!(
            text(f),
            "missing  [error opening dir]\n└── locked  [error opening dir]\n"
        );
    }

    #[test]
    fn test_no_report() {
        let config = OutputConfig {
            no_report: true,
            ..Default::default()
        };
        let mut f = StreamingFormatter::with_writer(config, Buffer::no_color());
        f.root(Path::new("."), None).unwrap();
        f.end_root().unwrap();
        f.finish(&Totals::new()).unwrap();

        assert_eq!(text(f), ".\n\n");
    }

    #[test]
    fn test_color_output_wraps_directories() {
        let config = OutputConfig {
            use_color: true,
            ..Default::default()
        };
        let mut f = StreamingFormatter::with_writer(config, Buffer::ansi());
        f.node(&node("dir", true), &RenderContext::root(), true)
            .unwrap();
        f.node(&node("file", false), &RenderContext::root(), true)
            .unwrap();

        let out = text(f);
        assert!(out.contains("\x1b["), "expected ANSI escapes: {:?}", out);
        assert!(out.contains("dir"));
        assert!(out.contains("└── file\n"));
    }
}
