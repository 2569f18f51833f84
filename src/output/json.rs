//! JSON output formatting

use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;

use crate::tree::{Node, RenderContext, Totals, TreeOutput};

use super::config::OutputConfig;
use super::utils::date_text;

/// One element of the JSON document.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum JsonNode {
    Directory {
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        target: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        size: Option<u64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        time: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        error: Option<String>,
        contents: Vec<JsonNode>,
    },
    File {
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        target: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        size: Option<u64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        time: Option<String>,
    },
    Report {
        directories: usize,
        files: usize,
    },
}

impl JsonNode {
    fn from_node(node: &Node) -> Self {
        let name = node.label.clone();
        let target = node
            .symlink_target
            .as_ref()
            .map(|t| t.display().to_string());
        let size = node.size.found().copied();
        // A failed lookup is left out rather than written as "?".
        let time = node.modified.found().and(date_text(&node.modified));

        if node.is_dir {
            JsonNode::Directory {
                name,
                target,
                size,
                time,
                error: node.error.clone(),
                contents: Vec::new(),
            }
        } else {
            JsonNode::File {
                name,
                target,
                size,
                time,
            }
        }
    }
}

/// Buffers the walk into a `JsonNode` tree and writes it on `finish`.
pub struct JsonFormatter<W: Write> {
    config: OutputConfig,
    out: W,
    documents: Vec<JsonNode>,
    current: Option<JsonNode>,
    /// Open sibling lists; index 0 holds the current root's children.
    levels: Vec<Vec<JsonNode>>,
}

impl JsonFormatter<io::Stdout> {
    pub fn new(config: OutputConfig) -> Self {
        Self::with_writer(config, io::stdout())
    }
}

impl<W: Write> JsonFormatter<W> {
    pub fn with_writer(config: OutputConfig, out: W) -> Self {
        Self {
            config,
            out,
            documents: Vec::new(),
            current: None,
            levels: Vec::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Fold finished levels into their parent directory until `depth` levels remain.
    fn close_to(&mut self, depth: usize) {
        while self.levels.len() > depth {
            let Some(children) = self.levels.pop() else {
                break;
            };
            if let Some(JsonNode::Directory { contents, .. }) =
                self.levels.last_mut().and_then(|level| level.last_mut())
            {
                *contents = children;
            }
        }
    }
}

impl<W: Write> TreeOutput for JsonFormatter<W> {
    fn root(&mut self, path: &Path, error: Option<&str>) -> io::Result<()> {
        self.current = Some(JsonNode::Directory {
            name: path.display().to_string(),
            target: None,
            size: None,
            time: None,
            error: error.map(str::to_string),
            contents: Vec::new(),
        });
        self.levels = vec![Vec::new()];
        Ok(())
    }

    fn node(&mut self, node: &Node, ctx: &RenderContext, _is_last: bool) -> io::Result<()> {
        self.close_to(ctx.depth);
        if self.levels.len() < ctx.depth {
            self.levels.push(Vec::new());
        }
        if let Some(level) = self.levels.last_mut() {
            level.push(JsonNode::from_node(node));
        }
        Ok(())
    }

    fn end_root(&mut self) -> io::Result<()> {
        self.close_to(1);
        let children = self.levels.pop().unwrap_or_default();
        if let Some(mut root) = self.current.take() {
            if let JsonNode::Directory { contents, .. } = &mut root {
                *contents = children;
            }
            self.documents.push(root);
        }
        Ok(())
    }

    fn finish(&mut self, totals: &Totals) -> io::Result<()> {
        if !self.config.no_report {
            self.documents.push(JsonNode::Report {
                directories: totals.directories,
                files: totals.files,
            });
        }
        serde_json::to_writer_pretty(&mut self.out, &self.documents).map_err(io::Error::other)?;
        writeln!(self.out)?;
        self.out.flush()
    }
}
