use std::path::Path;

use color_eyre::{eyre::eyre, Result};
use serde::Deserialize;

/// A single step of a recorded trail. Frames carry plain text only; how the
/// text was produced is the recorder's business.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Frame {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub lines: Vec<String>,
}

/// An ordered list of frames loaded from a trail file.
#[derive(Debug, Clone, Default)]
pub struct Trail {
    frames: Vec<Frame>,
}

impl Trail {
    /// Loads a trail from disk. Files ending in `.json` are parsed as an
    /// array of frames; everything else is treated as plain text with `---`
    /// separator lines.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| eyre!("Failed to read trail file {}: {e}", path.display()))?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => {
                let frames: Vec<Frame> = serde_json::from_str(&text)
                    .map_err(|e| eyre!("{} is not a valid JSON trail: {e}", path.display()))?;
                Ok(Self { frames })
            }
            _ => Ok(Self::parse_text(&text)),
        }
    }

    /// The trail shown when no file is given on the command line.
    pub fn demo() -> Self {
        Self::parse_text(include_str!("../.config/demo.trail"))
    }

    /// Splits plain text into frames on lines containing only `---`. A first
    /// line starting with `# ` becomes the frame title. Frames with neither a
    /// title nor content are dropped.
    pub(crate) fn parse_text(text: &str) -> Self {
        let mut frames = Vec::new();
        let mut title: Option<String> = None;
        let mut lines: Vec<String> = Vec::new();
        let mut flush = |title: &mut Option<String>, lines: &mut Vec<String>| {
            while lines.last().is_some_and(|l| l.trim().is_empty()) {
                lines.pop();
            }
            if title.is_some() || !lines.is_empty() {
                frames.push(Frame {
                    title: title.take(),
                    lines: std::mem::take(lines),
                });
            }
        };
        for raw in text.lines() {
            if raw.trim() == "---" {
                flush(&mut title, &mut lines);
            } else if title.is_none() && lines.is_empty() && raw.starts_with("# ") {
                title = Some(raw[2..].to_string());
            } else {
                lines.push(raw.to_string());
            }
        }
        flush(&mut title, &mut lines);
        Self { frames }
    }

    pub fn get(&self, idx: usize) -> Option<&Frame> {
        self.frames.get(idx)
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
