//! Block extraction: collects the lines fenced by start/end markers.

use crate::config::GrammarConfig;

/// Trimmed lines captured between one start marker and its end marker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block {
    lines: Vec<String>,
}

impl Block {
    /// Build a block from already-normalized lines.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Captured lines in source order.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Whether nothing was captured between the markers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Extract every closed block from `text`.
///
/// Tabs become single spaces and carriage returns are removed before lines
/// are compared against the markers. A start marker seen while already
/// capturing is ignored, as is an end marker seen outside a block. A block
/// that is still open at the end of input is dropped.
#[must_use]
pub fn extract_blocks(text: &str, grammar: &GrammarConfig) -> Vec<Block> {
    let normalized = text.replace('\t', " ").replace('\r', "");

    let mut blocks = Vec::new();
    let mut current: Vec<String> = Vec::new();
    let mut capturing = false;

    for line in normalized.split('\n') {
        let trimmed = line.trim();
        if trimmed == grammar.start_marker {
            capturing = true;
        } else if trimmed == grammar.end_marker {
            if capturing {
                capturing = false;
                blocks.push(Block {
                    lines: std::mem::take(&mut current),
                });
            }
        } else if capturing {
            current.push(trimmed.to_string());
        }
    }

    if capturing {
        tracing::debug!(lines = current.len(), "dropping unterminated schema block");
    }

    blocks
}
