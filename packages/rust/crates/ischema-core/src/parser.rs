//! Structural parser for declaration bodies.
//!
//! A flat state machine plus an explicit stack of open object frames. Each
//! `prop: {` pushes a frame, each `}` / `};` pops one and attaches it to the
//! frame beneath (or to the root once the stack is empty), so nesting depth
//! is limited only by the heap, never by the call stack.
//!
//! ```text
//!            "<name>:"                  "<type>;"
//!   None ─────────────────► FoundProp ───────────► None
//!    │                          │ "{"  (push frame)
//!    │ "[key:"                  └────────────────► None
//!    ▼        "<K>]:"              "<V>;"
//!   FoundIndex ──────► IndexValue ──────► None
//!
//!   None + "}" | "};"  pops the innermost frame
//! ```
//!
//! Tokens that do not fit the current state are skipped and leave the state
//! unchanged.

use crate::config::GrammarConfig;
use crate::extract::{Block, extract_blocks};
use crate::model::{IndexEntry, Interface, PropValue};
use crate::tokenize::{Declaration, tokenize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum ParseState {
    /// Expecting a property name, an index opener or a closing brace.
    #[default]
    None,
    /// Consumed the index opener; expecting `<K>]:`.
    FoundIndex,
    /// Expecting the index value type `<V>;`.
    IndexValue,
    /// Consumed `<name>:`; expecting `<type>;` or `{`.
    FoundProp,
}

/// Incremental parser building one [`Interface`] from body tokens.
#[derive(Debug)]
pub struct InterfaceParser<'g> {
    grammar: &'g GrammarConfig,
    root: Interface,
    frames: Vec<Interface>,
    state: ParseState,
    pending_name: String,
    index_key: Option<String>,
}

impl<'g> InterfaceParser<'g> {
    /// Start parsing the body of the declaration called `name`.
    pub fn new(name: impl Into<String>, grammar: &'g GrammarConfig) -> Self {
        Self {
            grammar,
            root: Interface::new(name),
            frames: Vec::new(),
            state: ParseState::None,
            pending_name: String::new(),
            index_key: None,
        }
    }

    /// Current nesting depth (0 while at the root level).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Consume one body token.
    pub fn feed(&mut self, token: &str) {
        match self.state {
            ParseState::None => self.on_none(token),
            ParseState::FoundIndex => match token.strip_suffix("]:") {
                Some(key) => {
                    self.index_key = Some(key.to_string());
                    self.state = ParseState::IndexValue;
                }
                None => self.skip(token),
            },
            ParseState::IndexValue => match token.strip_suffix(';') {
                Some(value) => {
                    let key = self.index_key.take().unwrap_or_default();
                    self.innermost().indices.push(IndexEntry::leaf(key, value));
                    self.state = ParseState::None;
                }
                None => self.skip(token),
            },
            ParseState::FoundProp => self.on_prop_value(token),
        }
    }

    /// Finish parsing and return the root interface.
    ///
    /// Frames that were opened but never closed are discarded.
    #[must_use]
    pub fn finish(self) -> Interface {
        if !self.frames.is_empty() {
            tracing::debug!(
                interface = %self.root.name,
                open = self.frames.len(),
                "discarding unclosed nested objects"
            );
        }
        self.root
    }

    fn on_none(&mut self, token: &str) {
        if let Some(name) = token.strip_suffix(':') {
            if name == self.grammar.index_opener {
                self.state = ParseState::FoundIndex;
            } else if name.is_empty() {
                self.skip(token);
            } else {
                self.pending_name = name.to_string();
                self.state = ParseState::FoundProp;
            }
        } else if token == "}" || token == "};" {
            match self.frames.pop() {
                Some(frame) => {
                    let name = frame.name.clone();
                    self.innermost().props.insert(name, PropValue::Nested(frame));
                }
                None => self.skip(token),
            }
        } else {
            self.skip(token);
        }
    }

    fn on_prop_value(&mut self, token: &str) {
        if token == "{" {
            let name = std::mem::take(&mut self.pending_name);
            self.frames.push(Interface::new(name));
            self.state = ParseState::None;
        } else if let Some(value) = token.strip_suffix(';') {
            let name = std::mem::take(&mut self.pending_name);
            self.innermost()
                .props
                .insert(name, PropValue::Leaf(value.to_string()));
            self.state = ParseState::None;
        } else {
            self.skip(token);
        }
    }

    /// Innermost open frame, or the root when no frame is open.
    fn innermost(&mut self) -> &mut Interface {
        match self.frames.last_mut() {
            Some(frame) => frame,
            None => &mut self.root,
        }
    }

    fn skip(&self, token: &str) {
        tracing::debug!(
            interface = %self.root.name,
            state = ?self.state,
            token,
            "ignoring unexpected token"
        );
    }
}

/// Parse a tokenized declaration into an interface tree.
#[must_use]
pub fn parse_declaration(declaration: &Declaration, grammar: &GrammarConfig) -> Interface {
    let mut parser = InterfaceParser::new(declaration.name.clone(), grammar);
    for token in &declaration.body {
        parser.feed(token);
    }
    parser.finish()
}

/// Tokenize and parse one extracted block.
#[must_use]
pub fn parse_block(block: &Block, grammar: &GrammarConfig) -> Interface {
    parse_declaration(&tokenize(block), grammar)
}

/// Extract, tokenize and parse every marked declaration in `text`.
#[must_use]
pub fn parse_source(text: &str, grammar: &GrammarConfig) -> Vec<Interface> {
    extract_blocks(text, grammar)
        .iter()
        .map(|block| parse_block(block, grammar))
        .collect()
}
