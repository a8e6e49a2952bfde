//! Declaration tokenizer: flattens a block into name + body tokens.

use crate::extract::Block;

/// A block split into its declaration parts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Declaration {
    /// Leading keyword, e.g. `interface`.
    pub keyword: String,
    /// Declared name.
    pub name: String,
    /// Tokens between the opening brace and the final closing brace.
    pub body: Vec<String>,
}

/// Split a block on spaces and slice out the declaration body.
///
/// Layout is `<keyword> <Name> { <body...> }`. Empty tokens produced by blank
/// lines or repeated spaces are skipped. A block too short to carry a body
/// yields an empty body; a block without a name yields an empty name.
#[must_use]
pub fn tokenize(block: &Block) -> Declaration {
    let tokens: Vec<&str> = block
        .lines()
        .iter()
        .flat_map(|line| line.split(' '))
        .filter(|token| !token.is_empty())
        .collect();

    let keyword = tokens.first().copied().unwrap_or_default().to_string();
    let name = tokens.get(1).copied().unwrap_or_default().to_string();
    let body = if tokens.len() > 3 {
        tokens[3..tokens.len() - 1]
            .iter()
            .map(ToString::to_string)
            .collect()
    } else {
        Vec::new()
    };

    Declaration {
        keyword,
        name,
        body,
    }
}
