use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use ischema_core::IndexEncoding;

#[derive(Parser, Debug)]
#[command(name = "ischema")]
#[command(
    about = "Compile /* SCHEMA */ interface blocks into JSON Schema (draft-07) files.",
    version
)]
pub(crate) struct Cli {
    /// Project root holding ischema.json (default: current directory)
    pub(crate) root: Option<PathBuf>,

    /// Write a starter ischema.json into the project root and exit
    #[arg(long)]
    pub(crate) init: bool,

    /// Where nested index signatures go (overrides ischema.json)
    #[arg(long, value_enum)]
    pub(crate) index_encoding: Option<IndexEncodingArg>,

    /// Debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum IndexEncodingArg {
    /// Root in `$comment`, nested objects in `description`
    Legacy,
    /// `$comment` at every level
    Uniform,
}

impl From<IndexEncodingArg> for IndexEncoding {
    fn from(arg: IndexEncodingArg) -> Self {
        match arg {
            IndexEncodingArg::Legacy => IndexEncoding::Legacy,
            IndexEncodingArg::Uniform => IndexEncoding::Uniform,
        }
    }
}
