//! # Treemark
//!
//! `treemark` walks a project directory once and produces a single markdown
//! artifact: an ASCII tree of the files and directories selected by glob
//! include/ignore patterns, optionally followed by the embedded contents of
//! selected files.
//!
//! Selection is declarative. A TOML configuration names the project root, the
//! output file, ignore/include pattern lists, an optional depth limit, and
//! the content patterns; the `treemark` binary loads it and writes the
//! artifact. The same pipeline is available as a library.
//!
//! Ignore patterns always win over include patterns. A directory-style
//! include pattern (trailing `/`) surfaces the named directory even when
//! nothing inside it matches on its own, and a content-matched file always
//! pulls its whole ancestor chain into the rendered tree.
//!
//! # Example
//!
//! ```no_run
//! use treemark::{ScanOptionsBuilder, generate};
//!
//! let options = ScanOptionsBuilder::new(".")
//!     .ignore_patterns(vec!["target/".into()])
//!     .content_patterns(vec!["*.rs".into()])
//!     .build();
//!
//! let snapshot = generate(&options).expect("scan failed");
//!
//! println!("{}", snapshot.tree);
//! for block in &snapshot.files {
//!     println!("embedded: {}", block.rel_path);
//! }
//! ```

mod config;
mod content;
mod engine;
mod error;
mod matcher;
mod model;
mod options;
mod output;
mod tree;

pub use config::{Config, Resolved, resolve_path};
pub use content::{ContentBlock, collect};
pub use engine::{Snapshot, generate, scan};
pub use error::TreemarkError;
pub use matcher::PatternSet;
pub use model::{ContentFile, DirNode, FileEntry, NodeId, ScanResult, Tree};
pub use options::{ScanOptions, ScanOptionsBuilder};
pub use output::{assemble, write_snapshot};
pub use tree::render_tree;
