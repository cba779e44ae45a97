//! Repo-local lint keeping the client's hexagonal layers apart.
//!
//! `client/src` is split into `domain` (entities, ports, the page-fetch use
//! case), `inbound` (list state, presentation, terminal rendering) and
//! `outbound` (HTTP transport and the TMDB adapters). Each layer has a rule
//! set naming the sibling layers and the external crates it may not reach.
//! Files at the crate root (`lib.rs`, `main.rs`, `config.rs`, `wiring.rs`)
//! form the composition root and are not checked.
//!
//! Run it with `cargo run -p architecture-lint`.

use std::collections::BTreeSet;
use std::fmt;
use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs::Dir;
use syn::visit::Visit;

/// Name the client library is imported under from its own binaries and tests.
const CLIENT_CRATE: &str = "popular_movies";

/// One boundary violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// File path relative to `client/src`.
    pub file: Utf8PathBuf,
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.file, self.message)
    }
}

/// Failure modes returned by the lint.
#[derive(Debug)]
pub enum ArchitectureLintError {
    /// Reading the source tree failed.
    Io(io::Error),
    /// A file path was not UTF-8.
    NonUtf8Path { path: String },
    /// A source file did not parse, or sat outside every layer.
    Parse { file: Utf8PathBuf, message: String },
    /// One or more boundary violations were found.
    Violations(Vec<Violation>),
}

impl fmt::Display for ArchitectureLintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "I/O error while linting architecture: {err}"),
            Self::NonUtf8Path { path } => write!(f, "source path is not UTF-8: {path}"),
            Self::Parse { file, message } => {
                write!(f, "failed to parse {file} while linting architecture: {message}")
            }
            Self::Violations(violations) => {
                writeln!(f, "Architecture boundary violations:")?;
                for violation in violations {
                    writeln!(f, "- {violation}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ArchitectureLintError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ArchitectureLintError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

/// A Rust source file to be linted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintSource {
    /// Path relative to `client/src`.
    pub file: Utf8PathBuf,
    pub contents: String,
}

impl LintSource {
    pub fn new(file: impl Into<Utf8PathBuf>, contents: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            contents: contents.into(),
        }
    }
}

/// Lint the client crate on disk.
///
/// `client_dir` is the `client/` directory at the repository root.
///
/// # Errors
///
/// Returns [`ArchitectureLintError::Violations`] when any layer breaks its
/// rules, or another variant when the sources cannot be read or parsed.
pub fn lint_client_sources(client_dir: &Utf8Path) -> Result<(), ArchitectureLintError> {
    let src = Dir::open_ambient_dir(client_dir.join("src"), ambient_authority())?;
    let mut sources = Vec::new();
    for layer in Layer::ALL {
        let Ok(layer_dir) = src.open_dir(layer.dir_name()) else {
            continue;
        };
        collect_sources(&layer_dir, Utf8Path::new(layer.dir_name()), &mut sources)?;
    }
    lint_sources(&sources)
}

/// Lint in-memory sources. Paths are relative to `client/src`.
///
/// # Errors
///
/// See [`lint_client_sources`].
pub fn lint_sources(sources: &[LintSource]) -> Result<(), ArchitectureLintError> {
    let mut violations = Vec::new();
    for source in sources {
        let layer = Layer::for_path(&source.file).ok_or_else(|| ArchitectureLintError::Parse {
            file: source.file.clone(),
            message: "file is not inside domain/, inbound/ or outbound/".to_owned(),
        })?;
        let parsed =
            syn::parse_file(&source.contents).map_err(|err| ArchitectureLintError::Parse {
                file: source.file.clone(),
                message: err.to_string(),
            })?;
        violations.extend(check_file(&source.file, layer, &parsed));
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ArchitectureLintError::Violations(violations))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layer {
    Domain,
    Inbound,
    Outbound,
}

/// What a layer may not import.
struct LayerRules {
    modules: &'static [&'static str],
    crates: &'static [&'static str],
}

const DOMAIN_RULES: LayerRules = LayerRules {
    modules: &["inbound", "outbound", "config", "wiring"],
    crates: &["reqwest", "url", "ortho_config", "clap", "tracing_subscriber"],
};

const INBOUND_RULES: LayerRules = LayerRules {
    modules: &["outbound", "config", "wiring"],
    crates: &["reqwest", "url", "ortho_config", "clap"],
};

const OUTBOUND_RULES: LayerRules = LayerRules {
    modules: &["inbound", "config", "wiring"],
    crates: &["ortho_config", "clap", "tracing_subscriber"],
};

impl Layer {
    const ALL: [Self; 3] = [Self::Domain, Self::Inbound, Self::Outbound];

    const fn dir_name(self) -> &'static str {
        match self {
            Self::Domain => "domain",
            Self::Inbound => "inbound",
            Self::Outbound => "outbound",
        }
    }

    const fn rules(self) -> &'static LayerRules {
        match self {
            Self::Domain => &DOMAIN_RULES,
            Self::Inbound => &INBOUND_RULES,
            Self::Outbound => &OUTBOUND_RULES,
        }
    }

    fn for_path(relative: &Utf8Path) -> Option<Self> {
        let first = relative.components().next()?.as_str();
        Self::ALL.into_iter().find(|layer| layer.dir_name() == first)
    }
}

fn check_file(file: &Utf8Path, layer: Layer, parsed: &syn::File) -> Vec<Violation> {
    let rules = layer.rules();
    let mut collector = PathCollector::default();
    collector.visit_file(parsed);

    let mut messages = BTreeSet::new();
    for segments in &collector.paths {
        if let Some(module) = internal_root(segments).filter(|root| forbids(rules.modules, root)) {
            messages.insert(format!(
                "{} module must not depend on crate::{module}",
                layer.dir_name()
            ));
        }
        if let Some(krate) = external_root(segments).filter(|root| forbids(rules.crates, root)) {
            messages.insert(format!(
                "{} module must not depend on external crate `{krate}`",
                layer.dir_name()
            ));
        }
    }

    messages
        .into_iter()
        .map(|message| Violation {
            file: file.to_owned(),
            message,
        })
        .collect()
}

fn forbids(names: &[&str], root: &str) -> bool {
    names.iter().any(|name| *name == root)
}

fn is_relative_segment(segment: &str) -> bool {
    matches!(segment, "crate" | "self" | "super")
}

/// Top-level client module a path refers to, if any.
fn internal_root(segments: &[String]) -> Option<&str> {
    let first = segments.first()?.as_str();
    if Layer::ALL.iter().any(|layer| layer.dir_name() == first) {
        return Some(first);
    }
    let index = if is_relative_segment(first) {
        segments
            .iter()
            .position(|segment| !is_relative_segment(segment))?
    } else if first == CLIENT_CRATE {
        1
    } else {
        return None;
    };
    segments.get(index).map(String::as_str)
}

fn external_root(segments: &[String]) -> Option<&str> {
    let root = segments.first()?.as_str();
    (!is_relative_segment(root) && root != CLIENT_CRATE).then_some(root)
}

#[derive(Default)]
struct PathCollector {
    paths: BTreeSet<Vec<String>>,
}

impl PathCollector {
    fn record_use_tree(&mut self, tree: &syn::UseTree, mut prefix: Vec<String>) {
        match tree {
            syn::UseTree::Path(path) => {
                prefix.push(path.ident.to_string());
                self.record_use_tree(&path.tree, prefix);
            }
            syn::UseTree::Name(name) => {
                prefix.push(name.ident.to_string());
                self.paths.insert(prefix);
            }
            syn::UseTree::Rename(rename) => {
                prefix.push(rename.ident.to_string());
                self.paths.insert(prefix);
            }
            syn::UseTree::Glob(_) => {
                prefix.push("*".to_owned());
                self.paths.insert(prefix);
            }
            syn::UseTree::Group(group) => {
                for item in &group.items {
                    self.record_use_tree(item, prefix.clone());
                }
            }
        }
    }
}

impl<'ast> Visit<'ast> for PathCollector {
    fn visit_path(&mut self, node: &'ast syn::Path) {
        // A lone identifier is a local binding or an item in scope, not a
        // crate reference; imports reach `record_use_tree` instead.
        if node.segments.len() > 1 || node.leading_colon.is_some() {
            let segments: Vec<String> = node
                .segments
                .iter()
                .map(|segment| segment.ident.to_string())
                .collect();
            self.paths.insert(segments);
        }
        syn::visit::visit_path(self, node);
    }

    fn visit_item_use(&mut self, node: &'ast syn::ItemUse) {
        self.record_use_tree(&node.tree, Vec::new());
    }
}

fn collect_sources(
    dir: &Dir,
    relative: &Utf8Path,
    sources: &mut Vec<LintSource>,
) -> Result<(), ArchitectureLintError> {
    for entry in dir.entries()? {
        let entry = entry?;
        let name = entry.file_name().into_string().map_err(|raw| {
            ArchitectureLintError::NonUtf8Path {
                path: format!("{relative}/{}", raw.to_string_lossy()),
            }
        })?;
        let path = relative.join(&name);
        if entry.file_type()?.is_dir() {
            collect_sources(&entry.open_dir()?, &path, sources)?;
        } else if path.extension() == Some("rs") {
            let contents = dir.read_to_string(&name)?;
            sources.push(LintSource::new(path, contents));
        }
    }
    Ok(())
}
