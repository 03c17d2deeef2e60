//! Workspace file operations.
//!
//! Every operation resolves paths against a single root directory and
//! returns a [`FileOpOutcome`] instead of a Rust error: caller-input
//! problems are caught before touching the filesystem, a missing target is
//! a distinguished case, and any other I/O failure is reported with the
//! underlying message. Nothing here panics or propagates.

use std::fs;
use std::io::{ErrorKind, Write as _};
use std::path::{Path, PathBuf};

use globset::GlobBuilder;
use tracing::warn;

/// Suffix that marks a file as OpenSCAD source for cosmetic labeling.
pub const SCAD_SUFFIX: &str = ".scad";

/// Classification for failed file operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// A required argument was blank; the filesystem was never touched.
    InvalidInput,
    /// The target file does not exist.
    NotFound,
    /// Any other filesystem failure (permissions, disk, encoding).
    Io,
}

/// Outcome of a single file operation, rendered to text only at the tool
/// boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOpOutcome {
    /// The operation completed; the message already carries its lead marker.
    Success(String),
    /// The operation was refused to protect existing data.
    Warning(String),
    /// The operation failed.
    Failure { kind: FailureKind, message: String },
}

impl FileOpOutcome {
    fn invalid(message: impl Into<String>) -> Self {
        Self::Failure {
            kind: FailureKind::InvalidInput,
            message: message.into(),
        }
    }

    fn not_found(message: impl Into<String>) -> Self {
        Self::Failure {
            kind: FailureKind::NotFound,
            message: message.into(),
        }
    }

    fn io(message: impl Into<String>) -> Self {
        Self::Failure {
            kind: FailureKind::Io,
            message: message.into(),
        }
    }

    /// The failure classification, if this outcome is a failure.
    #[must_use]
    pub const fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            Self::Success(_) | Self::Warning(_) => None,
            Self::Failure { kind, .. } => Some(*kind),
        }
    }

    /// Renders the outcome as the marker-prefixed text the protocol carries.
    #[must_use]
    pub fn render(self) -> String {
        match self {
            Self::Success(text) => text,
            Self::Warning(text) => format!("⚠️ {text}"),
            Self::Failure { message, .. } => format!("❌ Error: {message}"),
        }
    }
}

/// A directory scope for file operations.
///
/// Paths passed to the operations are resolved relative to the root; the
/// default root is the process working directory.
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
}

impl Default for Workspace {
    fn default() -> Self {
        Self::current()
    }
}

impl Workspace {
    /// Creates a workspace rooted at the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Creates a workspace over the process working directory.
    #[must_use]
    pub fn current() -> Self {
        Self::new(".")
    }

    /// The workspace root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, filename: &str) -> PathBuf {
        self.root.join(filename)
    }

    /// Lists directory entries, optionally filtered by extension.
    ///
    /// A non-blank filter becomes the glob `*.<filter>`; otherwise every
    /// entry matches. Results are split into OpenSCAD files and the rest,
    /// sorted for deterministic output.
    #[must_use]
    pub fn list_files(&self, extension_filter: &str) -> FileOpOutcome {
        let filter = extension_filter.trim();
        let pattern = if filter.is_empty() {
            "*".to_string()
        } else {
            format!("*.{filter}")
        };

        let matcher = match GlobBuilder::new(&pattern).literal_separator(true).build() {
            Ok(glob) => glob.compile_matcher(),
            Err(err) => {
                warn!("invalid listing pattern '{pattern}': {err}");
                return FileOpOutcome::io(format!("Could not list files. {err}"));
            }
        };

        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(err) => {
                warn!("failed to enumerate {}: {err}", self.root.display());
                return FileOpOutcome::io(format!("Could not list files. {err}"));
            }
        };

        let mut names: Vec<String> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .filter(|name| matcher.is_match(name))
            .collect();
        names.sort_unstable();

        if names.is_empty() {
            return FileOpOutcome::Success(format!("📂 No files found with pattern '{pattern}'."));
        }

        let (scad_files, other_files): (Vec<String>, Vec<String>) =
            names.into_iter().partition(|name| name.ends_with(SCAD_SUFFIX));

        let mut output = String::from("📂 Files in directory:");
        if !scad_files.is_empty() {
            output.push_str("\n\n📐 OpenSCAD Files:\n- ");
            output.push_str(&scad_files.join("\n- "));
        }
        if !other_files.is_empty() {
            output.push_str("\n\n📄 Other Files:\n- ");
            output.push_str(&other_files.join("\n- "));
        }
        FileOpOutcome::Success(output)
    }

    /// Reads a file and frames its content between delimiter lines.
    #[must_use]
    pub fn read_file(&self, filename: &str) -> FileOpOutcome {
        if filename.trim().is_empty() {
            return FileOpOutcome::invalid("Filename is required.");
        }

        match fs::read_to_string(self.resolve(filename)) {
            Ok(content) => {
                let mut header =
                    format!("📄 File: {filename} ({} characters)", content.chars().count());
                if filename.ends_with(SCAD_SUFFIX) {
                    header.push_str(" 📐 OpenSCAD");
                }
                FileOpOutcome::Success(format!("{header}\n---\n{content}\n---"))
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                FileOpOutcome::not_found(format!("File '{filename}' not found."))
            }
            Err(err) => {
                warn!("failed to read '{filename}': {err}");
                FileOpOutcome::io(format!("Could not read file. {err}"))
            }
        }
    }

    /// Writes a file, refusing to replace an existing one unless `overwrite`
    /// is set.
    #[must_use]
    pub fn write_file(&self, filename: &str, content: &str, overwrite: bool) -> FileOpOutcome {
        if filename.trim().is_empty() {
            return FileOpOutcome::invalid("Filename is required.");
        }

        let path = self.resolve(filename);
        if path.exists() && !overwrite {
            return FileOpOutcome::Warning(format!(
                "Error: File '{filename}' already exists. To overwrite, set overwrite to 'true'."
            ));
        }

        match fs::write(&path, content) {
            Ok(()) => {
                let action = if overwrite { "overwritten" } else { "created" };
                FileOpOutcome::Success(format!(
                    "✅ Success: File '{filename}'{} was {action}.",
                    scad_tag(filename)
                ))
            }
            Err(err) => {
                warn!("failed to write '{filename}': {err}");
                FileOpOutcome::io(format!("Could not write to file. {err}"))
            }
        }
    }

    /// Appends content (preceded by a newline) to an existing file.
    ///
    /// Unlike [`Self::write_file`], blank content is rejected and a missing
    /// target is an error: append never creates a file implicitly.
    #[must_use]
    pub fn append_to_file(&self, filename: &str, content: &str) -> FileOpOutcome {
        if filename.trim().is_empty() || content.trim().is_empty() {
            return FileOpOutcome::invalid("Both filename and content are required.");
        }

        let append = fs::OpenOptions::new()
            .append(true)
            .open(self.resolve(filename))
            .and_then(|mut file| write!(file, "\n{content}"));

        match append {
            Ok(()) => FileOpOutcome::Success(format!(
                "✅ Success: Content appended to '{filename}'{}.",
                scad_tag(filename)
            )),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                FileOpOutcome::not_found(format!("File '{filename}' not found."))
            }
            Err(err) => {
                warn!("failed to append to '{filename}': {err}");
                FileOpOutcome::io(format!("Could not append to file. {err}"))
            }
        }
    }
}

fn scad_tag(filename: &str) -> &'static str {
    if filename.ends_with(SCAD_SUFFIX) {
        " 📐 OpenSCAD"
    } else {
        ""
    }
}
