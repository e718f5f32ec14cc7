//! Plan types for mirroring a directory tree.
//!
//! A [`MirrorPlan`] is built by walking the source tree through a
//! [`DirectoryLister`]. It records what the executor would do at the
//! destination without touching the local filesystem.

use std::collections::VecDeque;

use crate::config::Config;
use crate::error::Result;
use crate::listing::{read_directory_with_limits, DirectoryLister};
use crate::path::{join_with_limits, PathLimits};

/// A single action to be taken when the plan is executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanAction {
    /// Create a directory (and any missing parents) at `destination`.
    CreateDirectory {
        /// Directory in the source tree.
        source: String,
        /// Where it lands in the destination tree.
        destination: String,
    },

    /// A regular file that is recorded but not transferred.
    SkipFile {
        /// File in the source tree.
        source: String,
        /// Where it would land in the destination tree.
        destination: String,
    },
}

impl PlanAction {
    /// Returns a human-readable description of this action.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::CreateDirectory {
                source,
                destination,
            } => format!("Create directory {destination} (from {source})"),
            Self::SkipFile {
                source,
                destination,
            } => format!("Skip file {source} (would be {destination})"),
        }
    }

    /// Returns the destination path of this action.
    #[must_use]
    pub fn destination(&self) -> &str {
        match self {
            Self::CreateDirectory { destination, .. } | Self::SkipFile { destination, .. } => {
                destination
            }
        }
    }
}

/// Options controlling how the source tree is walked.
///
/// # Examples
///
/// ```
/// use sftree::mirror::MirrorOptions;
///
/// let options = MirrorOptions::new()
///     .with_include_hidden(true)
///     .with_max_depth(Some(2));
///
/// assert!(options.include_hidden);
/// assert_eq!(options.max_depth, Some(2));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MirrorOptions {
    /// Walk into entries whose name starts with a `.`.
    pub include_hidden: bool,

    /// Number of directory levels below the root to read. `None` walks
    /// the whole tree; `Some(0)` only records the root.
    pub max_depth: Option<usize>,

    /// Limits applied to every path built during the walk.
    pub limits: PathLimits,
}

impl MirrorOptions {
    /// Creates options with every default in place.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds options from a resolved configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let mirror = config.effective_mirror();
        Self {
            include_hidden: mirror.include_hidden,
            max_depth: mirror.max_depth,
            limits: config.effective_limits(),
        }
    }

    /// Sets whether hidden entries are walked.
    #[must_use]
    pub const fn with_include_hidden(mut self, include_hidden: bool) -> Self {
        self.include_hidden = include_hidden;
        self
    }

    /// Sets the depth bound.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets the path limits.
    #[must_use]
    pub const fn with_limits(mut self, limits: PathLimits) -> Self {
        self.limits = limits;
        self
    }
}

/// A complete mirror plan.
#[derive(Debug, Clone)]
pub struct MirrorPlan {
    /// A human-readable description of the operation.
    pub description: String,

    /// Root of the source tree, as walked.
    pub source_root: String,

    /// Root of the destination tree.
    pub destination_root: String,

    /// Actions in breadth-first order. The first one always creates the
    /// destination root.
    pub actions: Vec<PlanAction>,

    /// Warnings to communicate to the user.
    pub warnings: Vec<String>,
}

impl MirrorPlan {
    /// Walks `source_root` breadth first and plans its mirror under
    /// `destination_root`.
    ///
    /// Dotted entries (`.` and `..`) are always skipped. Hidden entries are
    /// skipped unless [`MirrorOptions::include_hidden`] is set. Directories
    /// beyond [`MirrorOptions::max_depth`] are recorded but not read, and
    /// each one left unread adds a warning.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by [`read_directory_with_limits`] or
    /// by path joining. No partial plan is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use sftree::listing::LocalLister;
    /// use sftree::mirror::{MirrorOptions, MirrorPlan};
    ///
    /// let temp = tempfile::tempdir().unwrap();
    /// std::fs::create_dir(temp.path().join("docs")).unwrap();
    /// std::fs::write(temp.path().join("docs/readme.txt"), "hi").unwrap();
    ///
    /// let source = temp.path().display().to_string();
    /// let plan = MirrorPlan::build(&mut LocalLister, &source, "/backup", &MirrorOptions::new()).unwrap();
    ///
    /// assert_eq!(plan.directory_count(), 2);
    /// assert_eq!(plan.file_count(), 1);
    /// assert_eq!(plan.actions[1].destination(), "/backup/docs");
    /// ```
    pub fn build<L>(
        lister: &mut L,
        source_root: &str,
        destination_root: &str,
        options: &MirrorOptions,
    ) -> Result<Self>
    where
        L: DirectoryLister + ?Sized,
    {
        let limits = &options.limits;
        let source_root = clean_root(source_root, limits)?;
        let destination_root = clean_root(destination_root, limits)?;

        let mut plan = Self {
            description: format!("Mirror {source_root} to {destination_root}"),
            source_root: source_root.clone(),
            destination_root: destination_root.clone(),
            actions: Vec::new(),
            warnings: Vec::new(),
        };
        plan.actions.push(PlanAction::CreateDirectory {
            source: source_root.clone(),
            destination: destination_root.clone(),
        });

        let mut pending = VecDeque::from([(source_root, destination_root, 0_usize)]);
        while let Some((source_dir, destination_dir, depth)) = pending.pop_front() {
            if options.max_depth.is_some_and(|max| depth >= max) {
                log::debug!("Depth limit reached at {source_dir}");
                if depth > 0 {
                    plan.warnings
                        .push(format!("Not descending into {source_dir}: depth limit reached"));
                }
                continue;
            }

            let entries = read_directory_with_limits(lister, &source_dir, limits)?;
            for entry in &entries {
                if entry.is_dotted() {
                    continue;
                }
                if entry.is_hidden() && !options.include_hidden {
                    log::debug!("Skipping hidden entry {}", entry.path());
                    continue;
                }

                let destination =
                    join_with_limits([destination_dir.as_str(), entry.name()], limits)?;
                let source = entry.path().to_string();

                if entry.is_dir() {
                    plan.actions.push(PlanAction::CreateDirectory {
                        source: source.clone(),
                        destination: destination.clone(),
                    });
                    pending.push_back((source, destination, depth + 1));
                } else {
                    plan.actions.push(PlanAction::SkipFile {
                        source,
                        destination,
                    });
                }
            }
        }

        log::debug!(
            "Planned {} directories and {} files",
            plan.directory_count(),
            plan.file_count()
        );
        Ok(plan)
    }

    /// Adds a warning to the plan.
    #[must_use]
    pub fn add_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    /// Number of `CreateDirectory` actions.
    #[must_use]
    pub fn directory_count(&self) -> usize {
        self.actions
            .iter()
            .filter(|a| matches!(a, PlanAction::CreateDirectory { .. }))
            .count()
    }

    /// Number of `SkipFile` actions.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.actions.len() - self.directory_count()
    }

    /// Returns the number of actions in the plan.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Checks if the plan has no actions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

/// Clean a walk root; roots that clean to nothing (`""`, `"./"`) mean the
/// current directory.
fn clean_root(root: &str, limits: &PathLimits) -> Result<String> {
    let cleaned = join_with_limits([root], limits)?;
    if cleaned.is_empty() {
        Ok(".".to_string())
    } else {
        Ok(cleaned)
    }
}
