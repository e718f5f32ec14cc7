//! Plan execution engine.
//!
//! Applies a [`MirrorPlan`] to the local filesystem by creating every
//! planned directory.

use crate::error::Result;
use crate::path::{mkdir_parents, LocalFilesystem, PathLimits};

use super::plan::{MirrorPlan, PlanAction};

/// Default permission bits for created directories.
pub const DEFAULT_DIRECTORY_MODE: u32 = 0o755;

/// Result of executing a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorResult {
    /// Whether the execution was successful.
    pub success: bool,

    /// Whether this was a dry-run (no actual changes made).
    pub dry_run: bool,

    /// Number of directories actually created. Always zero for a dry run.
    pub directories_created: usize,

    /// Number of files recorded but not transferred.
    pub files_skipped: usize,

    /// Descriptions of actions that were taken (or would be taken in dry-run).
    pub actions_taken: Vec<String>,

    /// Warnings from the plan.
    pub warnings: Vec<String>,
}

impl MirrorResult {
    fn from_plan(plan: &MirrorPlan, dry_run: bool, directories_created: usize) -> Self {
        Self {
            success: true,
            dry_run,
            directories_created,
            files_skipped: plan.file_count(),
            actions_taken: plan.actions.iter().map(PlanAction::description).collect(),
            warnings: plan.warnings.clone(),
        }
    }
}

/// Executes mirror plans against a [`LocalFilesystem`].
///
/// # Examples
///
/// ```
/// use sftree::mirror::{MirrorExecutor, MirrorPlan, PlanAction};
/// use sftree::path::StdFilesystem;
///
/// let temp = tempfile::tempdir().unwrap();
/// let target = format!("{}/copy/docs", temp.path().display());
///
/// let plan = MirrorPlan {
///     description: "example".into(),
///     source_root: "/srv/docs".into(),
///     destination_root: target.clone(),
///     actions: vec![PlanAction::CreateDirectory {
///         source: "/srv/docs".into(),
///         destination: target.clone(),
///     }],
///     warnings: Vec::new(),
/// };
///
/// let mut fs = StdFilesystem;
/// let result = MirrorExecutor::new(&mut fs).dry_run().execute(&plan).unwrap();
/// assert!(result.dry_run);
/// assert!(!std::path::Path::new(&target).exists());
///
/// let result = MirrorExecutor::new(&mut fs).execute(&plan).unwrap();
/// assert_eq!(result.directories_created, 2);
/// assert!(std::path::Path::new(&target).is_dir());
/// ```
pub struct MirrorExecutor<'a, F: LocalFilesystem + ?Sized> {
    fs: &'a mut F,
    mode: u32,
    limits: PathLimits,
    dry_run: bool,
}

impl<'a, F: LocalFilesystem + ?Sized> MirrorExecutor<'a, F> {
    /// Creates a new executor with the default directory mode and limits.
    #[must_use]
    pub fn new(fs: &'a mut F) -> Self {
        Self {
            fs,
            mode: DEFAULT_DIRECTORY_MODE,
            limits: PathLimits::default(),
            dry_run: false,
        }
    }

    /// Sets the permission bits for created directories.
    #[must_use]
    pub const fn with_mode(mut self, mode: u32) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the limits used when splitting destination paths.
    #[must_use]
    pub const fn with_limits(mut self, limits: PathLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Sets the executor to dry-run mode.
    ///
    /// In dry-run mode the plan is reported but the filesystem is left
    /// untouched.
    #[must_use]
    pub const fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }

    /// Executes the given plan.
    ///
    /// # Errors
    ///
    /// Returns the first error from [`mkdir_parents`]. Directories created
    /// before the failure are left in place.
    pub fn execute(&mut self, plan: &MirrorPlan) -> Result<MirrorResult> {
        if self.dry_run {
            log::debug!("Dry run: {} actions not applied", plan.len());
            return Ok(MirrorResult::from_plan(plan, true, 0));
        }

        let mut created = 0;
        for action in &plan.actions {
            created += self.execute_action(action)?;
        }

        log::info!("{}: created {created} directories", plan.description);
        Ok(MirrorResult::from_plan(plan, false, created))
    }

    fn execute_action(&mut self, action: &PlanAction) -> Result<usize> {
        match action {
            PlanAction::CreateDirectory { destination, .. } => {
                mkdir_parents(&mut *self.fs, destination, self.mode, &self.limits)
            }
            PlanAction::SkipFile { source, .. } => {
                log::debug!("Not transferring {source}");
                Ok(0)
            }
        }
    }
}
