//! Accumulated discovery state for one linter invocation.

use std::path::PathBuf;

use crate::toxini::LintConfig;

/// Everything the dispatcher needs to run flake8 once.
///
/// Built by either the locator or the provisioner, then consumed by
/// value exactly once when the invocation is assembled. Ownership
/// transfer replaces the original's delete-after-read bookkeeping:
/// fields like `ignores` cannot be appended twice because the context
/// no longer exists after the first build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunContext {
    /// Project root to chdir into before launch, so flake8's own
    /// relative-path config discovery finds the project's tox.ini.
    /// `None` for the provisioned fallback environment.
    pub workdir: Option<PathBuf>,

    /// Root of the isolated environment holding the linter.
    pub env_root: PathBuf,

    /// The flake8 binary inside `env_root`.
    pub flake8: PathBuf,

    /// Project lint options, when a tox.ini was found next to the
    /// discovered environment.
    pub config: Option<LintConfig>,

    /// One-shot `--ignore=` value; empty means no flag.
    pub ignores: String,
}
