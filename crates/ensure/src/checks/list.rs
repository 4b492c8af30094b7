//! Ordered check lists with fail-fast and collect-all evaluation

use std::fmt;

use smallvec::SmallVec;

use crate::foundation::{Result, ValidationErrors, ValidationOptions};

/// A single predicate over a value.
///
/// Stateless apart from the constants it closes over. Returns the violated
/// constraint, if any.
pub type Check<T> = Box<dyn Fn(&T, &ValidationOptions) -> Result + Send + Sync>;

/// Checks that an extension installs into its parent list at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Derived {
    /// Evaluate the nested length list against the value's element count.
    Length,
    /// Walk the value's key/value pairs.
    Iteration,
}

enum Step<T: ?Sized> {
    Check(Check<T>),
    Derived(Derived),
}

/// An append-only, ordered collection of checks for one value type.
///
/// # Evaluation
///
/// Checks run in insertion order. In fail-fast mode the first error is
/// returned and later checks never run; in collect-all mode every check runs
/// and failures are gathered into one [`ValidationErrors`].
///
/// # Examples
///
/// ```
/// use ensure::checks::CheckList;
/// use ensure::foundation::{Error, ValidationOptions};
///
/// let mut checks = CheckList::<i32>::new();
/// checks.append(|n, _| if *n > 0 { Ok(()) } else { Err(Error::validation("not positive")) });
/// checks.append(|n, _| if n % 2 == 0 { Ok(()) } else { Err(Error::validation("not even")) });
///
/// assert!(checks.evaluate(&4, &ValidationOptions::new()).is_ok());
///
/// let err = checks.evaluate(&-3, &ValidationOptions::collect_all()).unwrap_err();
/// assert_eq!(err.into_aggregate().len(), 2);
/// ```
pub struct CheckList<T: ?Sized> {
    steps: SmallVec<[Step<T>; 4]>,
}

impl<T: ?Sized> CheckList<T> {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            steps: SmallVec::new(),
        }
    }

    /// Appends a check to the end of the list.
    pub fn append<F>(&mut self, check: F)
    where
        F: Fn(&T, &ValidationOptions) -> Result + Send + Sync + 'static,
    {
        self.steps.push(Step::Check(Box::new(check)));
    }

    /// Number of entries, derived ones included.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns true if nothing has been appended.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Runs the checks against `value`.
    pub fn evaluate(&self, value: &T, options: &ValidationOptions) -> Result {
        self.evaluate_with(value, options, &|_, _, _| Ok(()))
    }

    pub(crate) fn install(&mut self, derived: Derived) {
        self.steps.push(Step::Derived(derived));
    }

    /// Runs the checks, resolving derived entries through `derived`.
    pub(crate) fn evaluate_with(
        &self,
        value: &T,
        options: &ValidationOptions,
        derived: &dyn Fn(Derived, &T, &ValidationOptions) -> Result,
    ) -> Result {
        let run = |step: &Step<T>| match step {
            Step::Check(check) => check(value, options),
            Step::Derived(kind) => derived(*kind, value, options),
        };

        if options.collect_all_errors() {
            let mut errors = ValidationErrors::new();
            for step in &self.steps {
                if let Err(e) = run(step) {
                    errors.append(e);
                }
            }
            errors.into_result()
        } else {
            self.steps.iter().try_for_each(run)
        }
    }
}

impl<T: ?Sized> Default for CheckList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> fmt::Debug for CheckList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let derived: Vec<Derived> = self
            .steps
            .iter()
            .filter_map(|step| match step {
                Step::Derived(kind) => Some(*kind),
                Step::Check(_) => None,
            })
            .collect();

        f.debug_struct("CheckList")
            .field("len", &self.steps.len())
            .field("derived", &derived)
            .finish()
    }
}
