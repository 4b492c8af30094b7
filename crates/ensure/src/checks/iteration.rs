//! Per-key and per-value constraints for containers
//!
//! [`IterationChecks`] extends [`LengthChecks`] with a key list and a value
//! list. The first key or value constraint installs one derived entry into
//! the parent list; that entry walks the container through a pair view bound
//! at construction and evaluates both lists against every pair, key first.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::ops::ControlFlow;

use crate::checks::length::{LengthChecks, Measure};
use crate::checks::list::CheckList;
use crate::foundation::{Result, Validate, ValidationErrors, ValidationOptions};

/// Visits every `(key, value)` pair of a container until the visitor breaks.
pub type PairView<T, K, V> = fn(&T, &mut dyn FnMut(&K, &V) -> ControlFlow<()>);

/// Index/element view of a slice.
pub fn slice_pairs<V>(items: &[V], visit: &mut dyn FnMut(&usize, &V) -> ControlFlow<()>) {
    for (index, item) in items.iter().enumerate() {
        if visit(&index, item).is_break() {
            return;
        }
    }
}

/// Key/value view of a hash map.
pub fn map_pairs<K, V, S>(
    map: &HashMap<K, V, S>,
    visit: &mut dyn FnMut(&K, &V) -> ControlFlow<()>,
) {
    for (key, value) in map {
        if visit(key, value).is_break() {
            return;
        }
    }
}

/// Length checks plus lazily installed key and value checks.
pub struct IterationChecks<K, V, T: ?Sized> {
    length: LengthChecks<T>,
    keys: CheckList<K>,
    values: CheckList<V>,
    view: PairView<T, K, V>,
    installed: bool,
}

impl<V> IterationChecks<usize, V, [V]> {
    /// Iteration checks over a slice, keyed by index.
    #[must_use]
    pub fn for_slice() -> Self {
        Self::new(slice_pairs::<V>)
    }
}

impl<K, V> IterationChecks<K, V, HashMap<K, V>> {
    /// Iteration checks over a hash map.
    #[must_use]
    pub fn for_map() -> Self {
        Self::new(map_pairs::<K, V, std::collections::hash_map::RandomState>)
    }
}

impl<K, V, T: ?Sized + Measure> IterationChecks<K, V, T> {
    /// Creates empty lists walking containers through `view`.
    #[must_use]
    pub fn new(view: PairView<T, K, V>) -> Self {
        Self {
            length: LengthChecks::new(),
            keys: CheckList::new(),
            values: CheckList::new(),
            view,
            installed: false,
        }
    }

    /// Length constraints of the container.
    pub fn length(&mut self) -> &mut LengthChecks<T> {
        &mut self.length
    }

    /// Appends a check on the container itself.
    pub fn append<F>(&mut self, check: F)
    where
        F: Fn(&T, &ValidationOptions) -> Result + Send + Sync + 'static,
    {
        self.length.append(check);
    }

    fn install(&mut self) {
        if self.installed {
            return;
        }
        tracing::trace!(slot = self.length.len(), "installing iteration check");
        self.length.install_iteration();
        self.installed = true;
    }

    /// Appends a check run against every key.
    pub fn add_key_check<F>(&mut self, check: F)
    where
        F: Fn(&K, &ValidationOptions) -> Result + Send + Sync + 'static,
    {
        self.install();
        self.keys.append(check);
    }

    /// Appends a check run against every value.
    pub fn add_value_check<F>(&mut self, check: F)
    where
        F: Fn(&V, &ValidationOptions) -> Result + Send + Sync + 'static,
    {
        self.install();
        self.values.append(check);
    }

    /// Runs a validator against every key.
    ///
    /// The validator's input only has to be borrowable from `K`, so a string
    /// validator works on `String` keys.
    pub fn add_key_validator<W>(&mut self, validator: W)
    where
        W: Validate + 'static,
        K: Borrow<W::Input>,
    {
        self.add_key_check(move |key: &K, options: &ValidationOptions| {
            validator.validate_with(key.borrow(), options)
        });
    }

    /// Runs a validator against every value, borrowed as its input type.
    pub fn add_value_validator<W>(&mut self, validator: W)
    where
        W: Validate + 'static,
        V: Borrow<W::Input>,
    {
        self.add_value_check(move |value: &V, options: &ValidationOptions| {
            validator.validate_with(value.borrow(), options)
        });
    }

    /// Number of entries in the parent list.
    pub fn len(&self) -> usize {
        self.length.len()
    }

    /// Returns true if no check of any kind has been registered.
    pub fn is_empty(&self) -> bool {
        self.length.is_empty()
    }

    /// Runs the parent list, walking pairs at the iteration slot.
    pub fn evaluate(&self, value: &T, options: &ValidationOptions) -> Result {
        self.length
            .evaluate_with_iteration(value, options, &|container, options| {
                self.evaluate_pairs(container, options)
            })
    }

    fn evaluate_pairs(&self, container: &T, options: &ValidationOptions) -> Result {
        if options.collect_all_errors() {
            let mut errors = ValidationErrors::new();
            (self.view)(container, &mut |key, value| {
                if let Err(e) = self.keys.evaluate(key, options) {
                    errors.append(e);
                }
                if let Err(e) = self.values.evaluate(value, options) {
                    errors.append(e);
                }
                ControlFlow::Continue(())
            });
            errors.into_result()
        } else {
            let mut outcome = Ok(());
            (self.view)(container, &mut |key, value| {
                match self
                    .keys
                    .evaluate(key, options)
                    .and_then(|()| self.values.evaluate(value, options))
                {
                    Ok(()) => ControlFlow::Continue(()),
                    Err(e) => {
                        outcome = Err(e);
                        ControlFlow::Break(())
                    }
                }
            });
            outcome
        }
    }
}

impl<K, V, T: ?Sized> std::fmt::Debug for IterationChecks<K, V, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IterationChecks")
            .field("length", &self.length)
            .field("keys", &self.keys)
            .field("values", &self.values)
            .field("installed", &self.installed)
            .finish_non_exhaustive()
    }
}
