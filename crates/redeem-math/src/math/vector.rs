//! The vector contract shared by every storage strategy.
//!
//! Implementors supply a handful of storage primitives (`size`,
//! `get_quick`, `set_quick`, `iterate_non_zero`, `like_sized`,
//! `clone_vector`, name and label storage). Everything else is provided
//! here in terms of those primitives and may be overridden where the
//! storage allows a faster or more exact loop.
//!
//! Vectors carry no synchronization. A vector (and any view over it) must
//! only be mutated from one thread at a time; the length cache uses a
//! `Cell`, so vectors are `Send` but not `Sync`.
use std::cell::Cell;
use std::collections::HashMap;

use crate::config::VectorKind;
use crate::error::{Result, VectorError};
use crate::math::codec;
use crate::math::element::{Element, ElementMut};
use crate::math::equivalence;
use crate::math::functions::{BinaryFunction, UnaryFunction};
use crate::math::matrix::DenseMatrix;
use crate::math::view::VectorView;

/// Label to index aliases attached to a single vector instance.
pub type LabelBindings = HashMap<String, usize>;

/// Lazily computed `dot(self, self)`.
///
/// Every mutating primitive must call `invalidate`; the next read then
/// recomputes the value from scratch.
#[derive(Debug, Clone, Default)]
pub struct LengthSquaredCache {
    value: Cell<Option<f64>>,
}

impl LengthSquaredCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_compute<F>(&self, compute: F) -> f64
    where
        F: FnOnce() -> f64,
    {
        if let Some(cached) = self.value.get() {
            return cached;
        }
        let computed = compute();
        self.value.set(Some(computed));
        computed
    }

    pub fn invalidate(&self) {
        self.value.set(None);
    }

    pub fn is_valid(&self) -> bool {
        self.value.get().is_some()
    }
}

pub(crate) fn check_cardinality(expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(VectorError::cardinality(expected, actual));
    }
    Ok(())
}

fn dot_self<V: Vector + ?Sized>(v: &V) -> f64 {
    v.iterate_non_zero()
        .map(|e| e.get() * v.get_quick(e.index()))
        .sum()
}

pub trait Vector {
    /// Owned vector of the same storage family, returned by every
    /// copy-on-operation method.
    type Owned: Vector;

    fn size(&self) -> usize;

    /// Unchecked read. `index` must be below `size()`.
    fn get_quick(&self, index: usize) -> f64;

    /// Unchecked write. `index` must be below `size()`. Invalidates the
    /// length cache.
    fn set_quick(&mut self, index: usize, value: f64);

    /// Slots holding a non-zero value, ascending by index.
    fn iterate_non_zero(&self) -> Box<dyn Iterator<Item = Element> + '_>;

    /// Every slot exactly once, ascending by index.
    fn iterate_all(&self) -> Box<dyn Iterator<Item = Element> + '_> {
        Box::new((0..self.size()).map(move |i| Element::new(i, self.get_quick(i))))
    }

    /// Zero-filled vector of the given size in this storage family,
    /// carrying a copy of the label bindings.
    fn like_sized(&self, size: usize) -> Self::Owned;

    fn like(&self) -> Self::Owned {
        self.like_sized(self.size())
    }

    /// Deep copy of storage and label bindings. The name is shared.
    fn clone_vector(&self) -> Self::Owned;

    fn matrix_like(&self, rows: usize, cols: usize) -> DenseMatrix;

    fn kind(&self) -> VectorKind;

    /// Number of explicitly stored slots.
    fn num_nondefault_elements(&self) -> usize;

    fn name(&self) -> Option<&str>;

    fn set_name(&mut self, name: Option<String>);

    fn label_bindings(&self) -> Option<&LabelBindings>;

    fn label_bindings_mut(&mut self) -> &mut Option<LabelBindings>;

    fn set_label_bindings(&mut self, bindings: Option<LabelBindings>) {
        *self.label_bindings_mut() = bindings;
    }

    /// Storage that keeps a length cache exposes it here.
    fn length_cache(&self) -> Option<&LengthSquaredCache> {
        None
    }

    fn get(&self, index: usize) -> Result<f64> {
        if index >= self.size() {
            return Err(VectorError::Index {
                index,
                size: self.size(),
            });
        }
        Ok(self.get_quick(index))
    }

    fn set(&mut self, index: usize, value: f64) -> Result<()> {
        if index >= self.size() {
            return Err(VectorError::Index {
                index,
                size: self.size(),
            });
        }
        self.set_quick(index, value);
        Ok(())
    }

    /// Live handle on one slot.
    fn get_element(&mut self, index: usize) -> Result<ElementMut<'_, Self>> {
        if index >= self.size() {
            return Err(VectorError::Index {
                index,
                size: self.size(),
            });
        }
        Ok(ElementMut::new(self, index))
    }

    /// Live window over `[offset, offset + length)`.
    fn view_part(&mut self, offset: usize, length: usize) -> Result<VectorView<'_, Self>> {
        VectorView::new(self, offset, length)
    }

    /// Sum of `self[i] * x[i]` over the non-zero slots of `self`.
    fn dot<W: Vector + ?Sized>(&self, x: &W) -> Result<f64> {
        check_cardinality(self.size(), x.size())?;
        Ok(self
            .iterate_non_zero()
            .map(|e| e.get() * x.get_quick(e.index()))
            .sum())
    }

    fn plus_scalar(&self, x: f64) -> Self::Owned {
        let mut result = self.clone_vector();
        for i in 0..self.size() {
            result.set_quick(i, self.get_quick(i) + x);
        }
        result
    }

    fn plus<W: Vector + ?Sized>(&self, x: &W) -> Result<Self::Owned> {
        check_cardinality(self.size(), x.size())?;
        let mut result = self.clone_vector();
        for e in x.iterate_non_zero() {
            let i = e.index();
            result.set_quick(i, self.get_quick(i) + e.get());
        }
        Ok(result)
    }

    fn minus<W: Vector + ?Sized>(&self, x: &W) -> Result<Self::Owned> {
        check_cardinality(self.size(), x.size())?;
        let mut result = self.clone_vector();
        for e in x.iterate_non_zero() {
            let i = e.index();
            result.set_quick(i, self.get_quick(i) - e.get());
        }
        Ok(result)
    }

    fn times_scalar(&self, x: f64) -> Self::Owned {
        let mut result = self.clone_vector();
        for e in self.iterate_non_zero() {
            result.set_quick(e.index(), e.get() * x);
        }
        result
    }

    /// Elementwise product.
    fn times<W: Vector + ?Sized>(&self, x: &W) -> Result<Self::Owned> {
        check_cardinality(self.size(), x.size())?;
        let mut result = self.clone_vector();
        for e in self.iterate_non_zero() {
            let i = e.index();
            result.set_quick(i, e.get() * x.get_quick(i));
        }
        Ok(result)
    }

    fn divide(&self, x: f64) -> Self::Owned {
        let mut result = self.clone_vector();
        for e in self.iterate_non_zero() {
            result.set_quick(e.index(), e.get() / x);
        }
        result
    }

    fn assign_value(&mut self, value: f64) -> &mut Self {
        for i in 0..self.size() {
            self.set_quick(i, value);
        }
        self
    }

    fn assign_slice(&mut self, values: &[f64]) -> Result<&mut Self> {
        check_cardinality(self.size(), values.len())?;
        for (i, &value) in values.iter().enumerate() {
            self.set_quick(i, value);
        }
        Ok(self)
    }

    fn assign_from<W: Vector + ?Sized>(&mut self, other: &W) -> Result<&mut Self> {
        check_cardinality(self.size(), other.size())?;
        for i in 0..self.size() {
            self.set_quick(i, other.get_quick(i));
        }
        Ok(self)
    }

    fn assign_unary<F: UnaryFunction + ?Sized>(&mut self, function: &F) -> &mut Self {
        for i in 0..self.size() {
            let value = function.apply(self.get_quick(i));
            self.set_quick(i, value);
        }
        self
    }

    /// `self[i] = function(self[i], y)`
    fn assign_with_scalar<F: BinaryFunction + ?Sized>(&mut self, function: &F, y: f64) -> &mut Self {
        for i in 0..self.size() {
            let value = function.apply(self.get_quick(i), y);
            self.set_quick(i, value);
        }
        self
    }

    /// `self[i] = function(self[i], other[i])`
    fn assign_from_with<W, F>(&mut self, other: &W, function: &F) -> Result<&mut Self>
    where
        W: Vector + ?Sized,
        F: BinaryFunction + ?Sized,
    {
        check_cardinality(self.size(), other.size())?;
        for i in 0..self.size() {
            let value = function.apply(self.get_quick(i), other.get_quick(i));
            self.set_quick(i, value);
        }
        Ok(self)
    }

    /// `v[i] += self[i]` for the non-zero slots of `self`.
    fn add_to<W: Vector + ?Sized>(&self, v: &mut W) -> Result<()> {
        check_cardinality(self.size(), v.size())?;
        for e in self.iterate_non_zero() {
            let i = e.index();
            v.set_quick(i, v.get_quick(i) + e.get());
        }
        Ok(())
    }

    fn z_sum(&self) -> f64 {
        self.iterate_non_zero().map(|e| e.get()).sum()
    }

    /// Largest value over all slots; `f64::NEG_INFINITY` when empty and
    /// NaN when any slot is NaN.
    fn max_value(&self) -> f64 {
        (0..self.size())
            .map(|i| self.get_quick(i))
            .fold(f64::NEG_INFINITY, |max, value| {
                if value.is_nan() || value > max {
                    value
                } else {
                    max
                }
            })
    }

    /// First index holding the largest value; `None` when empty.
    fn max_value_index(&self) -> Option<usize> {
        let mut result = None;
        let mut max = f64::NEG_INFINITY;
        for i in 0..self.size() {
            let value = self.get_quick(i);
            if result.is_none() || value > max {
                max = value;
                result = Some(i);
            }
        }
        result
    }

    /// The `power`-norm. Infinity gives `max_value`, zero counts the
    /// non-zero slots.
    fn norm(&self, power: f64) -> Result<f64> {
        if power.is_nan() || power < 0.0 {
            return Err(VectorError::InvalidArgument(format!(
                "norm power must be >= 0, got {}",
                power
            )));
        }
        let value = if power.is_infinite() {
            self.max_value()
        } else if power == 2.0 {
            dot_self(self).sqrt()
        } else if power == 1.0 {
            self.z_sum()
        } else if power == 0.0 {
            self.iterate_non_zero().filter(|e| e.get() != 0.0).count() as f64
        } else {
            self.iterate_non_zero()
                .map(|e| e.get().powf(power))
                .sum::<f64>()
                .powf(1.0 / power)
        };
        Ok(value)
    }

    /// `self / sqrt(dot(self, self))`. Only non-zero slots are divided, so
    /// a zero vector comes back as zeros rather than NaN.
    fn normalize(&self) -> Self::Owned {
        let length = dot_self(self).sqrt();
        if length == 0.0 {
            log::warn!("normalizing a zero-length vector of size {}", self.size());
        }
        self.divide(length)
    }

    fn normalize_power(&self, power: f64) -> Result<Self::Owned> {
        let norm = self.norm(power)?;
        Ok(self.divide(norm))
    }

    fn get_length_squared(&self) -> f64 {
        match self.length_cache() {
            Some(cache) => cache.get_or_compute(|| dot_self(self)),
            None => dot_self(self),
        }
    }

    /// Squared distance accumulated over the non-zero slots of `self`
    /// only. Slots where `self` is zero and `v` is not are not counted;
    /// dense storage overrides this with a full scan.
    fn get_distance_squared<W: Vector + ?Sized>(&self, v: &W) -> Result<f64> {
        check_cardinality(self.size(), v.size())?;
        Ok(self
            .iterate_non_zero()
            .map(|e| {
                let diff = e.get() - v.get_quick(e.index());
                diff * diff
            })
            .sum())
    }

    /// Outer product: row `i` holds `other * self[i]`.
    fn cross<W: Vector + ?Sized>(&self, other: &W) -> DenseMatrix {
        log::trace!("building {}x{} outer product", self.size(), other.size());
        let mut result = self.matrix_like(self.size(), other.size());
        for row in 0..self.size() {
            let scale = self.get_quick(row);
            for e in other.iterate_non_zero() {
                result.set_quick(row, e.index(), e.get() * scale);
            }
        }
        result
    }

    fn hash_code(&self) -> i32 {
        equivalence::hash_code(self)
    }

    fn get_label(&self, label: &str) -> Result<f64> {
        let index = self
            .label_bindings()
            .and_then(|bindings| bindings.get(label).copied())
            .ok_or_else(|| VectorError::UnboundLabel(label.to_string()))?;
        self.get(index)
    }

    fn set_label(&mut self, label: &str, value: f64) -> Result<()> {
        let index = self
            .label_bindings()
            .and_then(|bindings| bindings.get(label).copied())
            .ok_or_else(|| VectorError::UnboundLabel(label.to_string()))?;
        self.set(index, value)
    }

    /// Bind `label` to `index` (last binding wins) and set the slot.
    fn bind_label(&mut self, label: &str, index: usize, value: f64) -> Result<()> {
        self.set(index, value)?;
        self.label_bindings_mut()
            .get_or_insert_with(LabelBindings::new)
            .insert(label.to_string(), index);
        Ok(())
    }

    fn as_format_string(&self) -> Result<String> {
        codec::encode(self)
    }
}
