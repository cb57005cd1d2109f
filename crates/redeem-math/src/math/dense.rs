use std::fmt;
use std::iter::{FromIterator, FusedIterator};
use std::ops::{Index, IndexMut};
use std::sync::Arc;

use crate::config::VectorKind;
use crate::error::Result;
use crate::math::codec;
use crate::math::element::Element;
use crate::math::equivalence;
use crate::math::functions::BinaryFunction;
use crate::math::matrix::DenseMatrix;
use crate::math::vector::{check_cardinality, LabelBindings, LengthSquaredCache, Vector};
use crate::math::view::VectorView;

/// Vector backed by one contiguous array of `f64` slots.
#[derive(Debug, Clone, Default)]
pub struct DenseVector {
    values: Vec<f64>,
    name: Option<Arc<str>>,
    bindings: Option<LabelBindings>,
    length_squared: LengthSquaredCache,
}

impl DenseVector {
    /// Zero-filled vector of `size` slots.
    pub fn new(size: usize) -> Self {
        Self::from_vec(vec![0.0; size])
    }

    pub fn with_name(name: impl Into<String>, size: usize) -> Self {
        let mut vector = Self::new(size);
        vector.name = Some(Arc::from(name.into()));
        vector
    }

    /// Takes ownership of `values` without copying.
    pub fn from_vec(values: Vec<f64>) -> Self {
        Self {
            values,
            name: None,
            bindings: None,
            length_squared: LengthSquaredCache::new(),
        }
    }

    pub fn from_slice(values: &[f64]) -> Self {
        Self::from_vec(values.to_vec())
    }

    /// Dense copy of any vector, filled from its non-zero slots. The name
    /// is carried over; label bindings are not.
    pub fn from_vector<V: Vector + ?Sized>(vector: &V) -> Self {
        let mut values = vec![0.0; vector.size()];
        for e in vector.iterate_non_zero() {
            values[e.index()] = e.get();
        }
        let mut dense = Self::from_vec(values);
        dense.name = vector.name().map(Arc::from);
        dense
    }

    pub fn decode_vector(text: &str) -> Result<Self> {
        codec::decode(text)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Direct access to the slots. Drops the cached length.
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        self.length_squared.invalidate();
        &mut self.values
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.values.clone()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Vector for DenseVector {
    type Owned = DenseVector;

    fn size(&self) -> usize {
        self.values.len()
    }

    #[inline]
    fn get_quick(&self, index: usize) -> f64 {
        self.values[index]
    }

    #[inline]
    fn set_quick(&mut self, index: usize, value: f64) {
        self.length_squared.invalidate();
        self.values[index] = value;
    }

    fn iterate_non_zero(&self) -> Box<dyn Iterator<Item = Element> + '_> {
        Box::new(NonZeroIter::new(&self.values))
    }

    fn iterate_all(&self) -> Box<dyn Iterator<Item = Element> + '_> {
        Box::new(AllIter::new(&self.values))
    }

    fn like_sized(&self, size: usize) -> DenseVector {
        let mut vector = DenseVector::new(size);
        vector.bindings = self.bindings.clone();
        vector
    }

    fn clone_vector(&self) -> DenseVector {
        self.clone()
    }

    fn matrix_like(&self, rows: usize, cols: usize) -> DenseMatrix {
        DenseMatrix::zeros(rows, cols)
    }

    fn kind(&self) -> VectorKind {
        VectorKind::Dense
    }

    fn num_nondefault_elements(&self) -> usize {
        self.values.len()
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn set_name(&mut self, name: Option<String>) {
        self.name = name.map(Arc::from);
    }

    fn label_bindings(&self) -> Option<&LabelBindings> {
        self.bindings.as_ref()
    }

    fn label_bindings_mut(&mut self) -> &mut Option<LabelBindings> {
        &mut self.bindings
    }

    fn length_cache(&self) -> Option<&LengthSquaredCache> {
        Some(&self.length_squared)
    }

    fn assign_from_with<W, F>(&mut self, other: &W, function: &F) -> Result<&mut Self>
    where
        W: Vector + ?Sized,
        F: BinaryFunction + ?Sized,
    {
        check_cardinality(self.size(), other.size())?;
        self.length_squared.invalidate();
        if function.is_accumulating() {
            for e in other.iterate_non_zero() {
                let slot = &mut self.values[e.index()];
                *slot = function.apply(*slot, e.get());
            }
        } else {
            for (i, slot) in self.values.iter_mut().enumerate() {
                *slot = function.apply(*slot, other.get_quick(i));
            }
        }
        Ok(self)
    }

    fn add_to<W: Vector + ?Sized>(&self, v: &mut W) -> Result<()> {
        check_cardinality(self.size(), v.size())?;
        for (i, &value) in self.values.iter().enumerate() {
            v.set_quick(i, value + v.get_quick(i));
        }
        Ok(())
    }

    fn get_length_squared(&self) -> f64 {
        self.length_squared
            .get_or_compute(|| self.values.iter().map(|v| v * v).sum())
    }

    fn get_distance_squared<W: Vector + ?Sized>(&self, v: &W) -> Result<f64> {
        check_cardinality(self.size(), v.size())?;
        Ok(self
            .values
            .iter()
            .enumerate()
            .map(|(i, &value)| {
                let delta = value - v.get_quick(i);
                delta * delta
            })
            .sum())
    }
}

/// Walks the slots in order, skipping exact zeros.
pub struct NonZeroIter<'a> {
    values: &'a [f64],
    offset: usize,
}

impl<'a> NonZeroIter<'a> {
    fn new(values: &'a [f64]) -> Self {
        let mut iter = Self { values, offset: 0 };
        iter.skip_zeros();
        iter
    }

    fn skip_zeros(&mut self) {
        while self.offset < self.values.len() && self.values[self.offset] == 0.0 {
            self.offset += 1;
        }
    }
}

impl<'a> Iterator for NonZeroIter<'a> {
    type Item = Element;

    fn next(&mut self) -> Option<Element> {
        if self.offset >= self.values.len() {
            return None;
        }
        let element = Element::new(self.offset, self.values[self.offset]);
        self.offset += 1;
        self.skip_zeros();
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.values.len() - self.offset;
        (remaining.min(1), Some(remaining))
    }
}

impl<'a> FusedIterator for NonZeroIter<'a> {}

pub struct AllIter<'a> {
    values: &'a [f64],
    offset: usize,
}

impl<'a> AllIter<'a> {
    fn new(values: &'a [f64]) -> Self {
        Self { values, offset: 0 }
    }
}

impl<'a> Iterator for AllIter<'a> {
    type Item = Element;

    fn next(&mut self) -> Option<Element> {
        let value = *self.values.get(self.offset)?;
        let element = Element::new(self.offset, value);
        self.offset += 1;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.values.len() - self.offset;
        (remaining, Some(remaining))
    }
}

impl<'a> ExactSizeIterator for AllIter<'a> {}

impl<'a> FusedIterator for AllIter<'a> {}

/// Same size, same name (or both unnamed) and bit-identical slots, so a
/// NaN slot equals itself and `0.0 != -0.0`.
impl PartialEq for DenseVector {
    fn eq(&self, other: &DenseVector) -> bool {
        self.name == other.name
            && self.values.len() == other.values.len()
            && self
                .values
                .iter()
                .zip(&other.values)
                .all(|(a, b)| a.to_bits() == b.to_bits())
    }
}

/// Against other storage only the values are compared.
impl<'a, V: Vector + ?Sized> PartialEq<VectorView<'a, V>> for DenseVector {
    fn eq(&self, other: &VectorView<'a, V>) -> bool {
        equivalence::equivalent(self, other)
    }
}

impl<'a, V: Vector + ?Sized> PartialEq<DenseVector> for VectorView<'a, V> {
    fn eq(&self, other: &DenseVector) -> bool {
        equivalence::equivalent(self, other)
    }
}

impl From<Vec<f64>> for DenseVector {
    fn from(values: Vec<f64>) -> Self {
        DenseVector::from_vec(values)
    }
}

impl From<DenseVector> for Vec<f64> {
    fn from(vector: DenseVector) -> Self {
        vector.values
    }
}

impl FromIterator<f64> for DenseVector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        DenseVector::from_vec(iter.into_iter().collect())
    }
}

impl Index<usize> for DenseVector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.values[index]
    }
}

impl IndexMut<usize> for DenseVector {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        self.length_squared.invalidate();
        &mut self.values[index]
    }
}

impl fmt::Display for DenseVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.name {
            write!(f, "{}:", name)?;
        }
        write!(f, "[")?;
        for (idx, value) in self.values.iter().enumerate() {
            write!(f, "{}", value)?;
            if idx + 1 != self.values.len() {
                write!(f, ", ")?;
            }
        }
        write!(f, "]")
    }
}
