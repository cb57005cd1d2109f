use crate::math::vector::Vector;

/// One `(index, value)` slot yielded by vector iteration.
///
/// Iterators hand out a fresh copy per step, so an `Element` may be kept
/// after the iterator advances. It does not observe later writes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Element {
    index: usize,
    value: f64,
}

impl Element {
    pub fn new(index: usize, value: f64) -> Self {
        Self { index, value }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn get(&self) -> f64 {
        self.value
    }
}

impl From<(usize, f64)> for Element {
    fn from((index, value): (usize, f64)) -> Self {
        Element::new(index, value)
    }
}

/// Live handle bound to one slot of a vector; `set` writes through to the
/// backing storage.
pub struct ElementMut<'a, V: Vector + ?Sized> {
    vector: &'a mut V,
    index: usize,
}

impl<'a, V: Vector + ?Sized> ElementMut<'a, V> {
    /// `index` must already be validated against `vector.size()`.
    pub(crate) fn new(vector: &'a mut V, index: usize) -> Self {
        Self { vector, index }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn get(&self) -> f64 {
        self.vector.get_quick(self.index)
    }

    pub fn set(&mut self, value: f64) {
        self.vector.set_quick(self.index, value);
    }
}
