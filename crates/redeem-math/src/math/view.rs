use std::sync::Arc;

use crate::config::VectorKind;
use crate::error::{Result, VectorError};
use crate::math::element::Element;
use crate::math::equivalence;
use crate::math::matrix::DenseMatrix;
use crate::math::vector::{LabelBindings, Vector};

/// Non-owning window over `[offset, offset + length)` of a parent vector.
///
/// Reads and writes go straight to the parent at the shifted index, so
/// they are visible through the parent as soon as the view is released.
/// The view keeps its own name and label bindings.
pub struct VectorView<'a, V: Vector + ?Sized> {
    parent: &'a mut V,
    offset: usize,
    length: usize,
    name: Option<Arc<str>>,
    bindings: Option<LabelBindings>,
}

impl<'a, V: Vector + ?Sized> VectorView<'a, V> {
    pub fn new(parent: &'a mut V, offset: usize, length: usize) -> Result<Self> {
        let size = parent.size();
        if length > size {
            return Err(VectorError::cardinality(size, length));
        }
        match offset.checked_add(length) {
            Some(end) if end <= size => {}
            _ => {
                return Err(VectorError::Index {
                    index: offset.saturating_add(length),
                    size,
                })
            }
        }
        Ok(Self {
            parent,
            offset,
            length,
            name: None,
            bindings: None,
        })
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn parent(&self) -> &V {
        &*self.parent
    }
}

impl<'a, V: Vector + ?Sized> Vector for VectorView<'a, V> {
    type Owned = V::Owned;

    fn size(&self) -> usize {
        self.length
    }

    fn get_quick(&self, index: usize) -> f64 {
        self.parent.get_quick(self.offset + index)
    }

    fn set_quick(&mut self, index: usize, value: f64) {
        self.parent.set_quick(self.offset + index, value);
    }

    fn iterate_non_zero(&self) -> Box<dyn Iterator<Item = Element> + '_> {
        let start = self.offset;
        let end = self.offset + self.length;
        Box::new(
            self.parent
                .iterate_non_zero()
                .skip_while(move |e| e.index() < start)
                .take_while(move |e| e.index() < end)
                .map(move |e| Element::new(e.index() - start, e.get())),
        )
    }

    /// Zeroed storage of the parent's family carrying the view's bindings.
    fn like_sized(&self, size: usize) -> Self::Owned {
        let mut vector = self.parent.like_sized(size);
        vector.set_label_bindings(self.bindings.clone());
        vector
    }

    /// Materialises the window into owned storage of the parent's family.
    fn clone_vector(&self) -> Self::Owned {
        let mut copy = self.parent.like_sized(self.length);
        for e in self.iterate_non_zero() {
            copy.set_quick(e.index(), e.get());
        }
        copy.set_name(self.name.as_deref().map(str::to_string));
        copy.set_label_bindings(self.bindings.clone());
        copy
    }

    fn matrix_like(&self, rows: usize, cols: usize) -> DenseMatrix {
        self.parent.matrix_like(rows, cols)
    }

    fn kind(&self) -> VectorKind {
        VectorKind::View
    }

    fn num_nondefault_elements(&self) -> usize {
        self.length
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
}

impl<'a, 'b, V, W> PartialEq<VectorView<'b, W>> for VectorView<'a, V>
where
    V: Vector + ?Sized,
    W: Vector + ?Sized,
{
    fn eq(&self, other: &VectorView<'b, W>) -> bool {
        equivalence::equivalent(self, other)
    }
}
