//! Equality policies that work across storage strategies.
//!
//! `equivalent` compares values only. `strict_equivalence` also requires
//! the same storage kind and the same name. `hash_code` mixes the name,
//! the size and every non-zero slot; vectors that differ only by name are
//! value-equivalent but hash differently.
use crate::math::vector::Vector;

const PRIME: i32 = 31;

/// Same size and the same value at every index. Name and storage are
/// ignored.
pub fn equivalent<L, R>(left: &L, right: &R) -> bool
where
    L: Vector + ?Sized,
    R: Vector + ?Sized,
{
    left.size() == right.size() && (0..left.size()).all(|i| left.get_quick(i) == right.get_quick(i))
}

/// Same storage kind, same name (or both unnamed) and value-equivalent.
pub fn strict_equivalence<L, R>(left: &L, right: &R) -> bool
where
    L: Vector + ?Sized,
    R: Vector + ?Sized,
{
    left.kind() == right.kind() && left.name() == right.name() && equivalent(left, right)
}

fn name_hash(name: &str) -> i32 {
    name.encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(PRIME).wrapping_add(unit as i32))
}

pub fn hash_code<V: Vector + ?Sized>(vector: &V) -> i32 {
    let mut result = PRIME.wrapping_add(vector.name().map_or(0, name_hash));
    result = result.wrapping_mul(PRIME).wrapping_add(vector.size() as i32);
    for e in vector.iterate_non_zero() {
        let bits = e.get().to_bits() as i64;
        let folded = (bits ^ (bits >> 32)) as i32;
        result = result.wrapping_add((e.index() as i32).wrapping_mul(folded));
    }
    result
}
