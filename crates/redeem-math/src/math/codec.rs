//! JSON text form of a vector.
//!
//! ```text
//! {"kind":"dense","name":"v","size":3,"values":[1.0,0.0,2.0],"bindings":{"a":0}}
//! ```
//!
//! Views are written as the dense copy of their window, so decoding always
//! produces a `DenseVector`. JSON has no NaN or infinity; such slots are
//! written as `null` and the text will not decode.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::{CodecOptions, VectorKind};
use crate::error::{Result, VectorError};
use crate::math::dense::DenseVector;
use crate::math::vector::{LabelBindings, Vector};

#[derive(Serialize, Deserialize, Debug)]
struct VectorRecord {
    kind: VectorKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    size: usize,
    values: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    bindings: Option<BTreeMap<String, usize>>,
}

pub fn encode<V: Vector + ?Sized>(vector: &V) -> Result<String> {
    encode_with(vector, &CodecOptions::default())
}

pub fn encode_with<V: Vector + ?Sized>(vector: &V, options: &CodecOptions) -> Result<String> {
    let bindings: Option<BTreeMap<String, usize>> = if options.include_bindings {
        vector
            .label_bindings()
            .map(|b| b.iter().map(|(k, &v)| (k.clone(), v)).collect())
    } else {
        None
    };
    let record = VectorRecord {
        kind: VectorKind::Dense,
        name: vector.name().map(str::to_string),
        size: vector.size(),
        values: vector.iterate_all().map(|e| e.get()).collect(),
        bindings,
    };
    log::trace!(
        "encoding {} vector of size {} as dense",
        vector.kind(),
        record.size
    );
    let text = if options.pretty {
        serde_json::to_string_pretty(&record)?
    } else {
        serde_json::to_string(&record)?
    };
    Ok(text)
}

pub fn decode(text: &str) -> Result<DenseVector> {
    let record: VectorRecord = serde_json::from_str(text)?;
    if record.kind != VectorKind::Dense {
        log::debug!("refusing to decode a vector of kind {}", record.kind);
        return Err(VectorError::InvalidArgument(format!(
            "cannot decode a {} vector without its parent",
            record.kind
        )));
    }
    if record.values.len() != record.size {
        log::debug!(
            "decoded size {} disagrees with {} values",
            record.size,
            record.values.len()
        );
        return Err(VectorError::cardinality(record.size, record.values.len()));
    }
    let mut vector = DenseVector::from_vec(record.values);
    vector.set_name(record.name);
    vector.set_label_bindings(
        record
            .bindings
            .map(|b| b.into_iter().collect::<LabelBindings>()),
    );
    log::trace!("decoded dense vector of size {}", vector.size());
    Ok(vector)
}
