//! Binary value rendering.
//!
//! The decode order is a contract and is evaluated exactly as listed in
//! the step table:
//!
//! 1. NULL renders as the empty string.
//! 2. In a server runtime, a native byte buffer is decoded as text.
//! 3. Any byte array (a native buffer is also one) is decoded as UTF-8.
//! 4. Anything else is dumped as JSON.
//!
//! Invalid UTF-8 sequences decode to U+FFFD rather than failing.

use tracing::warn;

use super::RenderEnv;
use crate::core::value::RawValue;

/// One step of the blob decode chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlobStep {
    Null,
    NativeBuffer,
    ByteArray,
    StructuredDump,
}

struct Step {
    step: BlobStep,
    applies: fn(&RawValue<'_>, &RenderEnv) -> bool,
    decode: fn(&RawValue<'_>) -> String,
}

const BLOB_STEPS: [Step; 4] = [
    Step {
        step: BlobStep::Null,
        applies: is_null,
        decode: empty,
    },
    Step {
        step: BlobStep::NativeBuffer,
        applies: is_native_buffer,
        decode: decode_utf8,
    },
    Step {
        step: BlobStep::ByteArray,
        applies: is_byte_array,
        decode: decode_utf8,
    },
    Step {
        step: BlobStep::StructuredDump,
        applies: always,
        decode: structured_dump,
    },
];

/// Render a raw binary value.
pub fn render_blob(value: &RawValue<'_>, env: &RenderEnv) -> String {
    decode_blob(value, env).1
}

/// Run the decode chain, reporting which step produced the text.
pub fn decode_blob(value: &RawValue<'_>, env: &RenderEnv) -> (BlobStep, String) {
    for step in &BLOB_STEPS {
        if (step.applies)(value, env) {
            return (step.step, (step.decode)(value));
        }
    }
    // The final step accepts everything.
    (BlobStep::StructuredDump, structured_dump(value))
}

/// Names of the chain's steps, in evaluation order.
pub fn decode_order() -> [BlobStep; 4] {
    BLOB_STEPS.map(|s| s.step)
}

fn is_null(value: &RawValue<'_>, _env: &RenderEnv) -> bool {
    value.is_null()
}

fn is_native_buffer(value: &RawValue<'_>, env: &RenderEnv) -> bool {
    env.server_runtime && matches!(value, RawValue::Buffer(_))
}

fn is_byte_array(value: &RawValue<'_>, _env: &RenderEnv) -> bool {
    matches!(value, RawValue::Buffer(_) | RawValue::Bytes(_))
}

fn always(_value: &RawValue<'_>, _env: &RenderEnv) -> bool {
    true
}

fn empty(_value: &RawValue<'_>) -> String {
    String::new()
}

fn decode_utf8(value: &RawValue<'_>) -> String {
    match value {
        RawValue::Buffer(bytes) => String::from_utf8_lossy(bytes).into_owned(),
        RawValue::Bytes(bytes) => String::from_utf8_lossy(bytes).into_owned(),
        other => other.to_string(),
    }
}

fn structured_dump(value: &RawValue<'_>) -> String {
    match serde_json::to_string(value) {
        Ok(json) => json,
        Err(e) => {
            warn!(value = %value, error = %e, "Error dumping blob value");
            value.to_string()
        }
    }
}
