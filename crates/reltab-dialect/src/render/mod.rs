//! Value-to-display-string rendering, one function per canonical kind.
//!
//! Every function in the table is total: it returns text for any input and
//! logs (rather than returns) conversion problems.

pub mod blob;
pub mod timestamp;

use std::sync::OnceLock;

use crate::core::value::RawValue;
use crate::dialect::ColumnKind;

pub use blob::{render_blob, BlobStep};
pub use timestamp::{format_epoch_millis, render_timestamp};

/// Signature shared by all renderers.
pub type RenderFn = fn(&RawValue<'_>, &RenderEnv) -> String;

/// Runtime capabilities that influence rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderEnv {
    /// Running in a server-side runtime whose drivers return native byte buffers.
    pub server_runtime: bool,
}

impl RenderEnv {
    /// Server-side runtime.
    pub const SERVER: RenderEnv = RenderEnv {
        server_runtime: true,
    };

    /// Browser-like runtime without native buffers.
    pub const BROWSER: RenderEnv = RenderEnv {
        server_runtime: false,
    };

    /// Detect the environment from the compilation target.
    pub fn detect() -> Self {
        RenderEnv {
            server_runtime: !cfg!(target_arch = "wasm32"),
        }
    }

    /// Process-wide environment, detected once.
    pub fn current() -> &'static RenderEnv {
        static CURRENT: OnceLock<RenderEnv> = OnceLock::new();
        CURRENT.get_or_init(RenderEnv::detect)
    }
}

impl Default for RenderEnv {
    fn default() -> Self {
        Self::detect()
    }
}

/// Look up the standard renderer for a kind.
pub fn renderer_for(kind: ColumnKind) -> RenderFn {
    match kind {
        ColumnKind::Integer | ColumnKind::Real | ColumnKind::String | ColumnKind::Boolean => {
            render_default
        }
        ColumnKind::Timestamp => render_timestamp,
        ColumnKind::Blob => render_blob,
    }
}

/// Generic stringification.
pub fn render_default(value: &RawValue<'_>, _env: &RenderEnv) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_native_is_server() {
        #[cfg(not(target_arch = "wasm32"))]
        assert!(RenderEnv::detect().server_runtime);
        assert_eq!(RenderEnv::current(), &RenderEnv::detect());
    }

    #[test]
    fn test_scalar_kinds_share_default_renderer() {
        let env = RenderEnv::SERVER;
        for kind in [
            ColumnKind::Integer,
            ColumnKind::Real,
            ColumnKind::String,
            ColumnKind::Boolean,
        ] {
            let render = renderer_for(kind);
            assert_eq!(render(&RawValue::Bool(false), &env), "false");
            assert_eq!(render(&RawValue::Null, &env), "");
        }
    }

    #[test]
    fn test_table_routes_timestamp_and_blob() {
        let env = RenderEnv::SERVER;
        let ts = renderer_for(ColumnKind::Timestamp);
        assert_eq!(ts(&RawValue::Int(0), &env), "1970-01-01T00:00:00.000Z");
        let blob = renderer_for(ColumnKind::Blob);
        assert_eq!(blob(&RawValue::from(b"ok".to_vec()), &env), "ok");
    }
}
