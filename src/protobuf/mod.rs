//! Generated protobuf modules
//!
//! Canonical survey record types generated from `protos/netsurvey.proto` by
//! build.rs. Optional fields use the google.protobuf wrapper types, which prost
//! maps to `Option<T>`, so field presence is explicit on the Rust side too.

pub mod records {
    //! Generated survey record types (package `netsurvey`).
    #[allow(dead_code, unused_imports)]
    #[allow(clippy::all)]
    mod inner {
        include!(concat!(env!("OUT_DIR"), "/netsurvey.rs"));
    }
    pub use inner::*;
}
