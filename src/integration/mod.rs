//! Scenario tests over complete manifests
//!
//! Golden reports under `testdata/` were produced from the same manifests
//! and are compared byte for byte.

mod e2e;
mod fixtures;
