mod model;

pub use model::{ENFORCEMENT_ENV, EnforcementMode, ScanConfig};
