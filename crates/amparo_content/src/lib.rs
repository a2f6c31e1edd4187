pub mod catalog;
pub mod professionals;

pub use catalog::{Catalog, ContentKind, WellnessContent};
pub use professionals::{find_professional, professionals, Professional};

/// CVV (Centro de Valorização da Vida) crisis line. Exposed for the
/// external place-call collaborator; the core never dials.
pub const CVV_PHONE_NUMBER: &str = "188";
