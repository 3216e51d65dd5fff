pub use crate::generator::GenerationError;
pub use negotiation_core::FormatError;
