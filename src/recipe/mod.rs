pub mod artifact;
pub mod conversion;
pub mod definition;

pub use artifact::*;
pub use conversion::*;
pub use definition::*;
