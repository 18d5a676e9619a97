pub mod i18n;
pub mod response;
pub mod validation;

pub use i18n::*;
pub use response::*;
pub use validation::*;
