mod form;
mod request;
mod submission;
mod validation;

pub use form::*;
pub use request::*;
pub use submission::*;
pub use validation::*;
