pub mod errors;
pub mod file_set;
pub mod resolve;

pub use errors::ResolveError;
pub use file_set::FileSet;
pub use resolve::{Resolver, resolve};
