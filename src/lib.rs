pub mod codec;
pub mod convert;
pub mod errors;
pub mod format;
pub mod header;
pub mod info;
pub mod io;
pub mod policy;
pub mod validation;

pub use codec::*;
pub use convert::*;
pub use errors::*;
pub use format::*;
pub use header::*;
pub use info::*;
pub use policy::*;
pub use validation::*;
