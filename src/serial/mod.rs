pub mod errors;
mod buffer;
#[cfg(test)]
mod mock_port;
mod port;
mod traits;
mod wrapper;

pub use errors::{Error, Result};
pub use port::new;
pub use traits::Connection;
