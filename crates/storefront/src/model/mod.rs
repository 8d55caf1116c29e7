//! Plain data types shared by the screens, the API client and the session store.

pub mod filter;
pub mod product;
pub mod session;

pub use filter::*;
pub use product::*;
pub use session::*;
