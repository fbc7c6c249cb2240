//! Domain types for finch.

mod key;
mod paging;
mod secrets;
mod status;
mod user;

pub use key::LookupKey;
pub use paging::{Paging, ResolvedPaging};
pub use secrets::AppSecrets;
pub use status::Status;
pub use user::UserProfile;
