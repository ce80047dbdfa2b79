//! Authentication context and its local persistence.

pub mod context;
pub mod storage;

pub use context::{AuthContext, MOCK_PASSWORD};
pub use storage::LocalStorage;
