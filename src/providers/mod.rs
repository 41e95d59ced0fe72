pub mod json;
pub mod mock;
pub mod traits;

pub use json::JsonProvider;
pub use mock::MockProvider;
pub use traits::PropertyProvider;
