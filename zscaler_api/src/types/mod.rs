mod page;
pub use self::page::PageEnvelope;

mod response;
pub use self::response::ApiResponse;
