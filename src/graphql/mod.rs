pub mod client;
pub mod error;
pub mod queries;
pub mod upload;

pub use client::GraphQLClient;
pub use error::{GraphQLError, PathSegment, RequestFailure};
pub use upload::Upload;
