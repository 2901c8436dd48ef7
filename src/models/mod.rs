pub mod analyze_request;
pub mod user;

pub use analyze_request::{
    AnalyzeRequest, AnalyzeRequestStatus, ListOptions, StoreAnalyzeRequestInput,
    TravelHistorySource,
};
pub use user::{AuthOutput, CreateUserInput, LoginInput, Token, User};
