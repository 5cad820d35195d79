//! Business services containing domain logic and use cases.

pub mod otp;

// Re-export commonly used types
pub use otp::{
    Clock, IssueOtpResult, NotifierTrait, OtpService, OtpServiceConfig, OtpStoreTrait,
    SystemClock,
};
