pub mod rate_limit;
pub mod require_jwt;

pub use rate_limit::RateLimit;
pub use require_jwt::RequireJWT;
