//! Strategy Definition Domain Services

mod validator;

pub use validator::StrategyValidator;
