pub mod global;
pub mod account;

#[cfg(feature = "tradingpost")]
pub mod tradingpost;
