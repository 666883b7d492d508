use crate::VERSION;

pub(crate) mod mock;
mod account;



#[test]
fn test_version() {
    assert_eq!(VERSION, env!("CARGO_PKG_VERSION"));
}
