//! navindex library exports

pub mod core;

#[cfg(test)]
pub mod test_support;
