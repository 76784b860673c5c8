pub mod error;
pub mod location;
pub mod notify;
pub mod storage;

#[cfg(test)]
pub(crate) mod testing;
