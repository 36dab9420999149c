pub mod profile;
#[cfg(test)]
mod profile_test;
