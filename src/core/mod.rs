pub mod db;
pub mod kv;
pub mod sqlx_utils;
#[cfg(test)]
pub mod test_utils;
pub mod utils;
