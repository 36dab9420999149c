pub mod db;
pub mod profile;
