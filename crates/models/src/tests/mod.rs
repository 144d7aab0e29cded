
/// Connection configuration tests
pub mod db_tests;
