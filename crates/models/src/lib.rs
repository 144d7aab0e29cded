pub mod errors;
pub mod db;
pub mod pig;
pub mod wolf;
pub mod house;

#[cfg(test)]
mod tests;
