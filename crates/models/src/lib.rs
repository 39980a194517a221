pub mod db;
pub mod coffee;

#[cfg(test)]
mod tests;
