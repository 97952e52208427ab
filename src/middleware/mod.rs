pub mod auth;

#[cfg(test)]
pub mod test;
