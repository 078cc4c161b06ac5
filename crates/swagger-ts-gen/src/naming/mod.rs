pub mod identifiers;

#[cfg(test)]
mod tests;
