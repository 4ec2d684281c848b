#[cfg(test)]
pub mod common;


#[cfg(test)]
mod test_remove;


#[cfg(test)]
mod test_traversal;
