/// Diagnostics module
/// Renders lexical and syntax errors against the source text they point into
pub mod diagnostics;

#[cfg(test)]
mod tests;
