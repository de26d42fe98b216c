/// CST (Concrete Syntax Tree) module
/// Contains all definitions related to the tree the parser produces
///
/// Submodules:
/// - node: Nodes, children, fields and typed views over tagged unions
/// - display: S-expression rendering
/// - values: Decoding of integer, string and char literals
pub mod display;
pub mod node;
pub mod values;
