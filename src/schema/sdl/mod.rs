mod error;
mod finalizers;
mod parse_ast;
mod parser;


pub use parser::ParseSdl;
