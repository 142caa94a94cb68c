use lalrpop_util::lalrpop_mod;

pub mod ast;

// Parser generated from minic.lalrpop at build time.
lalrpop_mod!(pub minic);
