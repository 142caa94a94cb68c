// Abstract Syntax Tree (AST) definitions for the MiniC language subset

use std::fmt;
use std::io::{self, Write};

/// Trait for dumping AST nodes as indented text
///
/// Every node writes itself and its descendants to `w`, one line per
/// structural marker or attribute, indented by `level` two-space units.
/// Output is deterministic for a given tree and level.
pub trait Dump {
    fn dump(&self, level: usize, w: &mut dyn Write) -> io::Result<()>;
}

fn write_line(w: &mut dyn Write, level: usize, line: &str) -> io::Result<()> {
    writeln!(w, "{}{}", "  ".repeat(level), line)
}

#[derive(Debug)]
pub struct CompUnit {
    pub func_def: FuncDef,
}

#[derive(Debug)]
pub struct FuncDef {
    pub ident: String,
    pub func_type: String,
    pub block: Block,
}

#[derive(Debug)]
pub struct Block {
    pub stmt: ReturnStmt,
}

#[derive(Debug)]
pub struct ReturnStmt {
    pub exp: Exp,
}

// Exp ::= UnaryExp
#[derive(Debug)]
pub struct Exp {
    pub unary_exp: UnaryExp,
}

// UnaryExp ::= PrimaryExp | UnaryOp UnaryExp
#[derive(Debug)]
pub enum UnaryExp {
    Primary(PrimaryExp),
    Applied { op: UnaryOp, exp: Box<UnaryExp> },
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum UnaryOp {
    Pos,
    Neg,
    Not,
}

// PrimaryExp ::= "(" Exp ")" | Number
#[derive(Debug)]
pub enum PrimaryExp {
    Paren(Box<Exp>),
    Number(Number),
}

#[derive(Debug)]
pub struct Number {
    pub value: i32,
}

impl CompUnit {
    pub fn new(func_def: FuncDef) -> Self {
        CompUnit { func_def }
    }
}

impl FuncDef {
    pub fn new(ident: String, func_type: String, block: Block) -> Self {
        FuncDef {
            ident,
            func_type,
            block,
        }
    }
}

impl Block {
    pub fn new(stmt: ReturnStmt) -> Self {
        Block { stmt }
    }
}

impl ReturnStmt {
    pub fn new(exp: Exp) -> Self {
        ReturnStmt { exp }
    }
}

impl Exp {
    pub fn new(unary_exp: UnaryExp) -> Self {
        Exp { unary_exp }
    }
}

impl Number {
    pub fn new(value: i32) -> Self {
        Number { value }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            UnaryOp::Pos => write!(f, "+"),
            UnaryOp::Neg => write!(f, "-"),
            UnaryOp::Not => write!(f, "!"),
        }
    }
}

impl Dump for CompUnit {
    fn dump(&self, level: usize, w: &mut dyn Write) -> io::Result<()> {
        write_line(w, level, "CompUnitAST {")?;
        self.func_def.dump(level + 1, w)?;
        write_line(w, level, "}")
    }
}

impl Dump for FuncDef {
    fn dump(&self, level: usize, w: &mut dyn Write) -> io::Result<()> {
        write_line(w, level, "FuncDefAST {")?;
        write_line(w, level + 1, &format!("ident: {}", self.ident))?;
        write_line(w, level + 1, &format!("func_type: {}", self.func_type))?;
        self.block.dump(level + 1, w)?;
        write_line(w, level, "}")
    }
}

impl Dump for Block {
    fn dump(&self, level: usize, w: &mut dyn Write) -> io::Result<()> {
        write_line(w, level, "BlockAST {")?;
        self.stmt.dump(level + 1, w)?;
        write_line(w, level, "}")
    }
}

impl Dump for ReturnStmt {
    fn dump(&self, level: usize, w: &mut dyn Write) -> io::Result<()> {
        write_line(w, level, "ReturnAST {")?;
        self.exp.dump(level + 1, w)?;
        write_line(w, level, "}")
    }
}

impl Dump for Exp {
    fn dump(&self, level: usize, w: &mut dyn Write) -> io::Result<()> {
        write_line(w, level, "ExpAST {")?;
        self.unary_exp.dump(level + 1, w)?;
        write_line(w, level, "}")
    }
}

impl Dump for UnaryExp {
    fn dump(&self, level: usize, w: &mut dyn Write) -> io::Result<()> {
        write_line(w, level, "UnaryExpAST {")?;
        match self {
            UnaryExp::Primary(primary) => primary.dump(level + 1, w)?,
            UnaryExp::Applied { op, exp } => {
                write_line(w, level + 1, &format!("unary_op: {}", op))?;
                exp.dump(level + 1, w)?;
            }
        }
        write_line(w, level, "}")
    }
}

impl Dump for PrimaryExp {
    // Both alternatives print the same wrapper; the variant only records
    // which grammar production produced the node.
    fn dump(&self, level: usize, w: &mut dyn Write) -> io::Result<()> {
        write_line(w, level, "PrimaryAST {")?;
        match self {
            PrimaryExp::Paren(exp) => exp.dump(level + 1, w)?,
            PrimaryExp::Number(number) => number.dump(level + 1, w)?,
        }
        write_line(w, level, "}")
    }
}

impl Dump for Number {
    fn dump(&self, level: usize, w: &mut dyn Write) -> io::Result<()> {
        write_line(w, level, "NumberAST {")?;
        write_line(w, level + 1, &format!("value: {}", self.value))?;
        write_line(w, level, "}")
    }
}
