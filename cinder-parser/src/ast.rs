//! AST node definitions.
//!
//! Every node owns its children. Nodes are built bottom-up by the parser and
//! never mutated afterwards.

/// The root node: every top-level declaration in program order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TranslationUnit {
    pub declarations: Vec<Decl>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Decl {
    /// A function definition or prototype (e.g. `int add(int a, int b);`).
    Func(FuncDecl),
    /// A variable declaration (e.g. `int x = 1, *p;`).
    Var(VarDecl),
    Parameter(ParameterDecl),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FuncDecl {
    pub ty: String,
    pub declarator: Declarator,
    pub params: Vec<ParameterDecl>,
    /// `None` for a prototype.
    pub body: Option<CompoundStmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    pub ty: String,
    /// Never empty.
    pub declarators: Vec<InitDeclarator>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParameterDecl {
    pub ty: String,
    pub declarator: InitDeclarator,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InitDeclarator {
    pub declarator: Declarator,
    pub initializer: Option<Expr>,
}

/// The identifier-bearing part of a declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declarator {
    /// `ident`
    NoPtr(String),
    /// `*ident` (exactly one level of indirection).
    Ptr(String),
}

impl Declarator {
    /// Returns the declared identifier.
    pub fn ident(&self) -> &str {
        match self {
            Declarator::NoPtr(ident) | Declarator::Ptr(ident) => ident,
        }
    }

    pub fn is_pointer(&self) -> bool {
        matches!(self, Declarator::Ptr(_))
    }
}

/// A lexical block (e.g. `{ x = 1; return x; }`).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompoundStmt {
    pub body: Vec<Stmt>,
}

/// A `(condition, statement)` pair of an `if` or `elif` branch.
#[derive(Debug, Clone, PartialEq)]
pub struct Branch {
    pub condition: Expr,
    pub body: Box<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Compound(CompoundStmt),
    Conditional {
        if_branch: Branch,
        /// In source order.
        elif_branches: Vec<Branch>,
        else_branch: Option<Box<Stmt>>,
    },
    While {
        condition: Expr,
        body: Box<Stmt>,
    },
    /// `repeat stmt`. The grammar has no condition slot.
    Repeat(Box<Stmt>),
    /// Reserved. The grammar defines no clauses for `for`, so the parser never produces it.
    For,
    Break,
    Continue,
    Return(Expr),
    Declaration(VarDecl),
    Expr(Expr),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    // Literals keep their raw source text.
    IntLit(String),
    FloatLit(String),
    CharLit(String),
    StringLit(String),
    BoolLit(String),
    /// An identifier (e.g. `foo`).
    Identifier(String),
    /// `(expr)`, kept as a node to preserve the source grouping.
    Paren(Box<Expr>),
    /// A binary expression (e.g. `1+1`).
    Binary {
        op: String,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    /// A prefix expression (e.g. `-x`, `*p`, `++i`).
    Prefix {
        op: String,
        arg: Box<Expr>,
    },
    PostfixIncrement(Box<Expr>),
    PostfixDecrement(Box<Expr>),
    /// A function call (e.g. `foo(1, bar)`). The callee is any postfix expression.
    Call {
        callee: Box<Expr>,
        args: Vec<Expr>,
    },
    /// `base[index]`
    Subscript {
        base: Box<Expr>,
        index: Box<Expr>,
    },
}
