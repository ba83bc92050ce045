use std::fmt;

/// Source span of a token or AST node: start and end line/column,
/// 1-based. The checker reads positions for diagnostics and never
/// interprets them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
pub struct SourcePos {
    pub line_start: usize,
    pub col_start: usize,
    pub line_finish: usize,
    pub col_finish: usize,
}

impl SourcePos {
    pub fn span(start: SourcePos, finish: SourcePos) -> SourcePos {
        SourcePos {
            line_start: start.line_start,
            col_start: start.col_start,
            line_finish: finish.line_finish,
            col_finish: finish.col_finish,
        }
    }
}

/// Index of a declaration record in the checker's symbol table. Applied
/// occurrences of identifiers are linked to their declaration through
/// this handle during semantic analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct SymbolId(pub usize);

#[derive(Debug, Clone, serde::Serialize)]
pub enum Type {
    Void,
    Boolean,
    Int,
    Float,
    String,
    Array {
        elem: Box<Type>,
        // None until given explicitly or inferred from an initializer list
        size: Option<usize>,
    },
    Error,
}

impl Type {
    pub fn is_error(&self) -> bool {
        matches!(self, Type::Error)
    }

    pub fn is_void(&self) -> bool {
        matches!(self, Type::Void)
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Type::Array { .. })
    }

    /// The assignability relation: identity, the single int-to-float
    /// widening, and the absorbing error type. Whole arrays are never
    /// assignable; argument passing compares element types itself.
    pub fn assignable(&self, source: &Type) -> bool {
        match (self, source) {
            (Type::Error, _) | (_, Type::Error) => true,
            (Type::Float, Type::Int) => true,
            (Type::Array { .. }, _) | (_, Type::Array { .. }) => false,
            _ => self == source,
        }
    }
}

// Array size is a declaration attribute, not part of type identity:
// `int[2]` and `int[3]` are the same type.
impl PartialEq for Type {
    fn eq(&self, other: &Type) -> bool {
        match (self, other) {
            (Type::Void, Type::Void)
            | (Type::Boolean, Type::Boolean)
            | (Type::Int, Type::Int)
            | (Type::Float, Type::Float)
            | (Type::String, Type::String)
            | (Type::Error, Type::Error) => true,
            (Type::Array { elem: a, .. }, Type::Array { elem: b, .. }) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Void => write!(f, "void"),
            Type::Boolean => write!(f, "boolean"),
            Type::Int => write!(f, "int"),
            Type::Float => write!(f, "float"),
            Type::String => write!(f, "string"),
            Type::Array { elem, .. } => write!(f, "{}[]", elem),
            Type::Error => write!(f, "error"),
        }
    }
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct Program {
    pub decls: Vec<Decl>,
}

#[derive(Debug, Clone, serde::Serialize)]
pub enum Decl {
    Func(FuncDecl),
    Var(VarDecl),
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct FuncDecl {
    pub return_type: Type,
    pub name: String,
    pub params: Vec<ParamDecl>,
    pub body: Stmt,
    pub pos: SourcePos,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct ParamDecl {
    pub param_type: Type,
    pub name: String,
    pub pos: SourcePos,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct VarDecl {
    pub var_type: Type,
    pub name: String,
    pub init: Option<Expr>,
    pub pos: SourcePos,
}

#[derive(Debug, Clone, serde::Serialize)]
pub enum Stmt {
    Compound {
        decls: Vec<VarDecl>,
        stmts: Vec<Stmt>,
        pos: SourcePos,
    },
    If {
        cond: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
        pos: SourcePos,
    },
    While {
        cond: Expr,
        body: Box<Stmt>,
        pos: SourcePos,
    },
    For {
        init: Option<Expr>,
        cond: Option<Expr>,
        step: Option<Expr>,
        body: Box<Stmt>,
        pos: SourcePos,
    },
    Break {
        pos: SourcePos,
    },
    Continue {
        pos: SourcePos,
    },
    Return {
        value: Option<Expr>,
        pos: SourcePos,
    },
    Expr(Expr),
    Empty {
        pos: SourcePos,
    },
}

impl Stmt {
    pub fn pos(&self) -> SourcePos {
        match self {
            Stmt::Compound { pos, .. }
            | Stmt::If { pos, .. }
            | Stmt::While { pos, .. }
            | Stmt::For { pos, .. }
            | Stmt::Break { pos }
            | Stmt::Continue { pos }
            | Stmt::Return { pos, .. }
            | Stmt::Empty { pos } => *pos,
            Stmt::Expr(expr) => expr.pos,
        }
    }
}

/// An expression node. `ty` is absent until the semantic pass decorates
/// the tree; afterwards every node carries a type, possibly `Error`.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Expr {
    pub kind: ExprKind,
    pub ty: Option<Type>,
    pub pos: SourcePos,
}

impl Expr {
    pub fn new(kind: ExprKind, pos: SourcePos) -> Self {
        Self { kind, ty: None, pos }
    }
}

#[derive(Debug, Clone, serde::Serialize)]
pub enum ExprKind {
    IntLit(i64),
    FloatLit(f64),
    BoolLit(bool),
    StringLit(String),
    Var {
        name: String,
        symbol: Option<SymbolId>,
    },
    Unary {
        op: UnaryOperator,
        op_class: Option<OpClass>,
        operand: Box<Expr>,
    },
    Binary {
        op: BinaryOperator,
        op_class: Option<OpClass>,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Index {
        base: Box<Expr>,
        index: Box<Expr>,
    },
    Call {
        name: String,
        symbol: Option<SymbolId>,
        args: Vec<Expr>,
    },
    Assign {
        target: Box<Expr>,
        value: Box<Expr>,
    },
    ArrayInit {
        elements: Vec<Expr>,
    },
    // Synthetic int-to-float conversion inserted by the checker
    IntToFloat {
        operand: Box<Expr>,
    },
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum BinaryOperator {
    Plus,
    Minus,
    Star,
    Slash,
    EqualEqual,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    And,
    Or,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            BinaryOperator::Plus => "+",
            BinaryOperator::Minus => "-",
            BinaryOperator::Star => "*",
            BinaryOperator::Slash => "/",
            BinaryOperator::EqualEqual => "==",
            BinaryOperator::NotEqual => "!=",
            BinaryOperator::Less => "<",
            BinaryOperator::LessEqual => "<=",
            BinaryOperator::Greater => ">",
            BinaryOperator::GreaterEqual => ">=",
            BinaryOperator::And => "&&",
            BinaryOperator::Or => "||",
        };
        write!(f, "{}", symbol)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum UnaryOperator {
    Plus,
    Minus,
    Not,
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            UnaryOperator::Plus => "+",
            UnaryOperator::Minus => "-",
            UnaryOperator::Not => "!",
        };
        write!(f, "{}", symbol)
    }
}

/// Operand class an operator is specialized to once its operand type is
/// known: the int/float/boolean-specific form of the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum OpClass {
    Int,
    Float,
    Boolean,
}
