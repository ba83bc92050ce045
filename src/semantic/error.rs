use thiserror::Error;

/// The catalogue of semantic diagnostics. Codes are stable: `*N` keys
/// identify the rule that fired, independent of message wording.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    #[error("*0: main function is missing")]
    MissingMain,
    #[error("*1: return type of main is not int")]
    WrongMainReturnType,

    // defined occurrences of identifiers
    #[error("*2: identifier redeclared")]
    IdentifierRedeclared,
    #[error("*3: identifier declared void")]
    DeclaredVoid,
    #[error("*4: identifier declared void[]")]
    DeclaredVoidArray,

    // applied occurrences of identifiers
    #[error("*5: identifier undeclared")]
    UndeclaredIdentifier,

    // assignments
    #[error("*6: incompatible type for =")]
    IncompatibleAssignment,
    #[error("*7: invalid lvalue in assignment")]
    InvalidLValue,

    // types for expressions
    #[error("*8: incompatible type for return")]
    IncompatibleReturnType,
    #[error("*9: incompatible type for this binary operator")]
    IncompatibleBinaryOperand,
    #[error("*10: incompatible type for this unary operator")]
    IncompatibleUnaryOperand,

    // scalars
    #[error("*11: attempt to use an array/function as a scalar")]
    ScalarExpected,

    // arrays
    #[error("*12: attempt to use a scalar/function as an array")]
    NotAnArray,
    #[error("*13: wrong type for element in array initialiser")]
    WrongInitElement,
    #[error("*14: invalid initialiser: array initialiser for scalar")]
    ArrayInitForScalar,
    #[error("*15: invalid initialiser: scalar initialiser for array")]
    ScalarInitForArray,
    #[error("*16: excess elements in array initialiser")]
    ExcessInitializers,
    #[error("*17: array subscript is not an integer")]
    IndexNotInt,
    #[error("*18: array size missing")]
    ArraySizeMissing,

    // functions
    #[error("*19: attempt to reference a scalar/array as a function")]
    NotAFunction,

    // conditional expressions in if, for and while
    #[error("*20: if conditional is not boolean")]
    IfCondNotBoolean,
    #[error("*21: for conditional is not boolean")]
    ForCondNotBoolean,
    #[error("*22: while conditional is not boolean")]
    WhileCondNotBoolean,

    // break and continue
    #[error("*23: break must be in a while/for")]
    BreakOutsideLoop,
    #[error("*24: continue must be in a while/for")]
    ContinueOutsideLoop,

    // parameters
    #[error("*25: too many actual parameters")]
    TooManyArguments,
    #[error("*26: too few actual parameters")]
    TooFewArguments,
    #[error("*27: wrong type for actual parameter")]
    WrongArgumentType,

    // advisory checks
    #[error("*30: statement(s) not reached")]
    UnreachableStatements,
    #[error("*31: missing return statement")]
    MissingReturnStatement,
}
