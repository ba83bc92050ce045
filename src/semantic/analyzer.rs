//! The semantic checker: a single top-down traversal that resolves
//! names against the scope stack, type-checks every construct, and
//! decorates the tree as it goes.
//!
//! Decoration means three rewrites besides filling in types: inserting
//! int-to-float conversion nodes where the one legal widening applies,
//! specializing each operator to its int/float/boolean form, and
//! back-filling array sizes left to be inferred from initializer
//! lists. Every rule violation is recovered locally: the offending
//! node gets the absorbing `Error` type, a diagnostic is recorded, and
//! the traversal continues so one pass finds every independent error.

use crate::ast::{
    Decl, Expr, ExprKind, FuncDecl, OpClass, ParamDecl, Program, SourcePos, Stmt, SymbolId, Type,
    UnaryOperator, VarDecl,
};
use crate::diagnostics::{Diagnostic, Reporter};

use super::error::ErrorCode;
use super::scope::{Symbol, SymbolKind, SymbolTable};
use super::std_env;

pub struct Checker {
    table: SymbolTable,
    reporter: Reporter,
    // Traversal context: the enclosing function's return type, whether
    // a return statement has been seen in it, and loop nesting
    current_function_return_type: Option<Type>,
    seen_return: bool,
    in_loop: bool,
}

impl Checker {
    pub fn new(reporter: Reporter) -> Self {
        let mut table = SymbolTable::new();
        for builtin in std_env::standard_environment() {
            table.insert(Symbol {
                kind: SymbolKind::Function,
                name: builtin.name.to_string(),
                ty: builtin.return_type,
                params: builtin
                    .params
                    .into_iter()
                    .map(|ty| ("x".to_string(), ty))
                    .collect(),
                pos: SourcePos::default(),
            });
        }

        Self {
            table,
            reporter,
            current_function_return_type: None,
            seen_return: false,
            in_loop: false,
        }
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.reporter.into_diagnostics()
    }

    pub fn check_program(&mut self, program: &mut Program) {
        // User globals get their own frame so they shadow built-ins
        // instead of colliding with them
        self.table.open_scope();

        for decl in &mut program.decls {
            match decl {
                Decl::Func(func) => self.check_func_decl(func),
                Decl::Var(var) => self.check_var_decl(var, SymbolKind::GlobalVar),
            }
        }

        self.check_entry_point();
        self.table.close_scope();
    }

    fn check_entry_point(&mut self) {
        match self.table.lookup("main") {
            Some(id) => {
                let (kind, ty) = {
                    let symbol = self.table.symbol(id);
                    (symbol.kind, symbol.ty.clone())
                };
                if kind == SymbolKind::Function {
                    if ty != Type::Int {
                        self.reporter.report(
                            ErrorCode::WrongMainReturnType,
                            None,
                            SourcePos::default(),
                        );
                    }
                } else {
                    self.reporter
                        .report(ErrorCode::MissingMain, None, SourcePos::default());
                }
            }
            None => self
                .reporter
                .report(ErrorCode::MissingMain, None, SourcePos::default()),
        }
    }

    // ===================== Declarations =====================

    fn check_func_decl(&mut self, func: &mut FuncDecl) {
        if self.table.lookup_one_level(&func.name).is_some() {
            self.reporter.report(
                ErrorCode::IdentifierRedeclared,
                Some(func.name.clone()),
                func.pos,
            );
        }
        // Declared before the body is visited so recursive calls resolve
        let params = func
            .params
            .iter()
            .map(|p| (p.name.clone(), p.param_type.clone()))
            .collect();
        self.table.insert(Symbol {
            kind: SymbolKind::Function,
            name: func.name.clone(),
            ty: func.return_type.clone(),
            params,
            pos: func.pos,
        });

        let saved_return_type = self
            .current_function_return_type
            .replace(func.return_type.clone());
        let saved_seen_return = std::mem::replace(&mut self.seen_return, false);
        let saved_in_loop = std::mem::replace(&mut self.in_loop, false);

        self.check_function_body(func);

        // Conservative liveness: any visited return satisfies the check.
        // The entry point is exempt.
        if !func.return_type.is_void() && !self.seen_return && func.name != "main" {
            self.reporter.report(
                ErrorCode::MissingReturnStatement,
                Some(func.name.clone()),
                func.pos,
            );
        }

        self.current_function_return_type = saved_return_type;
        self.seen_return = saved_seen_return;
        self.in_loop = saved_in_loop;
    }

    /// Parameters live in their own frame, one level outside the frame
    /// holding the body's locals, so a local may shadow a parameter.
    fn check_function_body(&mut self, func: &mut FuncDecl) {
        self.table.open_scope();
        for param in &func.params {
            self.declare_param(param);
        }

        if let Stmt::Compound { decls, stmts, .. } = &mut func.body {
            self.table.open_scope();
            for decl in decls.iter_mut() {
                self.check_var_decl(decl, SymbolKind::LocalVar);
            }
            self.check_stmt_list(stmts);
            self.table.close_scope();
        } else {
            self.check_stmt(&mut func.body);
        }

        self.table.close_scope();
    }

    fn declare_param(&mut self, param: &ParamDecl) {
        if self.table.lookup_one_level(&param.name).is_some() {
            self.reporter.report(
                ErrorCode::IdentifierRedeclared,
                Some(param.name.clone()),
                param.pos,
            );
        }
        self.table.insert(Symbol {
            kind: SymbolKind::Param,
            name: param.name.clone(),
            ty: param.param_type.clone(),
            params: Vec::new(),
            pos: param.pos,
        });

        match &param.param_type {
            Type::Void => {
                self.reporter
                    .report(ErrorCode::DeclaredVoid, Some(param.name.clone()), param.pos);
            }
            Type::Array { elem, .. } if elem.is_void() => {
                self.reporter.report(
                    ErrorCode::DeclaredVoidArray,
                    Some(param.name.clone()),
                    param.pos,
                );
            }
            _ => {}
        }
    }

    fn check_var_decl(&mut self, decl: &mut VarDecl, kind: SymbolKind) {
        if self.table.lookup_one_level(&decl.name).is_some() {
            self.reporter.report(
                ErrorCode::IdentifierRedeclared,
                Some(decl.name.clone()),
                decl.pos,
            );
        }
        let id = self.table.insert(Symbol {
            kind,
            name: decl.name.clone(),
            ty: decl.var_type.clone(),
            params: Vec::new(),
            pos: decl.pos,
        });

        match &decl.var_type {
            Type::Void => {
                self.reporter
                    .report(ErrorCode::DeclaredVoid, Some(decl.name.clone()), decl.pos);
            }
            Type::Array { elem, size } => {
                if elem.is_void() {
                    self.reporter.report(
                        ErrorCode::DeclaredVoidArray,
                        Some(decl.name.clone()),
                        decl.pos,
                    );
                }
                let has_list_init = matches!(
                    decl.init,
                    Some(Expr {
                        kind: ExprKind::ArrayInit { .. },
                        ..
                    })
                );
                if size.is_none() && !has_list_init {
                    self.reporter.report(
                        ErrorCode::ArraySizeMissing,
                        Some(decl.name.clone()),
                        decl.pos,
                    );
                }
            }
            _ => {}
        }

        if decl.var_type.is_array() {
            self.check_array_var_init(decl, id);
        } else if let Some(init) = &mut decl.init {
            if let ExprKind::ArrayInit { elements } = &mut init.kind {
                // elements are still visited so every node ends up typed
                for element in elements.iter_mut() {
                    self.check_expr(element);
                }
                init.ty = Some(Type::Error);
                self.reporter
                    .report(ErrorCode::ArrayInitForScalar, None, init.pos);
            } else {
                let init_ty = self.check_expr(init);
                if decl.var_type.assignable(&init_ty) {
                    widen(&decl.var_type, init);
                } else {
                    self.reporter
                        .report(ErrorCode::IncompatibleAssignment, None, init.pos);
                }
            }
        }
    }

    /// Checks an array declaration's initializer: element typing with
    /// promotion, then size inference or excess detection.
    fn check_array_var_init(&mut self, decl: &mut VarDecl, id: SymbolId) {
        let elem_ty = match &decl.var_type {
            Type::Array { elem, .. } => (**elem).clone(),
            _ => return,
        };
        let Some(init) = &mut decl.init else { return };

        if !matches!(init.kind, ExprKind::ArrayInit { .. }) {
            self.check_expr(init);
            self.reporter.report(
                ErrorCode::ScalarInitForArray,
                Some(decl.name.clone()),
                init.pos,
            );
            return;
        }

        let count = if let ExprKind::ArrayInit { elements } = &mut init.kind {
            for (index, element) in elements.iter_mut().enumerate() {
                let element_ty = self.check_expr(element);
                if elem_ty.assignable(&element_ty) {
                    widen(&elem_ty, element);
                } else {
                    self.reporter.report(
                        ErrorCode::WrongInitElement,
                        Some(index.to_string()),
                        element.pos,
                    );
                }
            }
            elements.len()
        } else {
            0
        };

        let init_pos = init.pos;
        if let Type::Array { size, .. } = &mut decl.var_type {
            match size {
                None => *size = Some(count),
                Some(declared) if *declared < count => {
                    self.reporter.report(
                        ErrorCode::ExcessInitializers,
                        Some(decl.name.clone()),
                        init_pos,
                    );
                }
                _ => {}
            }
        }

        init.ty = Some(decl.var_type.clone());
        self.table.update_type(id, decl.var_type.clone());
    }

    // ===================== Statements =====================

    fn check_stmt_list(&mut self, stmts: &mut [Stmt]) {
        for i in 0..stmts.len() {
            self.check_stmt(&mut stmts[i]);
            if matches!(stmts[i], Stmt::Return { .. }) && i + 1 < stmts.len() {
                self.reporter
                    .report(ErrorCode::UnreachableStatements, None, stmts[i + 1].pos());
            }
        }
    }

    fn check_stmt(&mut self, stmt: &mut Stmt) {
        match stmt {
            Stmt::Compound { decls, stmts, .. } => {
                self.table.open_scope();
                for decl in decls.iter_mut() {
                    self.check_var_decl(decl, SymbolKind::LocalVar);
                }
                self.check_stmt_list(stmts);
                self.table.close_scope();
            }
            Stmt::If {
                cond,
                then_branch,
                else_branch,
                ..
            } => {
                self.check_condition(cond, ErrorCode::IfCondNotBoolean);
                self.check_stmt(then_branch);
                if let Some(else_branch) = else_branch {
                    self.check_stmt(else_branch);
                }
            }
            Stmt::While { cond, body, .. } => {
                self.check_condition(cond, ErrorCode::WhileCondNotBoolean);
                let saved = std::mem::replace(&mut self.in_loop, true);
                self.check_stmt(body);
                self.in_loop = saved;
            }
            Stmt::For {
                init,
                cond,
                step,
                body,
                ..
            } => {
                if let Some(init) = init {
                    self.check_expr(init);
                }
                // An absent condition means "always true" and is legal
                if let Some(cond) = cond {
                    self.check_condition(cond, ErrorCode::ForCondNotBoolean);
                }
                if let Some(step) = step {
                    self.check_expr(step);
                }
                let saved = std::mem::replace(&mut self.in_loop, true);
                self.check_stmt(body);
                self.in_loop = saved;
            }
            Stmt::Break { pos } => {
                if !self.in_loop {
                    self.reporter.report(ErrorCode::BreakOutsideLoop, None, *pos);
                }
            }
            Stmt::Continue { pos } => {
                if !self.in_loop {
                    self.reporter
                        .report(ErrorCode::ContinueOutsideLoop, None, *pos);
                }
            }
            Stmt::Return { value, pos } => {
                let pos = *pos;
                self.check_return(value, pos);
            }
            Stmt::Expr(expr) => {
                self.check_expr(expr);
            }
            Stmt::Empty { .. } => {}
        }
    }

    fn check_condition(&mut self, cond: &mut Expr, code: ErrorCode) {
        self.check_expr(cond);
        match &cond.ty {
            Some(Type::Boolean) => {}
            // the operand already carries a diagnostic of its own
            Some(Type::Error) => {}
            Some(other) => {
                let found = other.to_string();
                self.reporter.report(code, Some(found), cond.pos);
            }
            None => self.reporter.report(code, Some("none".to_string()), cond.pos),
        }
    }

    fn check_return(&mut self, value: &mut Option<Expr>, pos: SourcePos) {
        self.seen_return = true;
        let return_type = self.current_function_return_type.clone();

        match value {
            Some(expr) => {
                let value_ty = self.check_expr(expr);
                if let Some(return_type) = return_type {
                    if return_type.is_void() {
                        self.reporter
                            .report(ErrorCode::IncompatibleReturnType, None, pos);
                    } else if return_type.assignable(&value_ty) {
                        widen(&return_type, expr);
                    } else {
                        self.reporter
                            .report(ErrorCode::IncompatibleReturnType, None, pos);
                    }
                }
            }
            None => {
                if let Some(return_type) = return_type {
                    if !return_type.is_void() {
                        self.reporter
                            .report(ErrorCode::IncompatibleReturnType, None, pos);
                    }
                }
            }
        }
    }

    // ===================== Expressions =====================

    fn check_expr(&mut self, expr: &mut Expr) -> Type {
        let pos = expr.pos;
        let ty = match &mut expr.kind {
            ExprKind::IntLit(_) => Type::Int,
            ExprKind::FloatLit(_) => Type::Float,
            ExprKind::BoolLit(_) => Type::Boolean,
            ExprKind::StringLit(_) => Type::String,
            ExprKind::Empty => Type::Error,
            ExprKind::IntToFloat { operand } => {
                self.check_expr(operand);
                Type::Float
            }
            ExprKind::Var { name, symbol } => self.check_var_ref(name, symbol, pos, false),
            ExprKind::Unary {
                op,
                op_class,
                operand,
            } => {
                let operand_ty = self.check_expr(operand);
                let operand_pos = operand.pos;
                match op {
                    UnaryOperator::Plus | UnaryOperator::Minus => match operand_ty {
                        Type::Int => {
                            *op_class = Some(OpClass::Int);
                            Type::Int
                        }
                        Type::Float => {
                            *op_class = Some(OpClass::Float);
                            Type::Float
                        }
                        Type::Error => Type::Error,
                        _ => {
                            self.reporter.report(
                                ErrorCode::IncompatibleUnaryOperand,
                                Some(op.to_string()),
                                operand_pos,
                            );
                            Type::Error
                        }
                    },
                    UnaryOperator::Not => match operand_ty {
                        Type::Boolean => {
                            *op_class = Some(OpClass::Boolean);
                            Type::Boolean
                        }
                        Type::Error => Type::Error,
                        _ => {
                            self.reporter.report(
                                ErrorCode::IncompatibleUnaryOperand,
                                Some(op.to_string()),
                                operand_pos,
                            );
                            Type::Error
                        }
                    },
                }
            }
            ExprKind::Binary {
                op,
                op_class,
                left,
                right,
            } => {
                let op = *op;
                let left_ty = self.check_expr(left);
                let right_ty = self.check_expr(right);

                // Mixed int/float operands unify to float by promoting
                // the int side; otherwise the types must agree
                let unified = match (&left_ty, &right_ty) {
                    (Type::Int, Type::Float) => {
                        promote_to_float(left);
                        Type::Float
                    }
                    (Type::Float, Type::Int) => {
                        promote_to_float(right);
                        Type::Float
                    }
                    (Type::Error, Type::Error) => Type::Error,
                    _ if left_ty == right_ty && !left_ty.is_error() => left_ty.clone(),
                    _ => {
                        self.reporter.report(
                            ErrorCode::IncompatibleBinaryOperand,
                            Some(op.to_string()),
                            pos,
                        );
                        Type::Error
                    }
                };

                if unified.is_error() {
                    Type::Error
                } else {
                    self.specialize_binary(op, op_class, unified, pos)
                }
            }
            ExprKind::Index { base, index } => {
                let base_ty = if matches!(base.kind, ExprKind::Var { .. }) {
                    let base_pos = base.pos;
                    let ty = {
                        let ExprKind::Var { name, symbol } = &mut base.kind else {
                            unreachable!()
                        };
                        // bare array names are fine as an index base
                        self.check_var_ref(name, symbol, base_pos, true)
                    };
                    base.ty = Some(ty.clone());
                    ty
                } else {
                    self.check_expr(base)
                };

                let elem_ty = match &base_ty {
                    Type::Array { elem, .. } => (**elem).clone(),
                    Type::Error => Type::Error,
                    _ => {
                        self.reporter.report(ErrorCode::NotAnArray, None, base.pos);
                        Type::Error
                    }
                };

                let index_ty = self.check_expr(index);
                if matches!(index_ty, Type::Int | Type::Error) {
                    elem_ty
                } else {
                    self.reporter.report(ErrorCode::IndexNotInt, None, index.pos);
                    Type::Error
                }
            }
            ExprKind::Call { name, symbol, args } => {
                let name = name.clone();
                self.check_call(&name, symbol, args, pos)
            }
            ExprKind::Assign { target, value } => {
                let target_ty = self.check_lvalue(target);
                let value_ty = self.check_expr(value);
                if target_ty.assignable(&value_ty) {
                    widen(&target_ty, value);
                    target_ty
                } else {
                    self.reporter
                        .report(ErrorCode::IncompatibleAssignment, None, target.pos);
                    Type::Error
                }
            }
            ExprKind::ArrayInit { elements } => {
                // a brace initializer is only meaningful under an array
                // declaration; anywhere else it is malformed
                for element in elements.iter_mut() {
                    self.check_expr(element);
                }
                self.reporter
                    .report(ErrorCode::ArrayInitForScalar, None, pos);
                Type::Error
            }
        };

        expr.ty = Some(ty.clone());
        ty
    }

    fn specialize_binary(
        &mut self,
        op: crate::ast::BinaryOperator,
        op_class: &mut Option<OpClass>,
        unified: Type,
        pos: SourcePos,
    ) -> Type {
        use crate::ast::BinaryOperator::*;

        match op {
            And | Or => {
                if unified == Type::Boolean {
                    *op_class = Some(OpClass::Boolean);
                    Type::Boolean
                } else {
                    self.reporter.report(
                        ErrorCode::IncompatibleBinaryOperand,
                        Some(op.to_string()),
                        pos,
                    );
                    Type::Error
                }
            }
            Plus | Minus | Star | Slash => match unified {
                Type::Int => {
                    *op_class = Some(OpClass::Int);
                    Type::Int
                }
                Type::Float => {
                    *op_class = Some(OpClass::Float);
                    Type::Float
                }
                _ => {
                    self.reporter.report(
                        ErrorCode::IncompatibleBinaryOperand,
                        Some(op.to_string()),
                        pos,
                    );
                    Type::Error
                }
            },
            Less | LessEqual | Greater | GreaterEqual => match unified {
                Type::Int => {
                    *op_class = Some(OpClass::Int);
                    Type::Boolean
                }
                Type::Float => {
                    *op_class = Some(OpClass::Float);
                    Type::Boolean
                }
                _ => {
                    self.reporter.report(
                        ErrorCode::IncompatibleBinaryOperand,
                        Some(op.to_string()),
                        pos,
                    );
                    Type::Error
                }
            },
            EqualEqual | NotEqual => match unified {
                Type::Int => {
                    *op_class = Some(OpClass::Int);
                    Type::Boolean
                }
                Type::Boolean => {
                    *op_class = Some(OpClass::Boolean);
                    Type::Boolean
                }
                Type::Float => {
                    *op_class = Some(OpClass::Float);
                    Type::Boolean
                }
                _ => {
                    self.reporter.report(
                        ErrorCode::IncompatibleBinaryOperand,
                        Some(op.to_string()),
                        pos,
                    );
                    Type::Error
                }
            },
        }
    }

    /// Resolves an applied occurrence of a simple variable and links it
    /// to its declaration. Arrays may be referenced bare only in
    /// call-argument position (and as an index base).
    fn check_var_ref(
        &mut self,
        name: &str,
        symbol: &mut Option<SymbolId>,
        pos: SourcePos,
        as_argument: bool,
    ) -> Type {
        let Some(id) = self.table.lookup(name) else {
            self.reporter
                .report(ErrorCode::UndeclaredIdentifier, Some(name.to_string()), pos);
            return Type::Error;
        };
        *symbol = Some(id);

        let (kind, ty) = {
            let record = self.table.symbol(id);
            (record.kind, record.ty.clone())
        };
        if kind == SymbolKind::Function {
            self.reporter
                .report(ErrorCode::ScalarExpected, Some(name.to_string()), pos);
            return Type::Error;
        }
        if ty.is_array() && !as_argument {
            self.reporter
                .report(ErrorCode::ScalarExpected, Some(name.to_string()), pos);
            return Type::Error;
        }
        ty
    }

    /// The left side of an assignment: a simple variable (not a
    /// function, not a bare array) or an array-index expression.
    fn check_lvalue(&mut self, target: &mut Expr) -> Type {
        if matches!(target.kind, ExprKind::Index { .. }) {
            return self.check_expr(target);
        }

        if !matches!(target.kind, ExprKind::Var { .. }) {
            self.check_expr(target);
            self.reporter
                .report(ErrorCode::InvalidLValue, None, target.pos);
            return Type::Error;
        }

        let target_pos = target.pos;
        let ty = {
            let ExprKind::Var { name, symbol } = &mut target.kind else {
                unreachable!()
            };
            match self.table.lookup(name) {
                None => {
                    self.reporter.report(
                        ErrorCode::UndeclaredIdentifier,
                        Some(name.clone()),
                        target_pos,
                    );
                    Type::Error
                }
                Some(id) => {
                    *symbol = Some(id);
                    let (kind, ty) = {
                        let record = self.table.symbol(id);
                        (record.kind, record.ty.clone())
                    };
                    if kind == SymbolKind::Function {
                        self.reporter.report(
                            ErrorCode::InvalidLValue,
                            Some(name.clone()),
                            target_pos,
                        );
                        Type::Error
                    } else if ty.is_array() {
                        self.reporter.report(
                            ErrorCode::ScalarExpected,
                            Some(name.clone()),
                            target_pos,
                        );
                        Type::Error
                    } else {
                        ty
                    }
                }
            }
        };

        target.ty = Some(ty.clone());
        ty
    }

    fn check_call(
        &mut self,
        name: &str,
        symbol: &mut Option<SymbolId>,
        args: &mut [Expr],
        pos: SourcePos,
    ) -> Type {
        let Some(id) = self.table.lookup(name) else {
            for arg in args.iter_mut() {
                self.check_arg(arg);
            }
            self.reporter
                .report(ErrorCode::UndeclaredIdentifier, Some(name.to_string()), pos);
            return Type::Error;
        };
        *symbol = Some(id);

        let (kind, return_type, params) = {
            let record = self.table.symbol(id);
            (record.kind, record.ty.clone(), record.params.clone())
        };
        if kind != SymbolKind::Function {
            for arg in args.iter_mut() {
                self.check_arg(arg);
            }
            self.reporter
                .report(ErrorCode::NotAFunction, Some(name.to_string()), pos);
            return Type::Error;
        }

        // Every actual is visited, but matching stops at the shorter
        // list: one arity diagnostic, no per-arg noise past the end
        let mut excess_reported = false;
        for (i, arg) in args.iter_mut().enumerate() {
            let actual_ty = self.check_arg(arg);
            match params.get(i) {
                Some((formal_name, formal_ty)) => {
                    self.check_arg_type(formal_name, formal_ty, &actual_ty, arg);
                }
                None => {
                    if !excess_reported {
                        self.reporter
                            .report(ErrorCode::TooManyArguments, None, arg.pos);
                        excess_reported = true;
                    }
                }
            }
        }
        if args.len() < params.len() {
            self.reporter.report(ErrorCode::TooFewArguments, None, pos);
        }

        return_type
    }

    /// Actual-argument expressions: the one context where a bare array
    /// identifier is legal.
    fn check_arg(&mut self, arg: &mut Expr) -> Type {
        if !matches!(arg.kind, ExprKind::Var { .. }) {
            return self.check_expr(arg);
        }

        let arg_pos = arg.pos;
        let ty = {
            let ExprKind::Var { name, symbol } = &mut arg.kind else {
                unreachable!()
            };
            self.check_var_ref(name, symbol, arg_pos, true)
        };
        arg.ty = Some(ty.clone());
        ty
    }

    fn check_arg_type(
        &mut self,
        formal_name: &str,
        formal_ty: &Type,
        actual_ty: &Type,
        arg: &mut Expr,
    ) {
        match (formal_ty, actual_ty) {
            // arrays are matched element type to element type, with no
            // promotion across the array boundary
            (Type::Array { elem: formal_elem, .. }, Type::Array { elem: actual_elem, .. }) => {
                if !formal_elem.assignable(actual_elem) {
                    self.reporter.report(
                        ErrorCode::WrongArgumentType,
                        Some(formal_name.to_string()),
                        arg.pos,
                    );
                }
            }
            (_, Type::Error) => {}
            (Type::Array { .. }, _) | (_, Type::Array { .. }) => {
                self.reporter.report(
                    ErrorCode::WrongArgumentType,
                    Some(formal_name.to_string()),
                    arg.pos,
                );
            }
            (formal, actual) => {
                if formal.assignable(actual) {
                    widen(formal, arg);
                } else {
                    self.reporter.report(
                        ErrorCode::WrongArgumentType,
                        Some(formal_name.to_string()),
                        arg.pos,
                    );
                }
            }
        }
    }
}

/// Wraps an int-typed expression in the synthetic int-to-float
/// conversion node, re-parenting the original expression under it. An
/// existing wrapper is never wrapped again.
fn promote_to_float(expr: &mut Expr) {
    if matches!(expr.kind, ExprKind::IntToFloat { .. }) {
        return;
    }
    let pos = expr.pos;
    let inner = std::mem::replace(expr, Expr::new(ExprKind::Empty, pos));
    *expr = Expr {
        kind: ExprKind::IntToFloat {
            operand: Box::new(inner),
        },
        ty: Some(Type::Float),
        pos,
    };
}

/// Applies the one legal widening when a value lands in a typed slot:
/// an int-typed expression feeding a float target is promoted.
fn widen(target: &Type, expr: &mut Expr) {
    if *target == Type::Float && matches!(expr.ty, Some(Type::Int)) {
        promote_to_float(expr);
    }
}
