#[cfg(test)]
mod tests {
    use crate::ast::{BinaryOperator, Decl, Expr, ExprKind, Program, Stmt, Type};
    use crate::lexer::tokenize;
    use crate::parser::parse;

    fn parse_source(source: &str) -> Program {
        let tokens = tokenize(source).unwrap();
        parse(&tokens).unwrap()
    }

    #[test]
    fn test_global_var_declaration() {
        let program = parse_source("int x = 42;");

        match &program.decls[0] {
            Decl::Var(var) => {
                assert_eq!(var.name, "x");
                assert_eq!(var.var_type, Type::Int);
                match &var.init {
                    Some(Expr {
                        kind: ExprKind::IntLit(42),
                        ..
                    }) => (),
                    _ => panic!("Expected integer literal 42"),
                }
            }
            _ => panic!("Expected variable declaration"),
        }
    }

    #[test]
    fn test_multi_declarator_list() {
        let program = parse_source("int i, j[3];");

        assert_eq!(program.decls.len(), 2);
        match &program.decls[0] {
            Decl::Var(var) => assert_eq!(var.name, "i"),
            _ => panic!("Expected variable declaration"),
        }
        match &program.decls[1] {
            Decl::Var(var) => {
                assert_eq!(var.name, "j");
                match &var.var_type {
                    Type::Array { elem, size } => {
                        assert_eq!(**elem, Type::Int);
                        assert_eq!(*size, Some(3));
                    }
                    _ => panic!("Expected array type"),
                }
            }
            _ => panic!("Expected variable declaration"),
        }
    }

    #[test]
    fn test_function_declaration() {
        let program = parse_source("int add(int x, float y) { return x; }");

        match &program.decls[0] {
            Decl::Func(func) => {
                assert_eq!(func.name, "add");
                assert_eq!(func.return_type, Type::Int);
                assert_eq!(func.params.len(), 2);
                assert_eq!(func.params[0].name, "x");
                assert_eq!(func.params[0].param_type, Type::Int);
                assert_eq!(func.params[1].name, "y");
                assert_eq!(func.params[1].param_type, Type::Float);
                match &func.body {
                    Stmt::Compound { decls, stmts, .. } => {
                        assert!(decls.is_empty());
                        assert_eq!(stmts.len(), 1);
                    }
                    _ => panic!("Expected compound body"),
                }
            }
            _ => panic!("Expected function declaration"),
        }
    }

    #[test]
    fn test_array_parameter_without_size() {
        let program = parse_source("void f(int a[]) { }");

        match &program.decls[0] {
            Decl::Func(func) => match &func.params[0].param_type {
                Type::Array { elem, size } => {
                    assert_eq!(**elem, Type::Int);
                    assert_eq!(*size, None);
                }
                _ => panic!("Expected array parameter type"),
            },
            _ => panic!("Expected function declaration"),
        }
    }

    #[test]
    fn test_dangling_else_binds_to_inner_if() {
        let program = parse_source("int main() { if (a) if (b) c = 1; else c = 2; }");

        let stmts = match &program.decls[0] {
            Decl::Func(func) => match &func.body {
                Stmt::Compound { stmts, .. } => stmts,
                _ => panic!("Expected compound body"),
            },
            _ => panic!("Expected function declaration"),
        };

        match &stmts[0] {
            Stmt::If {
                then_branch,
                else_branch,
                ..
            } => {
                assert!(else_branch.is_none());
                match &**then_branch {
                    Stmt::If { else_branch, .. } => assert!(else_branch.is_some()),
                    _ => panic!("Expected nested if"),
                }
            }
            _ => panic!("Expected if statement"),
        }
    }

    #[test]
    fn test_empty_for_slots() {
        let program = parse_source("int main() { for (;;) break; }");

        let stmts = match &program.decls[0] {
            Decl::Func(func) => match &func.body {
                Stmt::Compound { stmts, .. } => stmts,
                _ => panic!("Expected compound body"),
            },
            _ => panic!("Expected function declaration"),
        };

        match &stmts[0] {
            Stmt::For {
                init, cond, step, ..
            } => {
                assert!(init.is_none());
                assert!(cond.is_none());
                assert!(step.is_none());
            }
            _ => panic!("Expected for statement"),
        }
    }

    #[test]
    fn test_precedence() {
        let program = parse_source("int main() { x = 1 + 2 * 3; }");

        let stmts = match &program.decls[0] {
            Decl::Func(func) => match &func.body {
                Stmt::Compound { stmts, .. } => stmts,
                _ => panic!("Expected compound body"),
            },
            _ => panic!("Expected function declaration"),
        };

        match &stmts[0] {
            Stmt::Expr(Expr {
                kind: ExprKind::Assign { value, .. },
                ..
            }) => match &value.kind {
                ExprKind::Binary {
                    op: BinaryOperator::Plus,
                    left,
                    right,
                    ..
                } => {
                    assert!(matches!(left.kind, ExprKind::IntLit(1)));
                    assert!(matches!(
                        right.kind,
                        ExprKind::Binary {
                            op: BinaryOperator::Star,
                            ..
                        }
                    ));
                }
                _ => panic!("Expected addition at the top"),
            },
            _ => panic!("Expected assignment statement"),
        }
    }

    #[test]
    fn test_assignment_is_right_associative() {
        let program = parse_source("int main() { a = b = 1; }");

        let stmts = match &program.decls[0] {
            Decl::Func(func) => match &func.body {
                Stmt::Compound { stmts, .. } => stmts,
                _ => panic!("Expected compound body"),
            },
            _ => panic!("Expected function declaration"),
        };

        match &stmts[0] {
            Stmt::Expr(Expr {
                kind: ExprKind::Assign { target, value },
                ..
            }) => {
                assert!(matches!(&target.kind, ExprKind::Var { name, .. } if name == "a"));
                assert!(matches!(value.kind, ExprKind::Assign { .. }));
            }
            _ => panic!("Expected assignment statement"),
        }
    }

    #[test]
    fn test_call_and_index_postfix() {
        let program = parse_source("int main() { f(a[0], 2.5); }");

        let stmts = match &program.decls[0] {
            Decl::Func(func) => match &func.body {
                Stmt::Compound { stmts, .. } => stmts,
                _ => panic!("Expected compound body"),
            },
            _ => panic!("Expected function declaration"),
        };

        match &stmts[0] {
            Stmt::Expr(Expr {
                kind: ExprKind::Call { name, args, .. },
                ..
            }) => {
                assert_eq!(name, "f");
                assert_eq!(args.len(), 2);
                assert!(matches!(args[0].kind, ExprKind::Index { .. }));
                assert!(matches!(args[1].kind, ExprKind::FloatLit(_)));
            }
            _ => panic!("Expected call statement"),
        }
    }

    #[test]
    fn test_brace_initializer() {
        let program = parse_source("int a[] = {1, 2, 3};");

        match &program.decls[0] {
            Decl::Var(var) => {
                match &var.var_type {
                    Type::Array { size, .. } => assert_eq!(*size, None),
                    _ => panic!("Expected array type"),
                }
                match &var.init {
                    Some(Expr {
                        kind: ExprKind::ArrayInit { elements },
                        ..
                    }) => assert_eq!(elements.len(), 3),
                    _ => panic!("Expected initializer list"),
                }
            }
            _ => panic!("Expected variable declaration"),
        }
    }

    #[test]
    fn test_locals_precede_statements() {
        let program = parse_source("int main() { int x; float y; x = 1; }");

        match &program.decls[0] {
            Decl::Func(func) => match &func.body {
                Stmt::Compound { decls, stmts, .. } => {
                    assert_eq!(decls.len(), 2);
                    assert_eq!(stmts.len(), 1);
                }
                _ => panic!("Expected compound body"),
            },
            _ => panic!("Expected function declaration"),
        }
    }

    #[test]
    fn test_missing_semicolon_is_error() {
        let tokens = tokenize("int x = 1").unwrap();
        assert!(parse(&tokens).is_err());
    }

    #[test]
    fn test_empty_statement() {
        let program = parse_source("int main() { ; }");

        match &program.decls[0] {
            Decl::Func(func) => match &func.body {
                Stmt::Compound { stmts, .. } => {
                    assert!(matches!(stmts[0], Stmt::Empty { .. }));
                }
                _ => panic!("Expected compound body"),
            },
            _ => panic!("Expected function declaration"),
        }
    }
}
