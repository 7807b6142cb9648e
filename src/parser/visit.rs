use super::ast::{ClassDef, Expr, FunctionDef, Module, Stmt};

/// Visitor over the parsed tree. Each structural rule implements the hooks
/// it cares about and ignores the rest.
pub trait Visit {
    fn visit_function_def(&mut self, _def: &FunctionDef) {}
    fn visit_class_def(&mut self, _def: &ClassDef) {}
    fn visit_name(&mut self, _id: &str, _line: usize) {}
}

/// Depth-first pre-order walk over every node of the module.
pub fn walk_module(module: &Module, visitor: &mut dyn Visit) {
    walk_stmts(&module.body, visitor);
}

fn walk_stmts(stmts: &[Stmt], visitor: &mut dyn Visit) {
    for stmt in stmts {
        match stmt {
            Stmt::FunctionDef(def) => {
                visitor.visit_function_def(def);
                for expr in &def.defaults {
                    walk_expr(expr, visitor);
                }
                walk_stmts(&def.body, visitor);
            }
            Stmt::ClassDef(def) => {
                visitor.visit_class_def(def);
                for expr in &def.bases {
                    walk_expr(expr, visitor);
                }
                walk_stmts(&def.body, visitor);
            }
            Stmt::Plain(plain) => {
                for expr in &plain.exprs {
                    walk_expr(expr, visitor);
                }
            }
        }
    }
}

fn walk_expr(expr: &Expr, visitor: &mut dyn Visit) {
    match expr {
        Expr::Name { id, line } => visitor.visit_name(id, *line),
        Expr::List { names, .. }
        | Expr::Dict { names, .. }
        | Expr::Set { names, .. }
        | Expr::Tuple { names, .. }
        | Expr::Call { names, .. }
        | Expr::Other { names, .. } => {
            for name in names {
                walk_expr(name, visitor);
            }
        }
        Expr::Number { .. } | Expr::Str { .. } => {}
    }
}
