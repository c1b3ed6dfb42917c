use std::fmt::{Display, Formatter, Result};

use super::{ast::Node, statements::CompoundStmt};

const INDENT: &str = "  ";

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write_node(f, self, 0)
    }
}

impl Display for CompoundStmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write_compound(f, self, 0)
    }
}

fn write_line(f: &mut Formatter<'_>, depth: usize, text: &str) -> Result {
    writeln!(f, "{}{}", INDENT.repeat(depth), text)
}

fn write_compound(f: &mut Formatter<'_>, compound: &CompoundStmt, depth: usize) -> Result {
    write_line(f, depth, "Compound")?;
    for stmt in compound.iter() {
        write_node(f, stmt, depth + 1)?;
    }
    Ok(())
}

fn write_node(f: &mut Formatter<'_>, node: &Node, depth: usize) -> Result {
    match node {
        Node::VarDef(stmt) => match &stmt.value {
            Some(value) => {
                write_line(f, depth, &format!("VarDef {} {}", stmt.data_type, stmt.name))?;
                write_node(f, value, depth + 1)
            }
            None => write_line(
                f,
                depth,
                &format!("VarDef {} {} (no value)", stmt.data_type, stmt.name),
            ),
        },
        Node::Variable(expr) => write_line(f, depth, &format!("Variable {}", expr.name)),
        Node::FnDef(stmt) => {
            let parameters = stmt
                .parameters
                .iter()
                .map(|parameter| format!("{} {}", parameter.data_type, parameter.name))
                .collect::<Vec<_>>()
                .join(", ");

            write_line(
                f,
                depth,
                &format!("FnDef {} {}({})", stmt.return_type, stmt.name, parameters),
            )?;
            write_compound(f, &stmt.body, depth + 1)
        }
        Node::Call(expr) => {
            write_line(f, depth, &format!("Call {}", expr.name))?;
            for argument in &expr.arguments {
                write_node(f, argument, depth + 1)?;
            }
            Ok(())
        }
        Node::Literal(expr) => write_line(f, depth, &format!("Literal {}", expr.value)),
        Node::Assignment(stmt) => {
            write_line(f, depth, &format!("Assignment {} {}", stmt.target, stmt.operator))?;
            match &stmt.value {
                Some(value) => write_node(f, value, depth + 1),
                None => Ok(()),
            }
        }
        Node::Compound(compound) => write_compound(f, compound, depth),
        Node::If(stmt) => {
            write_line(f, depth, "If")?;
            write_node(f, &stmt.condition, depth + 1)?;
            write_compound(f, &stmt.then_body, depth + 1)?;
            if let Some(else_body) = &stmt.else_body {
                write_line(f, depth, "Else")?;
                write_node(f, else_body, depth + 1)?;
            }
            Ok(())
        }
        Node::While(stmt) => {
            write_line(f, depth, "While")?;
            write_node(f, &stmt.condition, depth + 1)?;
            write_compound(f, &stmt.body, depth + 1)
        }
        Node::For(stmt) => {
            write_line(f, depth, "For")?;
            write_node(f, &stmt.init, depth + 1)?;
            write_node(f, &stmt.condition, depth + 1)?;
            write_node(f, &stmt.step, depth + 1)?;
            write_compound(f, &stmt.body, depth + 1)
        }
        Node::Return(stmt) => {
            write_line(f, depth, "Return")?;
            match &stmt.value {
                Some(value) => write_node(f, value, depth + 1),
                None => Ok(()),
            }
        }
        Node::Goto(stmt) => write_line(f, depth, &format!("Goto {}", stmt.label)),
        Node::Break(_) => write_line(f, depth, "Break"),
        Node::Continue(_) => write_line(f, depth, "Continue"),
        Node::Binary(expr) => {
            write_line(f, depth, &format!("Binary {}", expr.operator))?;
            write_node(f, &expr.left, depth + 1)?;
            write_node(f, &expr.right, depth + 1)
        }
        Node::Unary(expr) => {
            write_line(f, depth, &format!("Unary {}", expr.operator))?;
            write_node(f, &expr.operand, depth + 1)
        }
        Node::NoOp => write_line(f, depth, "NoOp"),
    }
}
