use std::fmt;

/// The root of a parsed source text.
///
/// A program is the ordered sequence of top-level statements produced by the
/// parser. Its string form concatenates the string forms of its statements
/// without a separator, which makes precedence-sensitive golden tests short:
///
/// ```
/// let (program, errors) = kestrel::parse("3 + 4; -5 * 5");
///
/// assert!(errors.is_empty());
/// assert_eq!(program.to_string(), "(3 + 4)((-5) * 5)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    /// Top-level statements in source order.
    pub statements: Vec<Statement>,
}

/// A bare name, used both as an expression and as a binding target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    /// The name as written in the source.
    pub name: String,
    /// Line number in the source code.
    pub line: usize,
}

/// A brace-delimited sequence of statements.
///
/// Blocks appear as the branches of `if` expressions and as function bodies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockStatement {
    /// Statements inside the block.
    pub statements: Vec<Statement>,
    /// Line number of the opening brace.
    pub line:       usize,
}

/// An abstract syntax tree (AST) node representing a statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// A binding introduced with `let`.
    Let {
        /// The bound name.
        name:  Identifier,
        /// The initial value.
        value: Expression,
        /// Line number in the source code.
        line:  usize,
    },
    /// `return <expr>`, which stops the enclosing function or program.
    Return {
        /// The returned expression.
        value: Expression,
        /// Line number in the source code.
        line:  usize,
    },
    /// A standalone expression evaluated for its result.
    Expression {
        /// The expression to evaluate.
        expr: Expression,
        /// Line number in the source code.
        line: usize,
    },
    /// A nested block.
    Block(BlockStatement),
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Every variant owns its children exclusively; the tree has no sharing and
/// no cycles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// Reference to a binding by name.
    Identifier(Identifier),
    /// A 64-bit signed integer literal.
    IntegerLiteral {
        /// The literal value.
        value: i64,
        /// Line number in the source code.
        line:  usize,
    },
    /// `true` or `false`.
    BooleanLiteral {
        /// The literal value.
        value: bool,
        /// Line number in the source code.
        line:  usize,
    },
    /// A prefix (unary) operation such as `-x` or `!x`.
    Prefix {
        /// The operator to apply.
        operator: PrefixOperator,
        /// The operand expression.
        right:    Box<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// An infix (binary) operation such as `a + b`.
    Infix {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        operator: InfixOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// `if (<condition>) { ... } else { ... }`.
    If {
        /// The condition expression.
        condition:   Box<Self>,
        /// Block evaluated if the condition is truthy.
        consequence: BlockStatement,
        /// Block evaluated otherwise, if present.
        alternative: Option<BlockStatement>,
        /// Line number in the source code.
        line:        usize,
    },
    /// `fn(<parameters>) { <body> }`.
    FunctionLiteral {
        /// Parameter names in declaration order.
        parameters: Vec<Identifier>,
        /// The function body.
        body:       BlockStatement,
        /// Line number in the source code.
        line:       usize,
    },
    /// Function application: `<callee>(<arguments>)`.
    Call {
        /// The expression producing the function.
        callee:    Box<Self>,
        /// Argument expressions in call order.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
}

impl Expression {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use kestrel::ast::Expression;
    ///
    /// let expr = Expression::IntegerLiteral { value: 5,
    ///                                         line:  3, };
    ///
    /// assert_eq!(expr.line_number(), 3);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Identifier(Identifier { line, .. })
            | Self::IntegerLiteral { line, .. }
            | Self::BooleanLiteral { line, .. }
            | Self::Prefix { line, .. }
            | Self::Infix { line, .. }
            | Self::If { line, .. }
            | Self::FunctionLiteral { line, .. }
            | Self::Call { line, .. } => *line,
        }
    }
}

impl Statement {
    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Let { line, .. } | Self::Return { line, .. } | Self::Expression { line, .. } => {
                *line
            },
            Self::Block(block) => block.line,
        }
    }
}

/// Represents a prefix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PrefixOperator {
    /// Logical NOT (`!x`).
    Not,
    /// Arithmetic negation (`-x`).
    Negate,
}

/// Represents an infix operator.
///
/// Binary operators include arithmetic and comparisons.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InfixOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

impl fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Not => write!(f, "!"),
            Self::Negate => write!(f, "-"),
        }
    }
}

impl fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Less => "<",
            Self::Greater => ">",
            Self::Equal => "==",
            Self::NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ ")?;
        for statement in &self.statements {
            write!(f, "{statement} ")?;
        }
        write!(f, "}}")
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Let { name, value, .. } => write!(f, "let {name} = {value};"),
            Self::Return { value, .. } => write!(f, "return {value};"),
            Self::Expression { expr, .. } => write!(f, "{expr}"),
            Self::Block(block) => write!(f, "{block}"),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(identifier) => write!(f, "{identifier}"),
            Self::IntegerLiteral { value, .. } => write!(f, "{value}"),
            Self::BooleanLiteral { value, .. } => write!(f, "{value}"),
            Self::Prefix { operator, right, .. } => write!(f, "({operator}{right})"),
            Self::Infix { left,
                          operator,
                          right,
                          .. } => write!(f, "({left} {operator} {right})"),
            Self::If { condition,
                       consequence,
                       alternative,
                       .. } => {
                write!(f, "if {condition} {consequence}")?;
                if let Some(alternative) = alternative {
                    write!(f, " else {alternative}")?;
                }
                Ok(())
            },
            Self::FunctionLiteral { parameters, body, .. } => {
                write!(f, "fn({}) {body}", join(parameters))
            },
            Self::Call { callee, arguments, .. } => write!(f, "{callee}({})", join(arguments)),
        }
    }
}

/// Renders a list of nodes separated by `", "`.
fn join<T: fmt::Display>(items: &[T]) -> String {
    items.iter()
         .map(ToString::to_string)
         .collect::<Vec<_>>()
         .join(", ")
}
