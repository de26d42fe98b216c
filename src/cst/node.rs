use crate::{
    lexer::tokens::{Token, TokenKind},
    Position, Span,
};

/// Node kinds, one per grammar rule that produces a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    SourceFile,
    ExternDefinition,
    FunctionDefinition,
    Variadic,
    Statement,
    FunctionCall,
    Declaration,
    Expression,
    Literal,
    Integer,
    String,
    Char,
    Bool,
}

impl NodeKind {
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::SourceFile => "source_file",
            NodeKind::ExternDefinition => "extern_definition",
            NodeKind::FunctionDefinition => "function_definition",
            NodeKind::Variadic => "variadic",
            NodeKind::Statement => "statement",
            NodeKind::FunctionCall => "function_call",
            NodeKind::Declaration => "declaration",
            NodeKind::Expression => "expression",
            NodeKind::Literal => "literal",
            NodeKind::Integer => "integer",
            NodeKind::String => "string",
            NodeKind::Char => "char",
            NodeKind::Bool => "bool",
        }
    }
}

/// Named fields a node can attach to one of its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    Name,
    Variadic,
}

impl FieldName {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Variadic => "variadic",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Child {
    Token(Token),
    Node(Node),
}

impl Child {
    pub fn span(&self) -> &Span {
        match self {
            Child::Token(token) => &token.span,
            Child::Node(node) => &node.span,
        }
    }

    pub fn as_token(&self) -> Option<&Token> {
        match self {
            Child::Token(token) => Some(token),
            Child::Node(_) => None,
        }
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Child::Node(node) => Some(node),
            Child::Token(_) => None,
        }
    }

    pub fn is_extra(&self) -> bool {
        matches!(self, Child::Token(token) if token.is_extra())
    }
}

/// A concrete syntax tree node.
///
/// Children hold every token the node spans, extras included, in source
/// order. Fields only index into `children`; they never own a child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    pub children: Vec<Child>,
    pub fields: Vec<(FieldName, usize)>,
    pub span: Span,
}

impl Node {
    /// First child recorded under `name`.
    pub fn field(&self, name: FieldName) -> Option<&Child> {
        self.fields(name).next()
    }

    /// Every child recorded under `name`, in source order.
    pub fn fields(&self, name: FieldName) -> impl Iterator<Item = &Child> {
        self.fields
            .iter()
            .filter(move |(field, _)| *field == name)
            .filter_map(|(_, index)| self.children.get(*index))
    }

    /// The field name attached to the child at `index`, if any.
    pub fn field_name_for(&self, index: usize) -> Option<FieldName> {
        self.fields
            .iter()
            .find(|(_, child)| *child == index)
            .map(|(field, _)| *field)
    }

    pub fn child_nodes(&self) -> impl Iterator<Item = &Node> {
        self.children.iter().filter_map(Child::as_node)
    }

    /// Direct children that take part in the grammar (no extras).
    pub fn significant_children(&self) -> impl Iterator<Item = &Child> {
        self.children.iter().filter(|child| !child.is_extra())
    }

    /// All leaf tokens under this node in source order, extras included.
    pub fn tokens(&self) -> Vec<&Token> {
        let mut tokens = Vec::new();
        self.collect_tokens(&mut tokens);
        tokens
    }

    fn collect_tokens<'a>(&'a self, tokens: &mut Vec<&'a Token>) {
        for child in &self.children {
            match child {
                Child::Token(token) => tokens.push(token),
                Child::Node(node) => node.collect_tokens(tokens),
            }
        }
    }

    /// The exact source text this node spans, rebuilt from its leaves.
    pub fn text(&self) -> String {
        self.tokens().iter().map(|token| token.value.as_str()).collect()
    }

    pub fn as_statement(&self) -> Option<StatementRef<'_>> {
        if self.kind != NodeKind::Statement {
            return None;
        }

        let inner = self.child_nodes().next()?;
        match inner.kind {
            NodeKind::FunctionCall => Some(StatementRef::FunctionCall(inner)),
            NodeKind::Declaration => Some(StatementRef::Declaration(inner)),
            _ => None,
        }
    }

    pub fn as_expression(&self) -> Option<ExpressionRef<'_>> {
        if self.kind != NodeKind::Expression {
            return None;
        }

        match self.significant_children().next()? {
            Child::Token(token) if token.kind == TokenKind::Identifier => {
                Some(ExpressionRef::Identifier(token))
            }
            Child::Node(node) if node.kind == NodeKind::Literal => Some(ExpressionRef::Literal(node)),
            _ => None,
        }
    }

    pub fn as_literal(&self) -> Option<LiteralRef<'_>> {
        if self.kind != NodeKind::Literal {
            return None;
        }

        let inner = self.child_nodes().next()?;
        match inner.kind {
            NodeKind::Integer => Some(LiteralRef::Integer(inner)),
            NodeKind::String => Some(LiteralRef::String(inner)),
            NodeKind::Char => Some(LiteralRef::Char(inner)),
            NodeKind::Bool => Some(LiteralRef::Bool(inner)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementRef<'a> {
    FunctionCall(&'a Node),
    Declaration(&'a Node),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpressionRef<'a> {
    Identifier(&'a Token),
    Literal(&'a Node),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralRef<'a> {
    Integer(&'a Node),
    String(&'a Node),
    Char(&'a Node),
    Bool(&'a Node),
}

/// Accumulates the children of a node while its rule is being parsed.
pub struct NodeBuilder {
    kind: NodeKind,
    children: Vec<Child>,
    fields: Vec<(FieldName, usize)>,
}

impl NodeBuilder {
    pub fn new(kind: NodeKind) -> Self {
        NodeBuilder {
            kind,
            children: Vec::new(),
            fields: Vec::new(),
        }
    }

    /// Appends a child and returns its index.
    pub fn push(&mut self, child: Child) -> usize {
        self.children.push(child);
        self.children.len() - 1
    }

    pub fn field(&mut self, name: FieldName, index: usize) {
        debug_assert!(index < self.children.len());
        self.fields.push((name, index));
    }

    /// Closes the node. Its span runs from the first child to the last;
    /// a childless node sits at `empty_at`.
    pub fn finish(self, empty_at: Position) -> Node {
        let span = match (self.children.first(), self.children.last()) {
            (Some(first), Some(last)) => Span {
                start: first.span().start.clone(),
                end: last.span().end.clone(),
            },
            _ => Span {
                start: empty_at.clone(),
                end: empty_at,
            },
        };

        Node {
            kind: self.kind,
            children: self.children,
            fields: self.fields,
            span,
        }
    }
}
