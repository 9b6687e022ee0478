use super::{Expression, NodeId, StmtList, structural_eq};

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Define(Define),
    Assign(Assign),
    Expression(Expression),
}

impl Statement {
    pub fn id(&self) -> NodeId {
        match self {
            Statement::Define(define) => define.id,
            Statement::Assign(assign) => assign.id,
            Statement::Expression(expr) => expr.id,
        }
    }

    pub fn assign(name: impl Into<String>, value: Expression) -> Self {
        Statement::Assign(Assign::new(name, value))
    }
}

#[derive(Debug, Clone)]
pub struct Assign {
    pub id: NodeId,
    pub name: String,
    pub value: Expression,
}

impl Assign {
    pub fn new(name: impl Into<String>, value: Expression) -> Self {
        Self {
            id: NodeId::fresh(),
            name: name.into(),
            value,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Param {
    pub id: NodeId,
    pub name: String,
}

impl Param {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: NodeId::fresh(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ParamList {
    pub id: NodeId,
    pub params: Vec<Param>,
}

impl ParamList {
    pub fn new(params: Vec<Param>) -> Self {
        Self {
            id: NodeId::fresh(),
            params,
        }
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|param| param.name.as_str())
    }
}

/// A named function definition: `name(params) = body`
#[derive(Debug, Clone)]
pub struct Define {
    pub id: NodeId,
    pub name: String,
    pub params: ParamList,
    pub body: StmtList,
}

impl Define {
    pub fn new(name: impl Into<String>, params: ParamList, body: StmtList) -> Self {
        Self {
            id: NodeId::fresh(),
            name: name.into(),
            params,
            body,
        }
    }
}

structural_eq! {
    Assign => [name, value];
    Param => [name];
    ParamList => [params];
    Define => [name, params, body];
}
