//! Validator state threaded through every rule: schema-aware type tracking
//! ([`crate::type_info::TypeInfo`]) plus an append-only error sink.

use crate::ast::Loc;
use crate::error::FormattedError;
use crate::schema::model::SchemaType;
use crate::source::Source;
use crate::type_info::TypeInfo;

/// One validation failure: a message plus every location that contributed to
/// it (e.g. both occurrences of a duplicate name).
#[derive(Debug, Clone, PartialEq)]
pub struct RuleError {
    message: String,
    locations: Vec<Loc>,
}

impl RuleError {
    pub fn new(message: impl Into<String>, locations: &[Loc]) -> RuleError {
        RuleError { message: message.into(), locations: locations.to_vec() }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn locations(&self) -> &[Loc] {
        &self.locations
    }

    pub fn to_formatted(&self, source: &Source) -> FormattedError {
        FormattedError::new(self.message.clone()).at(self.locations.iter().map(|l| source.locate(l.start)).collect())
    }
}

pub struct ValidatorContext<'a, CtxT> {
    pub type_info: TypeInfo<'a, CtxT>,
    errors: Vec<RuleError>,
}

impl<'a, CtxT> ValidatorContext<'a, CtxT> {
    pub fn new(schema: &'a SchemaType<CtxT>) -> Self {
        ValidatorContext { type_info: TypeInfo::new(schema), errors: Vec::new() }
    }

    pub fn schema(&self) -> &'a SchemaType<CtxT> {
        self.type_info.schema()
    }

    pub fn report_error(&mut self, message: impl Into<String>, locations: &[Loc]) {
        self.errors.push(RuleError::new(message, locations));
    }

    pub fn into_errors(self) -> Vec<RuleError> {
        self.errors
    }
}
