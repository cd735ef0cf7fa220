//! Checking that a variable's declared type is assignable to every position
//! it's used in (accounting for the position's own default value) needs the
//! same fragment-reachability walk as `no_undefined_variables`, plus
//! `SchemaType::is_subtype`. Left unimplemented for now; an incompatible
//! variable usage surfaces as a coercion failure at execution time instead.

use crate::validation::traits::Visitor;

#[derive(Default)]
pub struct VariablesInAllowedPosition;

pub fn factory() -> VariablesInAllowedPosition {
    VariablesInAllowedPosition
}

impl<'a, CtxT> Visitor<'a, CtxT> for VariablesInAllowedPosition {}
