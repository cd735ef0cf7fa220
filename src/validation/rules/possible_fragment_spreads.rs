//! A fragment spread's type condition should overlap the type of the
//! selection set it's spread into. [`crate::schema::model::SchemaType::type_overlap`]
//! already has what's needed to check that; wiring it up here (it needs the
//! spread's own type condition, not just the fragment definition it points
//! at) is left for later. A spread onto a disjoint type degrades to an empty
//! selection at execution time rather than a validation error for now.

use crate::validation::traits::Visitor;

#[derive(Default)]
pub struct PossibleFragmentSpreads;

pub fn factory() -> PossibleFragmentSpreads {
    PossibleFragmentSpreads
}

impl<'a, CtxT> Visitor<'a, CtxT> for PossibleFragmentSpreads {}
