//! Full field-merge checking walks every pair of selections that land on the
//! same response key anywhere in the merged selection set — including
//! across fragment spreads and sibling selection sets — and compares
//! arguments and field names. That's the most involved rule in the
//! reference validation suite and sits right next to the query-planning
//! concerns this engine doesn't cover; left unimplemented here.

use crate::validation::traits::Visitor;

#[derive(Default)]
pub struct OverlappingFieldsCanBeMerged;

pub fn factory() -> OverlappingFieldsCanBeMerged {
    OverlappingFieldsCanBeMerged
}

impl<'a, CtxT> Visitor<'a, CtxT> for OverlappingFieldsCanBeMerged {}
