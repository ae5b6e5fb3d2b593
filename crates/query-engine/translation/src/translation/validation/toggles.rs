//! Evaluate the toggles against a resolved request.

use query_engine_metadata::metadata::{Toggle, Toggles};

use super::Resolved;
use crate::translation::error::Error;

/// Capability toggles, in the order they are checked, with the test for whether a request uses
/// the capability at all.
const CAPABILITY_TOGGLES: [(Toggle, fn(&Resolved) -> bool); 5] = [
    (Toggle::Search, uses_search),
    (Toggle::Projection, uses_projection),
    (Toggle::Sorting, uses_sorting),
    (Toggle::Pagination, uses_pagination),
    (Toggle::Conditioning, uses_conditioning),
];

fn uses_search(request: &Resolved) -> bool {
    !request.search.is_empty()
}

fn uses_projection(request: &Resolved) -> bool {
    !request.projection.is_empty()
}

fn uses_sorting(request: &Resolved) -> bool {
    !request.sort.is_empty()
}

/// Checked against the requested values, before clamping.
fn uses_pagination(request: &Resolved) -> bool {
    request.pagination.limit > 0 || request.pagination.offset > 0
}

fn uses_conditioning(request: &Resolved) -> bool {
    !request.conditions.is_empty()
}

pub(super) fn check(toggles: &Toggles, request: &mut Resolved) -> Result<(), Error> {
    if toggles.disable_total_count {
        request.total_count = false;
    }

    for (toggle, used) in CAPABILITY_TOGGLES {
        if toggles.is_disabled(toggle) && used(request) {
            return Err(Error::ToggleDisabled(toggle));
        }
    }

    for condition in &request.conditions {
        if let Some(operator) = condition
            .operators
            .present()
            .find(|operator| toggles.is_disabled(Toggle::Operator(*operator)))
        {
            return Err(Error::ToggleDisabled(Toggle::Operator(operator)));
        }
    }

    for sort in &request.sort {
        let toggle = Toggle::Direction(sort.direction);
        if toggles.is_disabled(toggle) {
            return Err(Error::ToggleDisabled(toggle));
        }
    }

    Ok(())
}
