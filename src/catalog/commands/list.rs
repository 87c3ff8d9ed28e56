use crate::commands::CmdResult;
use crate::filter;
use crate::join::Catalog;
use crate::state::ViewState;
use tracing::debug;

/// Recomputes the visible products for `state` over the whole catalog.
pub fn run(catalog: &Catalog, state: &ViewState) -> CmdResult {
    let criteria = state.criteria();
    let visible: Vec<_> = filter::apply(catalog.products(), &criteria)
        .into_iter()
        .cloned()
        .collect();

    debug!(
        user_id = criteria.user_id,
        query = %criteria.query,
        categories = ?criteria.category_ids,
        matched = visible.len(),
        total = catalog.products().len(),
        "filter recomputed"
    );

    CmdResult::default().with_listed_products(visible)
}
