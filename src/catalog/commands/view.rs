use crate::commands::{controls, list, CmdResult};
use crate::join::Catalog;
use crate::state::ViewState;

/// Everything a client needs to draw one frame: both control rows and the table.
pub fn run(catalog: &Catalog, state: &ViewState) -> CmdResult {
    list::run(catalog, state)
        .with_user_controls(controls::users(catalog, state))
        .with_category_controls(controls::categories(catalog, state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::sample_catalog;

    #[test]
    fn combines_controls_and_products() {
        let catalog = sample_catalog();
        let mut state = ViewState::new();
        state.select_user(1);

        let result = run(&catalog, &state);
        assert_eq!(result.listed_products.len(), 4);
        assert_eq!(result.user_controls.len(), 4);
        assert_eq!(result.category_controls.len(), 4);
        assert!(result.user_controls[1].active);
    }
}
