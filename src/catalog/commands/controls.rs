use crate::commands::{CategoryControl, UserControl};
use crate::join::Catalog;
use crate::model::ALL_USERS;
use crate::state::ViewState;

pub const ALL_LABEL: &str = "All";

/// "All" followed by one entry per user, in source order.
pub fn users(catalog: &Catalog, state: &ViewState) -> Vec<UserControl> {
    let all = UserControl {
        id: ALL_USERS,
        label: ALL_LABEL.to_string(),
        sex: None,
        active: state.is_user_selected(ALL_USERS),
    };

    std::iter::once(all)
        .chain(catalog.users().iter().map(|user| UserControl {
            id: user.id,
            label: user.name.clone(),
            sex: Some(user.sex),
            active: state.is_user_selected(user.id),
        }))
        .collect()
}

/// "All" followed by one entry per category. "All" is selected when no category is.
pub fn categories(catalog: &Catalog, state: &ViewState) -> Vec<CategoryControl> {
    let all = CategoryControl {
        id: None,
        title: ALL_LABEL.to_string(),
        icon: None,
        selected: state.selected_category_ids().is_empty(),
    };

    std::iter::once(all)
        .chain(catalog.categories().iter().map(|category| CategoryControl {
            id: Some(category.id),
            title: category.title.clone(),
            icon: Some(category.icon.clone()),
            selected: state.is_category_selected(category.id),
        }))
        .collect()
}
