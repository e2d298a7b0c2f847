//! Theme entries for the component showcase toolbar.

use serde::Serialize;

use crate::catalog::list_variants;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// One selectable entry in the showcase theme toolbar.
pub struct ThemeToolbarItem {
    /// Variant id passed back to `ThemeResolver::apply_variant`.
    pub value: &'static str,
    /// Label shown to the user.
    pub title: &'static str,
    /// Icon tag.
    pub icon: &'static str,
}

/// Returns one toolbar item per catalog variant, in catalog order.
pub fn showcase_theme_items() -> Vec<ThemeToolbarItem> {
    list_variants()
        .into_iter()
        .map(|variant| ThemeToolbarItem {
            value: variant.id.as_str(),
            title: variant.name.as_str(),
            icon: variant.icon_or_default(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn one_item_per_variant_with_icons() {
        let items = showcase_theme_items();
        assert_eq!(items.len(), 9);
        assert_eq!(
            items[2],
            ThemeToolbarItem {
                value: "default-system",
                title: "Invana System",
                icon: "circle",
            }
        );
        assert!(items.iter().all(|item| !item.icon.is_empty()));
    }
}
