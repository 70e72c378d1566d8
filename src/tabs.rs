use crate::registry::{ACTIVE, UiRegistry};
use tracing::debug;

/// A set of mutually exclusive panels plus the buttons that drive them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelGroup {
    pub name: &'static str,
    pub panel_class: &'static str,
    pub activator_class: &'static str,
}

pub const TABS: PanelGroup = PanelGroup {
    name: "tabs",
    panel_class: "tab-content",
    activator_class: "tab-button",
};

pub const SUB_TABS: PanelGroup = PanelGroup {
    name: "sub-tabs",
    panel_class: "sub-tab-content",
    activator_class: "sub-tab-button",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activation {
    pub panel_shown: bool,
    pub activator_marked: bool,
}

/// Key of the button paired with a panel.
pub fn activator_key(panel_key: &str) -> String {
    format!("{panel_key}-button")
}

/// Shows `selected` within `group` and marks `activator` as selected.
///
/// Keys that do not resolve to a member of the group are skipped, so a
/// call never touches another group's elements.
pub fn activate<R>(
    registry: &mut R,
    group: &PanelGroup,
    selected: &str,
    activator: Option<&str>,
) -> Activation
where
    R: UiRegistry + ?Sized,
{
    for panel in registry.by_class_mut(group.panel_class) {
        panel.remove_class(ACTIVE);
    }
    for button in registry.by_class_mut(group.activator_class) {
        button.remove_class(ACTIVE);
    }

    let panel_shown = mark_member(registry, group.panel_class, selected);
    let activator_marked = activator
        .map(|key| mark_member(registry, group.activator_class, key))
        .unwrap_or(false);

    debug!(
        group = group.name,
        selected, panel_shown, activator_marked, "tab activation"
    );

    Activation {
        panel_shown,
        activator_marked,
    }
}

/// Key of the active panel in `group`, if any.
pub fn active_panel<R>(registry: &R, group: &PanelGroup) -> Option<String>
where
    R: UiRegistry + ?Sized,
{
    registry
        .by_class(group.panel_class)
        .into_iter()
        .find(|panel| panel.is_active())
        .map(|panel| panel.key.clone())
}

fn mark_member<R>(registry: &mut R, class: &str, key: &str) -> bool
where
    R: UiRegistry + ?Sized,
{
    match registry.by_key_mut(key) {
        Some(element) if element.has_class(class) => {
            element.add_class(ACTIVE);
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{Element, MemoryRegistry};

    fn registry() -> MemoryRegistry {
        let mut registry = MemoryRegistry::default();
        for key in ["students", "library"] {
            registry.insert(Element::new(key).with_class(TABS.panel_class));
            registry.insert(Element::new(activator_key(key)).with_class(TABS.activator_class));
        }
        for key in ["dashboard", "graduation"] {
            registry.insert(Element::new(key).with_class(SUB_TABS.panel_class));
            registry.insert(Element::new(activator_key(key)).with_class(SUB_TABS.activator_class));
        }
        registry
    }

    fn active_count(registry: &MemoryRegistry, class: &str) -> usize {
        registry
            .by_class(class)
            .into_iter()
            .filter(|element| element.is_active())
            .count()
    }

    #[test]
    fn activates_exactly_the_selected_panel() {
        let mut registry = registry();
        let result = activate(&mut registry, &TABS, "library", Some("library-button"));

        assert!(result.panel_shown);
        assert!(result.activator_marked);
        assert_eq!(active_panel(&registry, &TABS).as_deref(), Some("library"));
        assert_eq!(active_count(&registry, TABS.panel_class), 1);
        assert_eq!(active_count(&registry, TABS.activator_class), 1);
        assert!(registry.by_key("library-button").unwrap().is_active());
    }

    #[test]
    fn switching_deactivates_previous_panel() {
        let mut registry = registry();
        activate(&mut registry, &TABS, "library", Some("library-button"));
        activate(&mut registry, &TABS, "students", Some("students-button"));

        assert_eq!(active_panel(&registry, &TABS).as_deref(), Some("students"));
        assert!(!registry.by_key("library").unwrap().is_active());
        assert!(!registry.by_key("library-button").unwrap().is_active());
    }

    #[test]
    fn repeated_activation_is_idempotent() {
        let mut registry = registry();
        activate(&mut registry, &SUB_TABS, "graduation", Some("graduation-button"));
        let once = format!("{:?}", registry);
        activate(&mut registry, &SUB_TABS, "graduation", Some("graduation-button"));
        assert_eq!(once, format!("{:?}", registry));
    }

    #[test]
    fn unknown_key_leaves_group_empty() {
        let mut registry = registry();
        activate(&mut registry, &TABS, "students", Some("students-button"));
        let result = activate(&mut registry, &TABS, "nope", None);

        assert!(!result.panel_shown);
        assert!(!result.activator_marked);
        assert_eq!(active_count(&registry, TABS.panel_class), 0);
        assert_eq!(active_count(&registry, TABS.activator_class), 0);
    }

    #[test]
    fn groups_do_not_affect_each_other() {
        let mut registry = registry();
        activate(&mut registry, &TABS, "library", Some("library-button"));
        activate(&mut registry, &SUB_TABS, "dashboard", Some("dashboard-button"));

        assert_eq!(active_panel(&registry, &TABS).as_deref(), Some("library"));
        assert_eq!(active_panel(&registry, &SUB_TABS).as_deref(), Some("dashboard"));
        assert!(registry.by_key("library-button").unwrap().is_active());
    }

    #[test]
    fn keys_from_another_group_are_misses() {
        let mut registry = registry();
        activate(&mut registry, &SUB_TABS, "dashboard", Some("dashboard-button"));
        let result = activate(&mut registry, &TABS, "dashboard", Some("dashboard-button"));

        assert!(!result.panel_shown);
        assert!(!result.activator_marked);
        assert_eq!(active_panel(&registry, &SUB_TABS).as_deref(), Some("dashboard"));
        assert!(registry.by_key("dashboard-button").unwrap().is_active());
    }
}
