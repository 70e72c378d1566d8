use crate::clock::{DATE_TARGET, TIME_TARGET};
use crate::forms::StudentForm;
use crate::registry::{ACTIVE, Element, MemoryRegistry};
use crate::tabs::{PanelGroup, SUB_TABS, TABS, activator_key};

pub const TAB_KEYS: [&str; 2] = ["students", "library"];
pub const SUB_TAB_KEYS: [&str; 2] = ["dashboard", "graduation"];

/// Builds the registry for the portal page, with the first tab and the
/// first sub-tab selected.
pub fn standard_page() -> MemoryRegistry {
    let mut page = MemoryRegistry::default();
    add_group(&mut page, &TABS, &TAB_KEYS);
    add_group(&mut page, &SUB_TABS, &SUB_TAB_KEYS);

    for form in [StudentForm::Dashboard, StudentForm::Graduation] {
        page.insert(Element::new(form.input_key()).with_class("student-id-input"));
    }
    page.insert(Element::new(TIME_TARGET).with_class("clock"));
    page.insert(Element::new(DATE_TARGET).with_class("clock"));
    page
}

fn add_group(page: &mut MemoryRegistry, group: &PanelGroup, keys: &[&str]) {
    for (index, key) in keys.iter().enumerate() {
        let mut panel = Element::new(*key).with_class(group.panel_class);
        let mut button = Element::new(activator_key(key)).with_class(group.activator_class);
        if index == 0 {
            panel.add_class(ACTIVE);
            button.add_class(ACTIVE);
        }
        page.insert(panel);
        page.insert(button);
    }
}
