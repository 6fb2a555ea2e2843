//! Mobile navigation panel binding.

use std::cell::Cell;
use std::rc::Rc;

use web_sys::{Document, Element, HtmlElement};

use super::dom::{elements, listen, query};
use crate::core::SetupError;
use crate::core::nav::{
    CLOSE_ICON_SELECTOR, MENU_ICON_SELECTOR, NavPanel, OPEN_CLASS, SIDEBAR_LINK_SELECTOR,
    SIDEBAR_SELECTOR,
};

/// Panel state plus the elements it is rendered onto
#[derive(Clone)]
struct NavBinding {
    state: Rc<Cell<NavPanel>>,
    sidebar: Element,
    body: HtmlElement,
}

impl NavBinding {
    fn update(&self, f: impl FnOnce(&mut NavPanel)) {
        let mut panel = self.state.get();
        f(&mut panel);
        self.state.set(panel);
        self.render(panel);
    }

    fn render(&self, panel: NavPanel) {
        let classes = self.sidebar.class_list();
        let _ = if panel.is_open() {
            classes.add_1(OPEN_CLASS)
        } else {
            classes.remove_1(OPEN_CLASS)
        };

        let style = self.body.style();
        let _ = match panel.body_overflow() {
            "" => style.remove_property("overflow").map(drop),
            overflow => style.set_property("overflow", overflow),
        };
    }
}

/// Wire the open and close triggers. Returns the number of panel links bound.
pub fn bind(document: &Document) -> Result<usize, SetupError> {
    let menu_icon = query(document, MENU_ICON_SELECTOR)?;
    let close_icon = query(document, CLOSE_ICON_SELECTOR)?;
    let sidebar = query(document, SIDEBAR_SELECTOR)?;
    let body = document.body().ok_or(SetupError::MissingBody)?;

    let links = elements(sidebar.query_selector_all(SIDEBAR_LINK_SELECTOR)?);

    let nav = NavBinding {
        state: Rc::new(Cell::new(NavPanel::new())),
        sidebar,
        body,
    };

    let opener = nav.clone();
    listen(&menu_icon, "click", move |_| opener.update(NavPanel::open))?;

    let closer = nav.clone();
    listen(&close_icon, "click", move |_| closer.update(NavPanel::close))?;

    for link in &links {
        let closer = nav.clone();
        listen(link, "click", move |_| closer.update(NavPanel::close))?;
    }

    Ok(links.len())
}
