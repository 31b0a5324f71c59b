//! In-memory rendering surface.
//!
//! A [`Page`] is a tree of named containers living inside the page's
//! `main` element, plus the filter controls the user interacts with.
//! Every write to a container is a full replacement of its markup.
//! Looking up an element that does not exist is never an error: callers
//! simply return early, the same way a missing DOM target would be
//! ignored.

use crate::filter::ALL;
use crate::render::html::escape;
use std::fmt::Write;
use tracing::trace;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Container {
    id: &'static str,
    parent: Option<&'static str>,
    markup: String,
    hidden: bool,
}

impl Container {
    pub fn set_markup(&mut self, markup: String) {
        self.markup = markup;
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }
}

#[cfg(test)]
impl Container {
    pub fn markup(&self) -> &str {
        &self.markup
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Control {
    /// Drop-down list whose first option is always the sentinel `all`.
    Select { options: Vec<String>, value: String },
    Text { value: String },
    Button { active: bool },
}

#[derive(Clone, Debug)]
pub struct Page {
    name: &'static str,
    containers: Vec<Container>,
    controls: Vec<(&'static str, Control)>,
    failure: Option<String>,
}

impl Page {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            containers: Vec::new(),
            controls: Vec::new(),
            failure: None,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn with_container(mut self, id: &'static str, parent: Option<&'static str>) -> Self {
        self.containers.push(Container {
            id,
            parent,
            markup: String::new(),
            hidden: false,
        });
        self
    }

    #[must_use]
    pub fn with_select(mut self, id: &'static str) -> Self {
        self.controls.push((
            id,
            Control::Select {
                options: vec![String::from(ALL)],
                value: String::from(ALL),
            },
        ));
        self
    }

    #[must_use]
    pub fn with_text_input(mut self, id: &'static str) -> Self {
        self.controls.push((
            id,
            Control::Text {
                value: String::new(),
            },
        ));
        self
    }

    #[must_use]
    pub fn with_button(mut self, id: &'static str, active: bool) -> Self {
        self.controls.push((id, Control::Button { active }));
        self
    }

    pub fn container_mut(&mut self, id: &str) -> Option<&mut Container> {
        let found = self.containers.iter_mut().find(|c| c.id == id);
        if found.is_none() {
            trace!(page = self.name, container = id, "no such container");
        }
        found
    }

    /// Replace the markup of a container, doing nothing if it is absent.
    pub fn replace(&mut self, id: &str, markup: String) {
        if let Some(container) = self.container_mut(id) {
            container.set_markup(markup);
        }
    }

    pub fn set_hidden(&mut self, id: &str, hidden: bool) {
        if let Some(container) = self.container_mut(id) {
            container.set_hidden(hidden);
        }
    }

    pub fn control(&self, id: &str) -> Option<&Control> {
        self.controls
            .iter()
            .find_map(|(cid, c)| (*cid == id).then_some(c))
    }

    fn control_mut(&mut self, id: &str) -> Option<&mut Control> {
        let found = self
            .controls
            .iter_mut()
            .find_map(|(cid, c)| (*cid == id).then_some(c));
        if found.is_none() {
            trace!(page = self.name, control = id, "no such control");
        }
        found
    }

    /// Current value of a select or text control.
    pub fn value(&self, id: &str) -> Option<&str> {
        match self.control(id)? {
            Control::Select { value, .. } | Control::Text { value } => Some(value.as_str()),
            Control::Button { .. } => None,
        }
    }

    pub fn set_value(&mut self, id: &str, new_value: &str) {
        match self.control_mut(id) {
            Some(Control::Select { value, .. } | Control::Text { value }) => {
                *value = String::from(new_value);
            }
            Some(Control::Button { .. }) | None => (),
        }
    }

    /// Replace the option list of a select, keeping the sentinel first.
    pub fn set_options(&mut self, id: &str, values: Vec<String>) {
        if let Some(Control::Select { options, .. }) = self.control_mut(id) {
            *options = std::iter::once(String::from(ALL)).chain(values).collect();
        }
    }

    pub fn set_active(&mut self, id: &str, is_active: bool) {
        if let Some(Control::Button { active }) = self.control_mut(id) {
            *active = is_active;
        }
    }

    /// Replace the whole content of `main` with `markup`. Every container
    /// and control lived inside it, so they are gone afterwards.
    pub fn replace_main(&mut self, markup: String) {
        self.containers.clear();
        self.controls.clear();
        self.failure = Some(markup);
    }

    pub fn has_failed(&self) -> bool {
        self.failure.is_some()
    }

    pub fn to_html(&self) -> String {
        let mut html = String::from("<main>\n");
        if let Some(failure) = &self.failure {
            html.push_str(failure);
            html.push('\n');
        } else {
            for (id, control) in &self.controls {
                write_control(&mut html, id, control);
            }
            self.write_children(&mut html, None);
        }
        html.push_str("</main>\n");
        html
    }

    fn write_children(&self, html: &mut String, parent: Option<&str>) {
        for container in self.containers.iter().filter(|c| c.parent == parent) {
            let hidden = if container.hidden { " hidden" } else { "" };
            let _ = write!(html, "<div id=\"{}\"{hidden}>", container.id);
            html.push_str(&container.markup);
            self.write_children(html, Some(container.id));
            html.push_str("</div>\n");
        }
    }
}

#[cfg(test)]
impl Page {
    pub fn container(&self, id: &str) -> Option<&Container> {
        self.containers.iter().find(|c| c.id == id)
    }

    pub fn options(&self, id: &str) -> Option<&[String]> {
        match self.control(id)? {
            Control::Select { options, .. } => Some(options.as_slice()),
            _ => None,
        }
    }

    pub fn is_active(&self, id: &str) -> bool {
        matches!(self.control(id), Some(Control::Button { active: true }))
    }
}

fn write_control(html: &mut String, id: &str, control: &Control) {
    match control {
        Control::Select { options, value } => {
            let _ = write!(html, "<select id=\"{id}\">");
            for option in options {
                let selected = if option == value { " selected" } else { "" };
                let label = if option == ALL { "全部" } else { option.as_str() };
                let _ = write!(
                    html,
                    "<option value=\"{}\"{selected}>{}</option>",
                    escape(option),
                    escape(label)
                );
            }
            html.push_str("</select>\n");
        }
        Control::Text { value } => {
            let _ = writeln!(
                html,
                "<input id=\"{id}\" type=\"search\" value=\"{}\">",
                escape(value)
            );
        }
        Control::Button { active } => {
            let class = if *active { " class=\"active-filter\"" } else { "" };
            let _ = writeln!(html, "<button id=\"{id}\"{class}></button>");
        }
    }
}
