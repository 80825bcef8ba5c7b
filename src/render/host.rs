use std::collections::BTreeMap;

use serde::Serialize;

/// The display surface the dashboard binds to: named text fields, the library
/// selector and the header region where banners land.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct HostDocument {
    fields: BTreeMap<String, String>,
    library_selector: Vec<String>,
    header_banners: Vec<String>,
}

impl HostDocument {
    pub fn set_text(&mut self, id: &str, value: impl Into<String>) {
        self.fields.insert(id.to_string(), value.into());
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        self.fields.get(id).map(String::as_str)
    }

    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }

    pub fn append_library_option(&mut self, library: &str) {
        self.library_selector.push(library.to_string());
    }

    pub fn library_selector(&self) -> &[String] {
        &self.library_selector
    }

    pub fn append_banner(&mut self, message: &str) {
        self.header_banners.push(message.to_string());
    }

    pub fn banners(&self) -> &[String] {
        &self.header_banners
    }
}
