use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SiteError {
    #[error("no global window available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("section #{0} is not in the document")]
    MissingSection(&'static str),
    #[error("`{0}` is not a tracked section")]
    UnknownSection(String),
    #[error("browser error: {0}")]
    Js(String),
}

impl From<JsValue> for SiteError {
    fn from(value: JsValue) -> Self {
        match value.as_string() {
            Some(message) => SiteError::Js(message),
            None => SiteError::Js(format!("{:?}", value)),
        }
    }
}

pub fn document() -> Result<web_sys::Document, SiteError> {
    web_sys::window()
        .ok_or(SiteError::NoWindow)?
        .document()
        .ok_or(SiteError::NoDocument)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failure() {
        assert_eq!(
            SiteError::MissingSection("team").to_string(),
            "section #team is not in the document"
        );
        assert_eq!(
            SiteError::Js("listener not registered".to_string()).to_string(),
            "browser error: listener not registered"
        );
    }
}
