//! Static sections: a header plus either one content string or a list of items.
//! Display only; sections never affect gating.

use crate::document::Section;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionBody {
    Text(String),
    Items(Vec<String>),
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionView {
    pub header: String,
    pub body: SectionBody,
}

impl From<&Section> for SectionView {
    /// `content` wins over `items` when a section defines both.
    fn from(section: &Section) -> Self {
        let body = match (&section.content, &section.items) {
            (Some(text), _) => SectionBody::Text(text.clone()),
            (None, Some(items)) => SectionBody::Items(items.clone()),
            (None, None) => SectionBody::Empty,
        };
        Self {
            header: section.header_text.clone(),
            body,
        }
    }
}
