use crate::config::ThemeConfig;
use crate::templates::PageInfo;
use serde::Serialize;
use userlist_core::{Navigation, PageLink, PageLinkKind, UserRecord};

#[derive(Serialize)]
pub struct UsersTemplate<'a> {
    pub theme: &'a ThemeConfig,
    pub users: &'a [UserRecord],
    pub page_info: PageInfo,
    pub links: Vec<PageLinkDisplay>,
}

#[derive(Serialize)]
pub struct LoadErrorTemplate<'a> {
    pub theme: &'a ThemeConfig,
    pub status_code: u16,
}

/// A pagination link with its target already turned into a URL.
#[derive(Serialize)]
pub struct PageLinkDisplay {
    pub kind: PageLinkKind,
    pub label: String,
    pub href: Option<String>,
    pub active: bool,
    pub disabled: bool,
}

impl From<PageLink> for PageLinkDisplay {
    fn from(value: PageLink) -> Self {
        Self {
            kind: value.kind,
            label: value.label,
            href: value.target.map(navigation_path),
            active: value.active,
            disabled: value.disabled,
        }
    }
}

pub fn navigation_path(navigation: Navigation) -> String {
    match navigation {
        Navigation::First => "/page/first".to_string(),
        Navigation::Last => "/page/last".to_string(),
        Navigation::Page(page) => format!("/page/{page}"),
    }
}
