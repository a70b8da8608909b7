//! Role-keyed navigation menus.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::locale::{localize_path, Locale};
use crate::session::Role;

/// One link in a role's menu. `key` names a translation message.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MenuEntry {
    pub key: String,
    pub href: String,
}

const EMPLOYER_MENU: [(&str, &str); 5] = [
    ("dashboard", "/arbeitsgeber"),
    ("tenders", "/arbeitsgeber/ausschreibungen"),
    ("newTender", "/arbeitsgeber/ausschreibungen/neu"),
    ("bids", "/arbeitsgeber/angebote"),
    ("profile", "/arbeitsgeber/profil"),
];

const CONTRACTOR_MENU: [(&str, &str); 5] = [
    ("dashboard", "/unternehmer"),
    ("findProjects", "/unternehmer/projekte"),
    ("myBids", "/unternehmer/angebote"),
    ("subscription", "/unternehmer/abo"),
    ("profile", "/unternehmer/profil"),
];

/// Ordered menu for a role, hrefs without locale prefix.
#[must_use]
pub fn menu(role: Role) -> Vec<MenuEntry> {
    let table = match role {
        Role::Employer => &EMPLOYER_MENU,
        Role::Contractor => &CONTRACTOR_MENU,
    };
    table
        .iter()
        .map(|(key, href)| MenuEntry {
            key: (*key).to_string(),
            href: (*href).to_string(),
        })
        .collect()
}

/// [`menu`] with every href rewritten into the locale tree.
#[must_use]
pub fn localized_menu(role: Role, locale: Locale) -> Vec<MenuEntry> {
    menu(role)
        .into_iter()
        .map(|entry| MenuEntry {
            href: localize_path(locale, &entry.href),
            key: entry.key,
        })
        .collect()
}
