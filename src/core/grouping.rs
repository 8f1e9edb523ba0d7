use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Account identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(pub String);

/// Minimal user record attached to grouped invoices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub name: Option<String>,
}

/// A user together with the records that belong to them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInvoices<T> {
    pub user: User,
    pub items: Vec<T>,
}

/// Group `(user, record)` rows, as returned by a join query, by user.
///
/// Record order within a group follows the input. When a user appears with
/// different details, the first occurrence wins.
pub fn group_by_user<T, I>(rows: I) -> BTreeMap<UserId, UserInvoices<T>>
where
    I: IntoIterator<Item = (User, T)>,
{
    let mut groups: BTreeMap<UserId, UserInvoices<T>> = BTreeMap::new();
    for (user, item) in rows {
        groups
            .entry(user.id.clone())
            .or_insert_with(|| UserInvoices {
                user,
                items: Vec::new(),
            })
            .items
            .push(item);
    }
    groups
}
