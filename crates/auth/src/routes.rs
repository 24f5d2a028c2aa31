//! Static route-access table.
//!
//! Maps normalized route paths to the roles permitted to enter them.
//! Matching is exact path first, then the first registered entry that is a
//! strict ancestor of the path, in table order.
//!
//! Paths with no entry at all are *permissive* for any authenticated user.
//! That is deliberate product behavior inherited from the shipped policy
//! (a fail-closed default would silently lock out every route added without
//! a table entry), but it is the one place this layer is not fail-closed.

use crate::Role;

const ALL_ROLES: &[Role] = &Role::ALL;
const MANAGEMENT: &[Role] = &[Role::Owner, Role::Admin];
const FLOOR_STAFF: &[Role] = &[Role::Owner, Role::Admin, Role::Waiter, Role::Receptionist];

/// Registered routes and the roles allowed to enter them.
///
/// Ancestor scanning takes the first matching entry in table order, so the
/// `/tables/canvas` tightening applies to that exact path only; deeper
/// paths inherit the `/tables` entry.
const ROUTE_ROLES: &[(&str, &[Role])] = &[
    ("/", ALL_ROLES),
    ("/products", ALL_ROLES),
    ("/catalog", ALL_ROLES),
    ("/tables", FLOOR_STAFF),
    ("/tables/canvas", MANAGEMENT),
    ("/orders", ALL_ROLES),
    ("/inventory", MANAGEMENT),
    ("/settings", MANAGEMENT),
    ("/users", MANAGEMENT),
];

/// Normalize a route path: strip the query string, strip one trailing slash,
/// and fall back to the root path when nothing remains.
pub fn normalize_path(path: &str) -> &str {
    let path = match path.find('?') {
        Some(idx) => &path[..idx],
        None => path,
    };
    let path = path.strip_suffix('/').unwrap_or(path);
    if path.is_empty() { "/" } else { path }
}

/// Find the role set governing `path`, or `None` when no entry matches.
///
/// Exact match wins; otherwise the first registered entry that is a strict
/// ancestor of the normalized path (entry followed by `/`) applies.
pub fn find(path: &str) -> Option<&'static [Role]> {
    let path = normalize_path(path);

    if let Some((_, roles)) = ROUTE_ROLES.iter().find(|(entry, _)| *entry == path) {
        return Some(*roles);
    }

    ROUTE_ROLES
        .iter()
        .find(|(entry, _)| is_strict_ancestor(entry, path))
        .map(|(_, roles)| *roles)
}

/// The roles allowed on `path`, falling back to the full role universe for
/// unregistered paths.
pub fn allowed_roles_for(path: &str) -> &'static [Role] {
    find(path).unwrap_or(ALL_ROLES)
}

fn is_strict_ancestor(entry: &str, path: &str) -> bool {
    path.strip_prefix(entry)
        .is_some_and(|rest| rest.starts_with('/'))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn normalization_strips_query_and_trailing_slash() {
        assert_eq!(normalize_path("/settings?tab=billing"), "/settings");
        assert_eq!(normalize_path("/settings/"), "/settings");
        assert_eq!(normalize_path("/settings/?tab=billing"), "/settings");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("?redirect=1"), "/");
    }

    #[test]
    fn exact_match_wins() {
        assert_eq!(find("/tables/canvas"), Some(MANAGEMENT));
        assert_eq!(find("/tables"), Some(FLOOR_STAFF));
        assert_eq!(find("/users?page=2"), Some(MANAGEMENT));
    }

    #[test]
    fn ancestor_match_applies_to_child_paths() {
        assert_eq!(find("/inventory/items"), Some(MANAGEMENT));
        assert_eq!(find("/inventory/purchase-orders/42"), Some(MANAGEMENT));
        // The root entry is not an ancestor of other paths; "/" + "/" never
        // prefixes them.
        assert_eq!(find("/unregistered"), None);
    }

    #[test]
    fn table_order_decides_between_overlapping_ancestors() {
        // "/tables" precedes "/tables/canvas", so deep canvas paths inherit
        // the broader floor-staff entry. Exact "/tables/canvas" stays
        // management-only.
        assert_eq!(find("/tables/canvas/edit"), Some(FLOOR_STAFF));
    }

    #[test]
    fn unregistered_paths_fall_back_to_the_role_universe() {
        assert_eq!(allowed_roles_for("/reports"), ALL_ROLES);
        assert_eq!(allowed_roles_for("/settings"), MANAGEMENT);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 512,
            ..ProptestConfig::default()
        })]

        /// Property: normalization is idempotent.
        #[test]
        fn normalize_is_idempotent(path in "[/a-z0-9?=&-]{0,40}") {
            let once = normalize_path(&path);
            prop_assert_eq!(normalize_path(once), once);
        }

        /// Property: matching never panics and is stable for any input.
        #[test]
        fn find_is_total_and_deterministic(path in "\\PC{0,60}") {
            let first = find(&path);
            prop_assert_eq!(find(&path), first);
        }
    }
}
