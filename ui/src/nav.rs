/// A primary navigation destination.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub path: &'static str,
    pub label: &'static str,
    /// Only the identical path counts as active, not its sub-paths.
    pub exact: bool,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { path: "/", label: "Home", exact: true },
    NavLink { path: "/services", label: "Services", exact: false },
    NavLink { path: "/gallery", label: "Gallery", exact: false },
    NavLink { path: "/booking", label: "Booking", exact: false },
    NavLink { path: "/policy", label: "Policy", exact: false },
    NavLink { path: "/contact", label: "Contact", exact: false },
];

fn trim_slash(path: &str) -> &str {
    match path.trim_end_matches('/') {
        "" => "/",
        p => p,
    }
}

impl NavLink {
    pub fn is_active(&self, pathname: &str) -> bool {
        let current = trim_slash(pathname);
        let own = trim_slash(self.path);
        if current == own {
            return true;
        }
        if self.exact {
            return false;
        }
        own == "/"
            || current
                .strip_prefix(own)
                .is_some_and(|rest| rest.starts_with('/'))
    }

    /// Class list for a link rendered in the given style block.
    pub fn class(&self, base: &str, pathname: &str) -> String {
        if self.is_active(pathname) {
            format!("{base} is-active")
        } else {
            base.to_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(path: &str) -> NavLink {
        *NAV_LINKS.iter().find(|l| l.path == path).unwrap()
    }

    #[test]
    fn home_is_exact() {
        let home = link("/");
        assert!(home.is_active("/"));
        assert!(home.is_active(""));
        assert!(!home.is_active("/services"));
    }

    #[test]
    fn section_matches_sub_paths() {
        let services = link("/services");
        assert!(services.is_active("/services"));
        assert!(services.is_active("/services/"));
        assert!(services.is_active("/services/pedicure"));
        assert!(!services.is_active("/servicesx"));
        assert!(!services.is_active("/"));
    }

    #[test]
    fn class_marks_active_link() {
        let gallery = link("/gallery");
        assert_eq!(gallery.class("menu-link", "/gallery"), "menu-link is-active");
        assert_eq!(gallery.class("menu-link", "/policy"), "menu-link");
    }

    #[test]
    fn paths_are_unique() {
        for (i, a) in NAV_LINKS.iter().enumerate() {
            assert!(NAV_LINKS[i + 1..].iter().all(|b| b.path != a.path));
        }
    }
}
