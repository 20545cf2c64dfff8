//! Bottom navigation tabs.

/// The five content tabs, in nav-bar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavTab {
    Home,
    Play,
    Paths,
    Read,
    Profile,
}

impl NavTab {
    /// All tabs in display order.
    pub const ALL: [NavTab; 5] = [
        NavTab::Home,
        NavTab::Play,
        NavTab::Paths,
        NavTab::Read,
        NavTab::Profile,
    ];

    /// Nav-bar label.
    pub fn label(&self) -> &'static str {
        match self {
            NavTab::Home => "Home",
            NavTab::Play => "Play",
            NavTab::Paths => "Paths",
            NavTab::Read => "Read",
            NavTab::Profile => "Profile",
        }
    }

    /// Position in the nav bar (0-based).
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    /// The next tab, wrapping around.
    pub fn next(&self) -> NavTab {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The previous tab, wrapping around.
    pub fn prev(&self) -> NavTab {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}

impl std::str::FromStr for NavTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "home" => Ok(NavTab::Home),
            "play" => Ok(NavTab::Play),
            "paths" => Ok(NavTab::Paths),
            "read" => Ok(NavTab::Read),
            "profile" => Ok(NavTab::Profile),
            _ => Err(format!("Invalid NavTab: {}", s)),
        }
    }
}

impl std::fmt::Display for NavTab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_order_and_index() {
        assert_eq!(NavTab::Home.index(), 0);
        assert_eq!(NavTab::Profile.index(), 4);
    }

    #[test]
    fn test_next_prev_wrap() {
        assert_eq!(NavTab::Home.next(), NavTab::Play);
        assert_eq!(NavTab::Profile.next(), NavTab::Home);
        assert_eq!(NavTab::Home.prev(), NavTab::Profile);
        assert_eq!(NavTab::Play.prev(), NavTab::Home);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("home".parse::<NavTab>().unwrap(), NavTab::Home);
        assert_eq!("PLAY".parse::<NavTab>().unwrap(), NavTab::Play);
        assert!("settings".parse::<NavTab>().is_err());
    }

    #[test]
    fn test_labels() {
        for tab in NavTab::ALL {
            assert!(!tab.label().is_empty());
        }
    }
}
