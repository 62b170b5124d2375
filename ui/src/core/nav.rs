//! Navigation feature links and active-link resolution.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    Dashboard,
    Predict,
    History,
    Bulk,
    Admin,
}

impl Feature {
    /// Path keyword identifying the feature. The dashboard has none: it is only
    /// reached by exact path or as the site root.
    pub fn keyword(self) -> Option<&'static str> {
        match self {
            Self::Dashboard => None,
            Self::Predict => Some("predict"),
            Self::History => Some("history"),
            Self::Bulk => Some("bulk"),
            Self::Admin => Some("admin"),
        }
    }

    const KEYWORDED: [Feature; 4] = [Self::Predict, Self::History, Self::Bulk, Self::Admin];

    /// The feature whose keyword occurs earliest in `path`.
    ///
    /// `/bulk-predict` contains both `bulk` and `predict`; the leading segment
    /// decides, so it resolves to [`Feature::Bulk`].
    pub fn from_path(path: &str) -> Option<Self> {
        Self::KEYWORDED
            .into_iter()
            .filter_map(|feature| {
                let keyword = feature.keyword()?;
                path.find(keyword).map(|pos| (pos, feature))
            })
            .min_by_key(|(pos, _)| *pos)
            .map(|(_, feature)| feature)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub feature: Feature,
    pub label: &'static str,
    pub icon: &'static str,
    pub href: &'static str,
}

pub const FEATURE_LINKS: [NavLink; 5] = [
    NavLink {
        feature: Feature::Dashboard,
        label: "Dashboard",
        icon: "fa-chart-line",
        href: "/dashboard",
    },
    NavLink {
        feature: Feature::Predict,
        label: "Predict",
        icon: "fa-magic",
        href: "/predict",
    },
    NavLink {
        feature: Feature::Bulk,
        label: "Bulk Predict",
        icon: "fa-file-upload",
        href: "/bulk-predict",
    },
    NavLink {
        feature: Feature::History,
        label: "History",
        icon: "fa-history",
        href: "/history",
    },
    NavLink {
        feature: Feature::Admin,
        label: "Admin",
        icon: "fa-user-shield",
        href: "/admin/dashboard",
    },
];

/// Index of the link to mark active for `path`, if any.
///
/// Rules in order: exact href match; the site root selects the dashboard; the
/// feature named by the path's leading keyword.
pub fn active_index(path: &str, links: &[NavLink]) -> Option<usize> {
    if let Some(idx) = links.iter().position(|link| link.href == path) {
        return Some(idx);
    }

    let feature = if path == "/" {
        Feature::Dashboard
    } else {
        Feature::from_path(path)?
    };
    links.iter().position(|link| link.feature == feature)
}
