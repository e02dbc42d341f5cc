use crate::model::{ApiEntry, Demo, DemoId, Support, Vendor};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeState {
    Supported,
    Unsupported,
}

impl BadgeState {
    pub fn css_class(self) -> &'static str {
        match self {
            BadgeState::Supported => "support-yes",
            BadgeState::Unsupported => "support-no",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupportBadge {
    pub vendor: Vendor,
    pub text: &'static str,
    pub state: BadgeState,
}

impl SupportBadge {
    pub fn new(vendor: Vendor, support: Support) -> Self {
        let state = if support.is_supported() {
            BadgeState::Supported
        } else {
            BadgeState::Unsupported
        };
        Self {
            vendor,
            text: support.label(),
            state,
        }
    }

    pub fn title(&self) -> String {
        match self.state {
            BadgeState::Supported => format!("{} {}+", self.vendor.display_name(), self.text),
            BadgeState::Unsupported => format!("{} {}", self.vendor.display_name(), self.text),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefLink {
    pub label: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoControl {
    Available(DemoId),
    Absent,
}

impl DemoControl {
    pub const LABEL: &'static str = "開啟示範";
}

/// Everything one entry card shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryCard {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Always four, in [`Vendor::all`] order.
    pub badges: Vec<SupportBadge>,
    pub links: [RefLink; 2],
    pub demo: DemoControl,
}

impl EntryCard {
    pub fn from_entry(entry: &ApiEntry) -> Self {
        Self {
            id: entry.id,
            name: entry.name,
            description: entry.description,
            badges: entry
                .support
                .iter()
                .map(|(vendor, support)| SupportBadge::new(vendor, support))
                .collect(),
            links: [
                RefLink {
                    label: "MDN 文件",
                    url: entry.links.docs,
                },
                RefLink {
                    label: "Can I use",
                    url: entry.links.compat,
                },
            ],
            demo: match entry.demo {
                Demo::Available(id) => DemoControl::Available(id),
                Demo::Absent => DemoControl::Absent,
            },
        }
    }

    pub fn badge(&self, vendor: Vendor) -> Option<&SupportBadge> {
        self.badges.iter().find(|b| b.vendor == vendor)
    }
}
