//! Catalog records: API entries, their categories, and per-vendor support.
//!
//! Everything in here is plain immutable data. Records are authored once in
//! [`crate::catalog`] and handed to [`crate::registry::Registry`]; nothing mutates
//! them afterwards.

#[cfg(feature = "serde")]
use serde::{Serialize, Serializer};

/// Text shown in place of a version when a vendor does not ship an API.
pub const UNSUPPORTED_LABEL: &str = "不支援";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Vendor {
    Chrome,
    Firefox,
    Safari,
    Edge,
}

impl Vendor {
    pub fn key(self) -> &'static str {
        match self {
            Vendor::Chrome => "chrome",
            Vendor::Firefox => "firefox",
            Vendor::Safari => "safari",
            Vendor::Edge => "edge",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Vendor::Chrome => "Chrome",
            Vendor::Firefox => "Firefox",
            Vendor::Safari => "Safari",
            Vendor::Edge => "Edge",
        }
    }

    /// Card display order.
    pub fn all() -> &'static [Vendor] {
        &[Vendor::Chrome, Vendor::Firefox, Vendor::Safari, Vendor::Edge]
    }
}

/// One cell of the support table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Support {
    /// First shipping version, kept as authored ("49", "14.1", "79").
    Since(&'static str),
    Unsupported,
}

impl Support {
    pub fn is_supported(self) -> bool {
        matches!(self, Support::Since(_))
    }

    pub fn version(self) -> Option<&'static str> {
        match self {
            Support::Since(v) => Some(v),
            Support::Unsupported => None,
        }
    }

    pub fn label(self) -> &'static str {
        self.version().unwrap_or(UNSUPPORTED_LABEL)
    }
}

// `false` mirrors how compat tables mark a missing implementation.
#[cfg(feature = "serde")]
impl Serialize for Support {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Support::Since(v) => serializer.serialize_str(v),
            Support::Unsupported => serializer.serialize_bool(false),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SupportMap {
    pub chrome: Support,
    pub firefox: Support,
    pub safari: Support,
    pub edge: Support,
}

impl SupportMap {
    pub const fn new(chrome: Support, firefox: Support, safari: Support, edge: Support) -> Self {
        Self {
            chrome,
            firefox,
            safari,
            edge,
        }
    }

    pub fn get(&self, vendor: Vendor) -> Support {
        match vendor {
            Vendor::Chrome => self.chrome,
            Vendor::Firefox => self.firefox,
            Vendor::Safari => self.safari,
            Vendor::Edge => self.edge,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Vendor, Support)> + '_ {
        Vendor::all().iter().map(move |&v| (v, self.get(v)))
    }

    pub fn unsupported_vendors(&self) -> impl Iterator<Item = Vendor> + '_ {
        self.iter()
            .filter(|(_, s)| !s.is_supported())
            .map(|(v, _)| v)
    }
}

/// Demo widgets that exist in the web frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum DemoId {
    MediaDevices,
    WebAudio,
    LocalStorage,
    Vibration,
    Canvas,
    OnlineStatus,
    Notifications,
    PageVisibility,
}

impl DemoId {
    pub fn key(self) -> &'static str {
        match self {
            DemoId::MediaDevices => "media-devices",
            DemoId::WebAudio => "web-audio",
            DemoId::LocalStorage => "local-storage",
            DemoId::Vibration => "vibration",
            DemoId::Canvas => "canvas",
            DemoId::OnlineStatus => "online-status",
            DemoId::Notifications => "notifications",
            DemoId::PageVisibility => "page-visibility",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            DemoId::MediaDevices => "攝影機預覽",
            DemoId::WebAudio => "音訊合成器",
            DemoId::LocalStorage => "本機儲存筆記",
            DemoId::Vibration => "震動模式",
            DemoId::Canvas => "畫布繪圖",
            DemoId::OnlineStatus => "網路連線狀態",
            DemoId::Notifications => "系統通知",
            DemoId::PageVisibility => "頁面可見性",
        }
    }

    pub fn from_key(key: &str) -> Option<DemoId> {
        DemoId::all().iter().copied().find(|d| d.key() == key)
    }

    pub fn all() -> &'static [DemoId] {
        &[
            DemoId::MediaDevices,
            DemoId::WebAudio,
            DemoId::LocalStorage,
            DemoId::Vibration,
            DemoId::Canvas,
            DemoId::OnlineStatus,
            DemoId::Notifications,
            DemoId::PageVisibility,
        ]
    }
}

/// Whether an entry can open a demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Demo {
    Available(DemoId),
    #[default]
    Absent,
}

impl Demo {
    pub fn id(self) -> Option<DemoId> {
        match self {
            Demo::Available(id) => Some(id),
            Demo::Absent => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Links {
    /// MDN reference page.
    pub docs: &'static str,
    /// caniuse compatibility table.
    pub compat: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ApiEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub support: SupportMap,
    pub links: Links,
    pub demo: Demo,
}

impl ApiEntry {
    pub fn new(
        id: &'static str,
        name: &'static str,
        description: &'static str,
        support: SupportMap,
        links: Links,
    ) -> Self {
        Self {
            id,
            name,
            description,
            support,
            links,
            demo: Demo::Absent,
        }
    }

    pub fn with_demo(mut self, demo: DemoId) -> Self {
        self.demo = Demo::Available(demo);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Display order.
    pub entries: Vec<ApiEntry>,
}

impl Category {
    pub fn entry(&self, id: &str) -> Option<&ApiEntry> {
        self.entries.iter().find(|e| e.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn support_map_iterates_in_vendor_order() {
        let map = SupportMap::new(
            Support::Since("1"),
            Support::Since("2"),
            Support::Unsupported,
            Support::Since("4"),
        );
        let vendors: Vec<Vendor> = map.iter().map(|(v, _)| v).collect();
        assert_eq!(vendors, Vendor::all());
        assert_eq!(map.get(Vendor::Edge), Support::Since("4"));
        assert_eq!(map.unsupported_vendors().collect::<Vec<_>>(), vec![Vendor::Safari]);
    }

    #[test]
    fn unsupported_cells_use_sentinel_label() {
        assert_eq!(Support::Unsupported.label(), UNSUPPORTED_LABEL);
        assert_eq!(Support::Since("14.1").label(), "14.1");
        assert!(!Support::Unsupported.is_supported());
    }

    #[test]
    fn demo_keys_round_trip_and_are_unique() {
        let mut keys: Vec<&str> = DemoId::all().iter().map(|d| d.key()).collect();
        for d in DemoId::all() {
            assert_eq!(DemoId::from_key(d.key()), Some(*d));
            assert!(!d.title().trim().is_empty());
        }
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), DemoId::all().len());
        assert_eq!(DemoId::from_key("nope"), None);
    }

    #[test]
    fn entries_default_to_no_demo() {
        let links = Links {
            docs: "https://example.test/docs",
            compat: "https://example.test/compat",
        };
        let support = SupportMap::new(
            Support::Since("1"),
            Support::Since("1"),
            Support::Since("1"),
            Support::Since("1"),
        );
        let plain = ApiEntry::new("x", "X", "x", support, links);
        assert_eq!(plain.demo, Demo::Absent);
        assert_eq!(plain.demo.id(), None);

        let with = plain.with_demo(DemoId::Canvas);
        assert_eq!(with.demo.id(), Some(DemoId::Canvas));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn support_serializes_sentinel_as_false() {
        let json = serde_json::to_string(&[Support::Since("49"), Support::Unsupported]).unwrap();
        assert_eq!(json, r#"["49",false]"#);
    }
}
