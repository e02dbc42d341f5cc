//! The authored catalog: categories and entries in display order.
//!
//! Versions are the first stable desktop release that shipped the API unprefixed.

use crate::model::{ApiEntry, Category, DemoId, Links, Support, SupportMap};

use Support::Unsupported as NO;

macro_rules! links {
    ($mdn:literal, $caniuse:literal) => {
        Links {
            docs: concat!("https://developer.mozilla.org/zh-TW/docs/Web/API/", $mdn),
            compat: concat!("https://caniuse.com/", $caniuse),
        }
    };
}

fn v(version: &'static str) -> Support {
    Support::Since(version)
}

fn support(chrome: Support, firefox: Support, safari: Support, edge: Support) -> SupportMap {
    SupportMap::new(chrome, firefox, safari, edge)
}

pub fn categories() -> Vec<Category> {
    vec![
        multimedia(),
        storage(),
        device(),
        graphics(),
        network(),
        interface(),
        performance(),
    ]
}

fn multimedia() -> Category {
    Category {
        id: "multimedia",
        name: "多媒體與串流",
        description: "擷取、播放與處理影音內容的 API。",
        entries: vec![
            ApiEntry::new(
                "mediaDevices",
                "MediaDevices",
                "存取攝影機、麥克風等媒體輸入裝置，並取得即時媒體串流。",
                support(v("53"), v("36"), v("11"), v("12")),
                links!("MediaDevices", "stream"),
            )
            .with_demo(DemoId::MediaDevices),
            ApiEntry::new(
                "webAudio",
                "Web Audio API",
                "以音訊節點圖即時合成、處理與分析聲音。",
                support(v("35"), v("25"), v("14.1"), v("12")),
                links!("Web_Audio_API", "audio-api"),
            )
            .with_demo(DemoId::WebAudio),
            ApiEntry::new(
                "mediaRecorder",
                "MediaRecorder",
                "將媒體串流錄製為可下載的影音檔案。",
                support(v("47"), v("25"), v("14.1"), v("79")),
                links!("MediaRecorder", "mediarecorder"),
            ),
            ApiEntry::new(
                "pictureInPicture",
                "Picture-in-Picture",
                "讓影片以浮動子母畫面的形式持續播放。",
                support(v("70"), NO, v("13.1"), v("79")),
                links!("Picture-in-Picture_API", "picture-in-picture"),
            ),
            ApiEntry::new(
                "speechSynthesis",
                "Web Speech（語音合成）",
                "將文字轉換為語音朗讀，可選擇語言與聲線。",
                support(v("33"), v("49"), v("7"), v("14")),
                links!("SpeechSynthesis", "speech-synthesis"),
            ),
        ],
    }
}

fn storage() -> Category {
    Category {
        id: "storage",
        name: "資料儲存",
        description: "在瀏覽器端保存設定、結構化資料與檔案。",
        entries: vec![
            ApiEntry::new(
                "localStorage",
                "Web Storage",
                "以鍵值對在瀏覽器中持久保存字串資料，重新整理後仍然存在。",
                support(v("4"), v("3.5"), v("4"), v("12")),
                links!("Window/localStorage", "namevalue-storage"),
            )
            .with_demo(DemoId::LocalStorage),
            ApiEntry::new(
                "indexedDB",
                "IndexedDB",
                "交易式的結構化資料庫，可儲存大量物件與二進位檔案。",
                support(v("24"), v("16"), v("10"), v("12")),
                links!("IndexedDB_API", "indexeddb"),
            ),
            ApiEntry::new(
                "cacheStorage",
                "Cache Storage",
                "快取請求與回應，常與 Service Worker 搭配提供離線體驗。",
                support(v("43"), v("41"), v("11.1"), v("16")),
                links!("CacheStorage", "mdn-api_cachestorage"),
            ),
            ApiEntry::new(
                "fileSystemAccess",
                "File System Access",
                "經使用者授權後直接讀寫本機檔案與目錄。",
                support(v("86"), NO, NO, v("86")),
                links!("File_System_API", "native-filesystem-api"),
            ),
        ],
    }
}

fn device() -> Category {
    Category {
        id: "device",
        name: "裝置與感測器",
        description: "與硬體裝置、定位與各類感測器互動。",
        entries: vec![
            ApiEntry::new(
                "geolocation",
                "Geolocation",
                "在使用者同意後取得目前的地理位置。",
                support(v("5"), v("3.5"), v("5"), v("12")),
                links!("Geolocation_API", "geolocation"),
            ),
            ApiEntry::new(
                "vibration",
                "Vibration",
                "讓行動裝置依指定的時間模式震動。",
                support(v("32"), v("16"), NO, v("79")),
                links!("Vibration_API", "vibration"),
            )
            .with_demo(DemoId::Vibration),
            ApiEntry::new(
                "battery",
                "Battery Status",
                "讀取裝置電量與充電狀態。",
                support(v("38"), NO, NO, v("79")),
                links!("Battery_Status_API", "battery-status"),
            ),
            ApiEntry::new(
                "deviceOrientation",
                "Device Orientation",
                "偵測裝置的實體方向與加速度變化。",
                support(v("7"), v("6"), v("4.2"), v("12")),
                links!("Device_orientation_events", "deviceorientation"),
            ),
            ApiEntry::new(
                "webBluetooth",
                "Web Bluetooth",
                "與附近的藍牙低功耗（BLE）裝置連線並交換資料。",
                support(v("56"), NO, NO, v("79")),
                links!("Web_Bluetooth_API", "web-bluetooth"),
            ),
            ApiEntry::new(
                "webUsb",
                "WebUSB",
                "讓網頁在使用者授權後與 USB 裝置通訊。",
                support(v("61"), NO, NO, v("79")),
                links!("WebUSB_API", "webusb"),
            ),
        ],
    }
}

fn graphics() -> Category {
    Category {
        id: "graphics",
        name: "圖形與繪圖",
        description: "2D、3D 與 GPU 加速的繪圖介面。",
        entries: vec![
            ApiEntry::new(
                "canvas",
                "Canvas 2D",
                "以腳本在點陣畫布上繪製線條、形狀與影像。",
                support(v("4"), v("3.6"), v("4"), v("12")),
                links!("Canvas_API", "canvas"),
            )
            .with_demo(DemoId::Canvas),
            ApiEntry::new(
                "webgl",
                "WebGL",
                "以 OpenGL ES 為基礎的硬體加速 3D 繪圖。",
                support(v("9"), v("4"), v("5.1"), v("12")),
                links!("WebGL_API", "webgl"),
            ),
            ApiEntry::new(
                "webgpu",
                "WebGPU",
                "新一代 GPU 繪圖與通用運算介面。",
                support(v("113"), v("141"), v("26"), v("113")),
                links!("WebGPU_API", "webgpu"),
            ),
            ApiEntry::new(
                "offscreenCanvas",
                "OffscreenCanvas",
                "在 Worker 執行緒中離屏算繪畫布，避免阻塞主執行緒。",
                support(v("69"), v("105"), v("16.4"), v("79")),
                links!("OffscreenCanvas", "offscreencanvas"),
            ),
        ],
    }
}

fn network() -> Category {
    Category {
        id: "network",
        name: "網路與通訊",
        description: "發送請求、維持即時連線與點對點通訊。",
        entries: vec![
            ApiEntry::new(
                "fetch",
                "Fetch",
                "以 Promise 為基礎發送 HTTP 請求並處理回應。",
                support(v("42"), v("39"), v("10.1"), v("14")),
                links!("Fetch_API", "fetch"),
            ),
            ApiEntry::new(
                "webSocket",
                "WebSocket",
                "與伺服器建立全雙工的持久連線。",
                support(v("16"), v("11"), v("7"), v("12")),
                links!("WebSocket", "websockets"),
            ),
            ApiEntry::new(
                "webRtc",
                "WebRTC",
                "在瀏覽器之間直接傳輸音訊、視訊與資料。",
                support(v("56"), v("44"), v("11"), v("79")),
                links!("WebRTC_API", "rtcpeerconnection"),
            ),
            ApiEntry::new(
                "serverSentEvents",
                "Server-Sent Events",
                "接收伺服器單向推送的事件串流。",
                support(v("6"), v("6"), v("5"), v("79")),
                links!("Server-sent_events", "eventsource"),
            ),
            ApiEntry::new(
                "onlineStatus",
                "Navigator.onLine",
                "偵測瀏覽器目前是否連上網路，並在狀態改變時收到事件。",
                support(v("4"), v("3.5"), v("5"), v("12")),
                links!("Navigator/onLine", "online-status"),
            )
            .with_demo(DemoId::OnlineStatus),
        ],
    }
}

fn interface() -> Category {
    Category {
        id: "interface",
        name: "介面與互動",
        description: "通知、全螢幕、剪貼簿等與使用者互動的能力。",
        entries: vec![
            ApiEntry::new(
                "notifications",
                "Notifications",
                "在使用者授權後顯示系統層級的通知。",
                support(v("22"), v("22"), v("7"), v("14")),
                links!("Notifications_API", "notifications"),
            )
            .with_demo(DemoId::Notifications),
            ApiEntry::new(
                "fullscreen",
                "Fullscreen",
                "讓任意元素以全螢幕模式顯示。",
                support(v("71"), v("64"), v("16.4"), v("79")),
                links!("Fullscreen_API", "fullscreen"),
            ),
            ApiEntry::new(
                "clipboard",
                "Clipboard",
                "以非同步方式讀寫系統剪貼簿。",
                support(v("66"), v("63"), v("13.1"), v("79")),
                links!("Clipboard_API", "async-clipboard"),
            ),
            ApiEntry::new(
                "pageVisibility",
                "Page Visibility",
                "得知頁面目前是否對使用者可見，以便暫停或恢復工作。",
                support(v("33"), v("18"), v("7"), v("12")),
                links!("Page_Visibility_API", "pagevisibility"),
            )
            .with_demo(DemoId::PageVisibility),
            ApiEntry::new(
                "webShare",
                "Web Share",
                "呼叫作業系統原生的分享面板。",
                support(v("89"), NO, v("12.1"), v("93")),
                links!("Web_Share_API", "web-share"),
            ),
        ],
    }
}

fn performance() -> Category {
    Category {
        id: "performance",
        name: "效能與背景執行",
        description: "背景執行緒、離線快取與效能量測。",
        entries: vec![
            ApiEntry::new(
                "webWorkers",
                "Web Workers",
                "在背景執行緒執行腳本，不阻塞使用者介面。",
                support(v("4"), v("3.5"), v("4"), v("12")),
                links!("Web_Workers_API", "webworkers"),
            ),
            ApiEntry::new(
                "serviceWorker",
                "Service Worker",
                "攔截網路請求，實現離線支援與推播。",
                support(v("40"), v("44"), v("11.1"), v("17")),
                links!("Service_Worker_API", "serviceworkers"),
            ),
            ApiEntry::new(
                "intersectionObserver",
                "Intersection Observer",
                "非同步觀察元素與視窗的交集變化，常用於延遲載入。",
                support(v("51"), v("55"), v("12.1"), v("15")),
                links!("Intersection_Observer_API", "intersectionobserver"),
            ),
            ApiEntry::new(
                "performance",
                "Performance",
                "提供高精度計時與效能量測資料。",
                support(v("6"), v("7"), v("8"), v("12")),
                links!("Performance_API", "high-resolution-time"),
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Demo, Vendor};
    use crate::registry::Registry;

    #[test]
    fn builtin_catalog_is_valid() {
        let reg = Registry::new(categories()).unwrap();
        assert_eq!(reg.len(), 7);
        for cat in reg.all() {
            assert!(!cat.name.trim().is_empty());
            assert!(!cat.entries.is_empty(), "{} has no entries", cat.id);
            for e in &cat.entries {
                assert!(e.links.docs.starts_with("https://developer.mozilla.org/"));
                assert!(e.links.compat.starts_with("https://caniuse.com/"));
                assert!(!e.description.trim().is_empty());
            }
        }
    }

    #[test]
    fn every_demo_is_reachable_from_exactly_one_entry() {
        let reg = Registry::builtin();
        let mut demos: Vec<DemoId> = reg.demo_entries().map(|(_, _, d)| d).collect();
        assert_eq!(demos.len(), DemoId::all().len());
        for d in DemoId::all() {
            assert!(demos.contains(d));
        }
        demos.sort_by_key(|d| d.key());
        demos.dedup();
        assert_eq!(demos.len(), DemoId::all().len());
    }

    #[test]
    fn multimedia_holds_media_devices_and_web_audio() {
        let reg = Registry::builtin();
        let cat = reg.lookup("multimedia").unwrap();
        assert_eq!(cat.name, "多媒體與串流");
        assert!(cat.entry("mediaDevices").is_some());
        assert_eq!(
            cat.entry("webAudio").map(|e| e.demo),
            Some(Demo::Available(DemoId::WebAudio))
        );
    }

    #[test]
    fn vibration_is_unsupported_on_safari() {
        let reg = Registry::builtin();
        let (_, e) = reg.find_entry("vibration").unwrap();
        assert!(!e.support.get(Vendor::Safari).is_supported());
        assert!(e.support.get(Vendor::Chrome).is_supported());
    }
}
