//! User Agent Classification
//!
//! Classifies a raw user agent string into the three facts the banner cares
//! about: OS family, OS major version and browser. The classifier is plain
//! string matching over well-known tokens and never touches the live window,
//! so platform resolution stays a pure function of its inputs.

/// Mobile OS families the banner can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsFamily {
    Ios,
    Android,
    /// Windows Phone and the older Windows Mobile branding.
    WindowsPhone,
    /// Desktop browsers and anything unrecognized.
    Other,
}

/// Browsers with banner-relevant behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserKind {
    /// Safari proper on iOS, as opposed to WebKit shells like CriOS.
    MobileSafari,
    Chrome,
    Firefox,
    Other,
}

/// Classified user agent facts, captured once per page load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentInfo {
    pub os_family: OsFamily,
    /// Major OS version, when the user agent carries one.
    pub os_major: Option<u32>,
    pub browser: BrowserKind,
}

/// Classify a user agent string into OS family, OS major version and browser.
pub fn classify(user_agent: &str) -> AgentInfo {
    let os_family = detect_os_family(user_agent);
    AgentInfo {
        os_family,
        os_major: detect_os_major(user_agent, os_family),
        browser: detect_browser(user_agent, os_family),
    }
}

fn detect_os_family(user_agent: &str) -> OsFamily {
    // Windows Phone first: its Edge-era user agents also carry an "Android"
    // compatibility token.
    if user_agent.contains("Windows Phone") || user_agent.contains("Windows Mobile") {
        OsFamily::WindowsPhone
    } else if user_agent.contains("iPhone")
        || user_agent.contains("iPad")
        || user_agent.contains("iPod")
    {
        OsFamily::Ios
    } else if user_agent.contains("Android") {
        OsFamily::Android
    } else {
        OsFamily::Other
    }
}

fn detect_os_major(user_agent: &str, family: OsFamily) -> Option<u32> {
    let marker = match family {
        // "CPU iPhone OS 17_5 like Mac OS X" / "CPU OS 9_3_2 like Mac OS X"
        OsFamily::Ios => " OS ",
        // "Linux; Android 14; Pixel 8"
        OsFamily::Android => "Android ",
        // "Windows Phone 8.1" / "Windows Phone OS 7.5"
        OsFamily::WindowsPhone => "Windows Phone ",
        OsFamily::Other => return None,
    };
    let index = user_agent.find(marker)? + marker.len();
    let rest = user_agent[index..].trim_start_matches("OS ");
    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().ok()
}

fn detect_browser(user_agent: &str, family: OsFamily) -> BrowserKind {
    if family == OsFamily::Ios {
        // Every iOS browser runs WebKit; vendor tokens identify the shell.
        // In-app web views carry "Mobile" but no "Safari" token.
        if user_agent.contains("CriOS") {
            BrowserKind::Chrome
        } else if user_agent.contains("FxiOS") {
            BrowserKind::Firefox
        } else if user_agent.contains("Safari") && user_agent.contains("Mobile") {
            BrowserKind::MobileSafari
        } else {
            BrowserKind::Other
        }
    } else if user_agent.contains("Chrome")
        && !user_agent.contains("Edg")
        && !user_agent.contains("OPR")
    {
        BrowserKind::Chrome
    } else if user_agent.contains("Firefox") {
        BrowserKind::Firefox
    } else {
        BrowserKind::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IPHONE_SAFARI_17: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_5 like Mac OS X) \
         AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.5 Mobile/15E148 Safari/604.1";
    const IPHONE_SAFARI_5: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 5_1 like Mac OS X) \
         AppleWebKit/534.46 (KHTML, like Gecko) Version/5.1 Mobile/9B179 Safari/7534.48.3";
    const IPAD_SAFARI_9: &str = "Mozilla/5.0 (iPad; CPU OS 9_3_2 like Mac OS X) \
         AppleWebKit/601.1.46 (KHTML, like Gecko) Version/9.0 Mobile/13F69 Safari/601.1";
    const IPHONE_CHROME: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_4 like Mac OS X) \
         AppleWebKit/605.1.15 (KHTML, like Gecko) CriOS/124.0.6367.88 Mobile/15E148 Safari/604.1";
    const ANDROID_CHROME: &str = "Mozilla/5.0 (Linux; Android 14; Pixel 8) \
         AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Mobile Safari/537.36";
    const WINDOWS_PHONE: &str = "Mozilla/5.0 (compatible; MSIE 10.0; Windows Phone 8.0; \
         Trident/6.0; IEMobile/10.0; ARM; Touch; NOKIA; Lumia 920)";
    const DESKTOP_CHROME: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
         AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

    #[test]
    fn classifies_mobile_safari_on_ios() {
        let agent = classify(IPHONE_SAFARI_17);
        assert_eq!(agent.os_family, OsFamily::Ios);
        assert_eq!(agent.os_major, Some(17));
        assert_eq!(agent.browser, BrowserKind::MobileSafari);
    }

    #[test]
    fn classifies_old_ios_versions() {
        let agent = classify(IPHONE_SAFARI_5);
        assert_eq!(agent.os_family, OsFamily::Ios);
        assert_eq!(agent.os_major, Some(5));
        assert_eq!(agent.browser, BrowserKind::MobileSafari);
    }

    #[test]
    fn classifies_ipad_os_version_without_iphone_token() {
        let agent = classify(IPAD_SAFARI_9);
        assert_eq!(agent.os_family, OsFamily::Ios);
        assert_eq!(agent.os_major, Some(9));
    }

    #[test]
    fn chrome_on_ios_is_not_mobile_safari() {
        let agent = classify(IPHONE_CHROME);
        assert_eq!(agent.os_family, OsFamily::Ios);
        assert_eq!(agent.browser, BrowserKind::Chrome);
    }

    #[test]
    fn classifies_android_chrome() {
        let agent = classify(ANDROID_CHROME);
        assert_eq!(agent.os_family, OsFamily::Android);
        assert_eq!(agent.os_major, Some(14));
        // Android Chrome user agents also carry "Mobile Safari".
        assert_eq!(agent.browser, BrowserKind::Chrome);
    }

    #[test]
    fn classifies_windows_phone() {
        let agent = classify(WINDOWS_PHONE);
        assert_eq!(agent.os_family, OsFamily::WindowsPhone);
        assert_eq!(agent.os_major, Some(8));
    }

    #[test]
    fn desktop_browsers_are_unsupported() {
        let agent = classify(DESKTOP_CHROME);
        assert_eq!(agent.os_family, OsFamily::Other);
        assert_eq!(agent.os_major, None);
    }

    #[test]
    fn empty_user_agent_classifies_as_other() {
        let agent = classify("");
        assert_eq!(agent.os_family, OsFamily::Other);
        assert_eq!(agent.browser, BrowserKind::Other);
    }
}
