//! User-facing text. The dashboard is shown in Hindi.

pub const PLACEHOLDER: &str = "— जिला चुनें —";

pub const GET_DATA: &str = "डेटा दिखाओ";
pub const GET_DATA_BUSY: &str = "डेटा लाया जा रहा है…";
pub const LOCATE: &str = "📍 लोकेशन से चुनें";
pub const LOCATE_BUSY: &str = "लोकेशन ले रहे हैं…";

pub const HOUSEHOLDS_WORKED: &str = "काम पाने वाले परिवार";
pub const PERSONDAYS: &str = "व्यक्ति-दिवस";
pub const EXPENDITURE: &str = "कुल भुगतान";
pub const FEMALE_SHARE: &str = "महिला भागीदारी";
pub const STATE: &str = "राज्य";
pub const DISTRICT: &str = "जिला";
pub const TREND_TITLE: &str = "पिछले 12 महीने";
pub const RECENT_TITLE: &str = "हाल के 8 महीने";

pub const DISTRICTS_UNAVAILABLE: &str = "सर्वर से जिले नहीं मिले — स्थानीय सूची दिखाई जा रही है।";
pub const DATA_UNAVAILABLE: &str = "सर्वर से डेटा नहीं मिला — नमूना डेटा दिखाया जाएगा।";
pub const CHOOSE_DISTRICT: &str = "कृपया जिला चुनें।";
pub const GEOLOCATION_UNSUPPORTED: &str = "यह ब्राउज़र लोकेशन सपोर्ट नहीं करता।";
pub const DISTRICT_ADDED_FROM_LOCATION: &str = "लोकेशन से जिला जोड़ा गया (मैन्युअल सत्यापन जरुरी)।";
pub const DISTRICT_NOT_FOUND: &str = "लोकेशन से जिला नहीं मिला। कृपया मैन्युअली चुनें।";
pub const LOCATION_FAILED: &str = "लोकेशन लेने में समस्या आई।";

/// Message for a refused or failed position request.
pub fn location_denied(browser_message: &str) -> String {
    let reason = if browser_message.is_empty() {
        "permission denied"
    } else {
        browser_message
    };
    format!("Location अनुमति नहीं मिली: {}", reason)
}
