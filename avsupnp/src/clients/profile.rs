//! Client profile shape: what `ClientRegistry` resolves a connecting UPnP
//! control point down to, and what `ClientQuirks` reads from.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

bitflags::bitflags! {
    /// Per-client behavior flags. Named after the concrete DLNA/vendor
    /// quirks they gate, not after the mechanism used to work around them.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
    pub struct QuirkFlags: u32 {
        const SAMSUNG                 = 1 << 0;
        const SAMSUNG_BOOKMARK_SEC    = 1 << 1;
        const SAMSUNG_BOOKMARK_MSEC   = 1 << 2;
        const IRADIO                  = 1 << 3;
        const SAMSUNG_FEATURES        = 1 << 4;
        const SAMSUNG_HIDE_DYNAMIC    = 1 << 5;
        const PV_SUBTITLES            = 1 << 6;
        const PANASONIC               = 1 << 7;
        const STRICTXML               = 1 << 8;
        const HIDE_RES_THUMBNAIL      = 1 << 9;
        const HIDE_RES_SUBTITLE       = 1 << 10;
        const HIDE_RES_TRANSCODE      = 1 << 11;
        const SIMPLE_DATE             = 1 << 12;
        const ASCIIXML                = 1 << 13;
        const FORCE_NO_CONVERSION     = 1 << 14;
        const SHOW_INTERNAL_SUBTITLES = 1 << 15;
        const TRANSCODING1            = 1 << 16;
        const TRANSCODING2            = 1 << 17;
        const TRANSCODING3            = 1 << 18;
    }
}

/// How `ClientProfile::match_value` is interpreted by [`super::registry::ClientRegistry::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    /// Profile is never matched directly; used only as the `Unknown` fallback.
    #[default]
    None,
    /// `match_value` is an IP literal or a `a.b.c.d/bits` CIDR block.
    Ip,
    /// `match_value` is matched as a case-sensitive substring of the request's `User-Agent`.
    UserAgent,
}

/// One entry of the `clients:` configuration list (spec module 4.A/4.B).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientProfile {
    pub name: String,
    pub group: String,
    #[serde(rename = "type")]
    pub client_type: String,
    pub flags: QuirkFlags,
    pub match_type: MatchType,
    pub match_value: String,
    pub mime_mappings: HashMap<String, String>,
    pub dlna_mappings: HashMap<String, String>,
    pub headers: HashMap<String, String>,
    pub caption_info_count: u32,
    pub string_limit: Option<usize>,
    pub multi_value: bool,
    pub full_filter: bool,
    pub is_allowed: bool,
    pub forbidden_directories: Vec<String>,
}

impl Default for ClientProfile {
    fn default() -> Self {
        Self {
            name: "Unknown".to_string(),
            group: "default".to_string(),
            client_type: String::new(),
            flags: QuirkFlags::empty(),
            match_type: MatchType::None,
            match_value: String::new(),
            mime_mappings: HashMap::new(),
            dlna_mappings: HashMap::new(),
            headers: HashMap::new(),
            caption_info_count: 1,
            string_limit: None,
            multi_value: false,
            full_filter: false,
            is_allowed: true,
            forbidden_directories: Vec::new(),
        }
    }
}

impl ClientProfile {
    /// The built-in profile returned when nothing else matches.
    pub fn unknown() -> Self {
        ClientProfile::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_round_trip_through_yaml() {
        let yaml = "name: Samsung TV\nflags: 3\nmatch_type: ip\nmatch_value: 192.168.1.0/24\n";
        let profile: ClientProfile = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(profile.name, "Samsung TV");
        assert!(profile.flags.contains(QuirkFlags::SAMSUNG));
        assert!(profile.flags.contains(QuirkFlags::SAMSUNG_BOOKMARK_SEC));
    }

    #[test]
    fn unknown_profile_allows_everything() {
        let profile = ClientProfile::unknown();
        assert!(profile.is_allowed);
        assert_eq!(profile.flags, QuirkFlags::empty());
    }
}
