//! Quirks engine (spec module 4.B): a pure-query wrapper over a resolved
//! [`ClientProfile`]. Nothing here mutates the profile; every method answers
//! a single question a caller (DIDL rendering, request dispatch, SOAP action
//! handlers) needs answered about "this particular client".

use std::collections::HashMap;

use crate::clients::profile::{ClientProfile, QuirkFlags};

/// Borrowed view over a [`ClientProfile`], grouping the vendor-specific
/// workarounds the rest of the server needs to consult.
#[derive(Debug, Clone, Copy)]
pub struct ClientQuirks<'a> {
    profile: &'a ClientProfile,
}

impl<'a> ClientQuirks<'a> {
    pub fn new(profile: &'a ClientProfile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &'a ClientProfile {
        self.profile
    }

    pub fn has_flag(&self, flag: QuirkFlags) -> bool {
        self.profile.flags.contains(flag)
    }

    /// Whether a `sec:CaptionInfo`/`sec:CaptionInfoEx` resource should be
    /// synthesized alongside a subtitle-carrying item.
    pub fn add_caption_info(&self) -> bool {
        self.has_flag(QuirkFlags::PV_SUBTITLES) && self.profile.caption_info_count > 0
    }

    pub fn get_caption_info_count(&self) -> u32 {
        self.profile.caption_info_count
    }

    /// Converts a millisecond playback position into the unit this client's
    /// `X_SetBookmark` implementation expects.
    pub fn save_samsung_bookmarked_position(&self, position_ms: u64) -> String {
        if self.has_flag(QuirkFlags::SAMSUNG_BOOKMARK_SEC) {
            (position_ms / 1000).to_string()
        } else {
            position_ms.to_string()
        }
    }

    /// Inverse of [`Self::save_samsung_bookmarked_position`]: parses a stored
    /// bookmark value back into milliseconds.
    pub fn restore_samsung_bookmarked_position(&self, stored: &str) -> u64 {
        let value: u64 = stored.trim().parse().unwrap_or(0);
        if self.has_flag(QuirkFlags::SAMSUNG_BOOKMARK_SEC) {
            value * 1000
        } else {
            value
        }
    }

    pub fn get_samsung_feature_list(&self) -> String {
        if !self.has_flag(QuirkFlags::SAMSUNG_FEATURES) {
            return String::new();
        }
        r#"<Features xmlns="urn:schemas-upnp-org:av:avs" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xsi:schemaLocation="urn:schemas-upnp-org:av:avs http://www.upnp.org/schemas/av/avs.xsd"><Feature name="samsung.com_BASICVIEW" version="1"><container id="0" type="object.item.audioItem"/></Feature></Features>"#.to_string()
    }

    pub fn get_samsung_feature_root(&self) -> &'static str {
        "0"
    }

    pub fn supports_resource(&self, purpose: avsstore_purpose::Purpose) -> bool {
        use avsstore_purpose::Purpose;
        match purpose {
            Purpose::Thumbnail => !self.has_flag(QuirkFlags::HIDE_RES_THUMBNAIL),
            Purpose::Subtitle => !self.has_flag(QuirkFlags::HIDE_RES_SUBTITLE),
            Purpose::Transcode => !self.has_flag(QuirkFlags::HIDE_RES_TRANSCODE),
            Purpose::Content => true,
        }
    }

    pub fn block_xml_declaration(&self) -> bool {
        self.has_flag(QuirkFlags::PANASONIC)
    }

    pub fn needs_file_name_uri(&self) -> bool {
        self.has_flag(QuirkFlags::IRADIO)
    }

    pub fn get_string_limit(&self) -> Option<usize> {
        self.profile.string_limit
    }

    pub fn needs_strict_xml(&self) -> bool {
        self.has_flag(QuirkFlags::STRICTXML)
    }

    pub fn needs_ascii_xml(&self) -> bool {
        self.has_flag(QuirkFlags::ASCIIXML)
    }

    pub fn needs_simple_date(&self) -> bool {
        self.has_flag(QuirkFlags::SIMPLE_DATE)
    }

    pub fn needs_no_conversion(&self) -> bool {
        self.has_flag(QuirkFlags::FORCE_NO_CONVERSION)
    }

    pub fn get_multi_value(&self) -> bool {
        self.profile.multi_value
    }

    pub fn get_full_filter(&self) -> bool {
        self.profile.full_filter
    }

    pub fn show_internal_subtitles(&self) -> bool {
        self.has_flag(QuirkFlags::SHOW_INTERNAL_SUBTITLES)
    }

    pub fn get_group(&self) -> &'a str {
        &self.profile.group
    }

    pub fn get_mime_mappings(&self) -> &'a HashMap<String, String> {
        &self.profile.mime_mappings
    }

    pub fn get_dlna_mappings(&self) -> &'a HashMap<String, String> {
        &self.profile.dlna_mappings
    }

    /// Merges this client's configured header overrides into an outgoing
    /// response's header map, overwriting any existing value with the same name.
    pub fn update_headers(&self, headers: &mut HashMap<String, String>) {
        for (name, value) in &self.profile.headers {
            headers.insert(name.clone(), value.clone());
        }
    }

    pub fn is_allowed(&self) -> bool {
        self.profile.is_allowed
    }

    pub fn get_forbidden_directories(&self) -> &'a [String] {
        &self.profile.forbidden_directories
    }
}

/// `avsdidl`'s `Quirks` trait only needs the subset of the above that the
/// DIDL builder actually consults; this impl forwards to it so `avsdidl`
/// never has to depend back on `avsupnp`.
impl<'a> avsdidl::Quirks for ClientQuirks<'a> {
    fn string_limit(&self) -> Option<usize> {
        self.get_string_limit()
    }

    fn needs_strict_xml(&self) -> bool {
        self.needs_strict_xml()
    }

    fn needs_ascii_xml(&self) -> bool {
        self.needs_ascii_xml()
    }

    fn needs_simple_date(&self) -> bool {
        self.needs_simple_date()
    }

    fn multi_value(&self) -> bool {
        self.get_multi_value()
    }

    fn full_filter(&self) -> bool {
        self.get_full_filter()
    }

    fn hide_thumbnail_resources(&self) -> bool {
        self.has_flag(QuirkFlags::HIDE_RES_THUMBNAIL)
    }

    fn hide_subtitle_resources(&self) -> bool {
        self.has_flag(QuirkFlags::HIDE_RES_SUBTITLE) && !self.show_internal_subtitles()
    }

    fn hide_transcode_resources(&self) -> bool {
        self.has_flag(QuirkFlags::HIDE_RES_TRANSCODE)
    }

    fn force_no_conversion(&self) -> bool {
        self.needs_no_conversion()
    }

    fn add_caption_info(&self) -> bool {
        self.add_caption_info()
    }

    fn mime_override<'b>(&'b self, mime: &str) -> Option<&'b str> {
        self.get_mime_mappings().get(mime).map(String::as_str)
    }

    fn dlna_override<'b>(&'b self, key: &str) -> Option<&'b str> {
        self.get_dlna_mappings().get(key).map(String::as_str)
    }

    fn block_xml_declaration(&self) -> bool {
        self.block_xml_declaration()
    }
}

/// Resource visibility purpose, mirrored here to avoid an `avsstore`
/// dependency just for one enum; `avsserver` maps `avsstore::ResourcePurpose`
/// onto this when it calls [`ClientQuirks::supports_resource`].
pub mod avsstore_purpose {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Purpose {
        Content,
        Thumbnail,
        Subtitle,
        Transcode,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bookmark_units_round_trip_in_seconds_mode() {
        let mut profile = ClientProfile::unknown();
        profile.flags = QuirkFlags::SAMSUNG_BOOKMARK_SEC;
        let quirks = ClientQuirks::new(&profile);
        let stored = quirks.save_samsung_bookmarked_position(65_000);
        assert_eq!(stored, "65");
        assert_eq!(quirks.restore_samsung_bookmarked_position(&stored), 65_000);
    }

    #[test]
    fn bookmark_units_default_to_milliseconds() {
        let profile = ClientProfile::unknown();
        let quirks = ClientQuirks::new(&profile);
        let stored = quirks.save_samsung_bookmarked_position(65_000);
        assert_eq!(stored, "65000");
        assert_eq!(quirks.restore_samsung_bookmarked_position(&stored), 65_000);
    }

    #[test]
    fn hidden_resource_flags_gate_supports_resource() {
        let mut profile = ClientProfile::unknown();
        profile.flags = QuirkFlags::HIDE_RES_THUMBNAIL;
        let quirks = ClientQuirks::new(&profile);
        assert!(!quirks.supports_resource(avsstore_purpose::Purpose::Thumbnail));
        assert!(quirks.supports_resource(avsstore_purpose::Purpose::Content));
    }
}
