//! DIDL-Lite response builder.
//!
//! Turns catalog entries into the `DIDLLite` wire types and finally into XML,
//! applying whatever a resolved client needs done differently along the way:
//! property filtering, string truncation, resource visibility, escaping mode,
//! and namespace selection. None of this knows about any particular catalog
//! or client-registry crate; callers adapt their own object model into
//! [`ObjectInput`]/[`ResourceInput`] first.

use avsutils::ToXmlElement;
use xmltree::Element;

use crate::{Container, Item, Resource, DIDLLite};

/// Per-client rendering behavior. `avsupnp::clients::ClientQuirks` implements
/// this; an unresolved client renders as [`NoQuirks`].
pub trait Quirks {
    fn string_limit(&self) -> Option<usize> {
        None
    }
    fn needs_strict_xml(&self) -> bool {
        false
    }
    fn needs_ascii_xml(&self) -> bool {
        false
    }
    fn needs_simple_date(&self) -> bool {
        false
    }
    fn multi_value(&self) -> bool {
        true
    }
    fn full_filter(&self) -> bool {
        false
    }
    fn hide_thumbnail_resources(&self) -> bool {
        false
    }
    fn hide_subtitle_resources(&self) -> bool {
        false
    }
    fn hide_transcode_resources(&self) -> bool {
        false
    }
    fn force_no_conversion(&self) -> bool {
        false
    }
    fn add_caption_info(&self) -> bool {
        false
    }
    fn mime_override<'a>(&'a self, _mime: &str) -> Option<&'a str> {
        None
    }
    fn dlna_override<'a>(&'a self, _key: &str) -> Option<&'a str> {
        None
    }
    fn block_xml_declaration(&self) -> bool {
        false
    }
}

/// The quirks of a client nobody could identify: render everything, hide nothing.
pub struct NoQuirks;

impl Quirks for NoQuirks {}

/// Which slot a `<res>` element fills. Mirrors `avsstore::model::ResourcePurpose`
/// without depending on it, the same way `avsupnp::clients` mirrors it for
/// [`Quirks::hide_thumbnail_resources`] and friends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourcePurpose {
    Content,
    Thumbnail,
    Subtitle,
    Transcode,
}

/// Comma-separated UPnP property filter (`Filter` argument of `Browse`/`Search`).
/// `dc:title`, `upnp:class`, `@id`, `@parentID`, and `@restricted` are always
/// emitted regardless of the filter, per the ContentDirectory spec.
pub struct Filter {
    all: bool,
    properties: Vec<String>,
}

const ALWAYS_ALLOWED: &[&str] = &["dc:title", "upnp:class", "@id", "@parentID", "@restricted"];

impl Filter {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == "*" {
            return Filter { all: true, properties: Vec::new() };
        }
        Filter { all: false, properties: trimmed.split(',').map(|s| s.trim().to_string()).collect() }
    }

    pub fn allows(&self, property: &str, quirks: &dyn Quirks) -> bool {
        quirks.full_filter() || self.all || ALWAYS_ALLOWED.contains(&property) || self.properties.iter().any(|p| p == property)
    }
}

/// One catalog entry, already flattened out of whatever object model the
/// caller's storage backend uses.
pub struct ObjectInput<'a> {
    pub id: i64,
    pub parent_id: i64,
    pub restricted: bool,
    pub is_container: bool,
    pub searchable: Option<bool>,
    pub child_count: Option<u32>,
    pub title: &'a str,
    pub class: &'a str,
    pub creator: Option<&'a str>,
    pub date: Option<&'a str>,
    pub track_number: Option<u32>,
    /// Raw `(upnp:artist, "...")`-style multimap; the same key may repeat.
    pub metadata: &'a [(String, String)],
    pub album_art_uri: Option<&'a str>,
    pub resources: Vec<ResourceInput<'a>>,
}

/// One `<res>` element's worth of data, already flattened out of the caller's
/// resource model.
pub struct ResourceInput<'a> {
    pub res_id: u32,
    pub purpose: ResourcePurpose,
    pub mime_type: &'a str,
    pub protocol_info_override: Option<&'a str>,
    pub size: Option<u64>,
    pub duration: Option<&'a str>,
    pub bitrate: Option<u64>,
    pub sample_frequency: Option<u32>,
    pub nr_audio_channels: Option<u32>,
    pub bits_per_sample: Option<u32>,
    pub resolution: Option<&'a str>,
    /// `pr_name`/`ext`/`filename` URL template segments, if this resource needs them.
    pub profile_name: Option<&'a str>,
    pub extension: Option<&'a str>,
    pub file_name: Option<&'a str>,
    /// A pre-built URL (external items, or anything the backend already
    /// resolved) that bypasses the `/content/media/...` template entirely.
    pub url_override: Option<&'a str>,
}

/// Renders catalog entries for one resolved client. Built fresh per request:
/// it borrows the client's quirks and the request's `Filter` value, neither
/// of which outlive the request.
pub struct DidlBuilder<'a> {
    quirks: &'a dyn Quirks,
    filter: Filter,
    base_url: &'a str,
}

impl<'a> DidlBuilder<'a> {
    pub fn new(quirks: &'a dyn Quirks, filter_csv: &str, base_url: &'a str) -> Self {
        Self { quirks, filter: Filter::parse(filter_csv), base_url }
    }

    /// Renders a `Browse`/`Search` result set into a DIDL-Lite document,
    /// selecting namespaces the rendered content actually needs.
    pub fn create_response(&self, objects: &[ObjectInput]) -> DIDLLite {
        let mut didl = DIDLLite::default();
        let wants_sec = self.quirks.add_caption_info();
        didl.xmlns_dlna = Some("urn:schemas-dlna-org:metadata-1-0/".to_string());
        didl.xmlns_sec = wants_sec.then(|| "http://www.sec.co.kr/".to_string());
        for object in objects {
            if object.is_container {
                didl.containers.push(self.render_container(object));
            } else {
                didl.items.push(self.render_item(object));
            }
        }
        didl
    }

    fn render_container(&self, object: &ObjectInput) -> Container {
        Container {
            id: object.id.to_string(),
            parent_id: object.parent_id.to_string(),
            restricted: Some(bool_flag(object.restricted)),
            child_count: self
                .filter
                .allows("childCount", self.quirks)
                .then_some(object.child_count)
                .flatten()
                .map(|c| c.to_string()),
            searchable: self
                .filter
                .allows("searchable", self.quirks)
                .then_some(object.searchable)
                .flatten()
                .map(|s| bool_flag(s)),
            title: self.truncate(object.title),
            class: object.class.to_string(),
            containers: Vec::new(),
            items: Vec::new(),
        }
    }

    fn render_item(&self, object: &ObjectInput) -> Item {
        let find_first = |key: &str| {
            self.filter.allows(key, self.quirks).then(|| object.metadata.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())).flatten()
        };
        let find_all = |key: &str| -> Vec<String> {
            if !self.filter.allows(key, self.quirks) {
                return Vec::new();
            }
            object.metadata.iter().filter(|(k, _)| k == key).map(|(_, v)| self.truncate(v)).collect()
        };

        let artist = if self.quirks.multi_value() {
            join_multi(find_all("upnp:artist"))
        } else {
            find_first("upnp:artist").map(|v| self.truncate(v))
        };
        let genre = if self.quirks.multi_value() {
            join_multi(find_all("upnp:genre"))
        } else {
            find_first("upnp:genre").map(|v| self.truncate(v))
        };

        Item {
            id: object.id.to_string(),
            parent_id: object.parent_id.to_string(),
            restricted: Some(bool_flag(object.restricted)),
            title: self.truncate(object.title),
            creator: object.creator.filter(|_| self.filter.allows("dc:creator", self.quirks)).map(|v| self.truncate(v)),
            class: object.class.to_string(),
            artist,
            album: find_first("upnp:album").map(|v| self.truncate(v)),
            genre,
            album_art: object.album_art_uri.filter(|_| self.filter.allows("upnp:albumArtURI", self.quirks)).map(str::to_string),
            album_art_pk: None,
            date: object.date.filter(|_| self.filter.allows("dc:date", self.quirks)).map(|d| self.render_date(d)),
            original_track_number: object
                .track_number
                .filter(|_| self.filter.allows("upnp:originalTrackNumber", self.quirks))
                .map(|n| n.to_string()),
            resources: self.filter.allows("res", self.quirks).then(|| self.add_resources(object.id, &object.resources, true)).unwrap_or_default(),
            descriptions: Vec::new(),
        }
    }

    fn render_date(&self, date: &str) -> String {
        if self.quirks.needs_simple_date() {
            date.split('T').next().unwrap_or(date).to_string()
        } else {
            date.to_string()
        }
    }

    /// Orders a resource set for rendering and, when `first_resource` is set,
    /// hoists a transcode-generated resource into position zero so clients
    /// that only look at the first `<res>` get the playable stream.
    pub fn add_resources(&self, object_id: i64, resources: &[ResourceInput], first_resource: bool) -> Vec<Resource> {
        let mut visible: Vec<&ResourceInput> = resources.iter().filter(|r| self.resource_is_visible(r)).collect();
        if first_resource {
            if let Some(pos) = visible.iter().position(|r| r.purpose == ResourcePurpose::Transcode) {
                let transcode = visible.remove(pos);
                visible.insert(0, transcode);
            }
        }
        visible.into_iter().map(|r| self.render_resource(object_id, r)).collect()
    }

    fn resource_is_visible(&self, resource: &ResourceInput) -> bool {
        match resource.purpose {
            ResourcePurpose::Thumbnail => !self.quirks.hide_thumbnail_resources(),
            ResourcePurpose::Subtitle => !self.quirks.hide_subtitle_resources(),
            ResourcePurpose::Transcode => !self.quirks.hide_transcode_resources() && !self.quirks.force_no_conversion(),
            ResourcePurpose::Content => true,
        }
    }

    pub fn render_resource(&self, object_id: i64, resource: &ResourceInput) -> Resource {
        Resource {
            protocol_info: self.protocol_info_for(resource),
            bits_per_sample: resource.bits_per_sample.map(|v| v.to_string()),
            sample_frequency: resource.sample_frequency.map(|v| v.to_string()),
            nr_audio_channels: resource.nr_audio_channels.map(|v| v.to_string()),
            duration: resource.duration.map(str::to_string),
            url: self.resource_url(object_id, resource),
        }
    }

    fn protocol_info_for(&self, resource: &ResourceInput) -> String {
        if let Some(raw) = resource.protocol_info_override {
            return raw.to_string();
        }
        let mime = self.quirks.mime_override(resource.mime_type).unwrap_or(resource.mime_type);
        let dlna = self.quirks.dlna_override(mime).map(str::to_string).unwrap_or_else(|| "DLNA.ORG_OP=01".to_string());
        format!("http-get:*:{mime}:{dlna}")
    }

    /// `/content/media/object_id/<id>/res_id/<rid>[/pr_name/<p>][/ext/<e>][/<filename>]`
    fn resource_url(&self, object_id: i64, resource: &ResourceInput) -> String {
        if let Some(url) = resource.url_override {
            return url.to_string();
        }
        let mut url = format!("{}/content/media/object_id/{object_id}/res_id/{}", self.base_url.trim_end_matches('/'), resource.res_id);
        if let Some(profile) = resource.profile_name {
            url.push_str(&format!("/pr_name/{profile}"));
        }
        if let Some(ext) = resource.extension {
            url.push_str(&format!("/ext/{ext}"));
        }
        if let Some(name) = resource.file_name {
            url.push('/');
            url.push_str(name);
        }
        url
    }

    /// GENA `LastChange`-style property set for `SystemUpdateID`/`ContainerUpdateIDs` events.
    pub fn create_event_property_set(&self, system_update_id: u64, container_update_ids: &str) -> String {
        format!(
            "<e:propertyset xmlns:e=\"urn:schemas-upnp-org:event-1-0\"><e:property><SystemUpdateID>{}</SystemUpdateID></e:property><e:property><ContainerUpdateIDs>{}</ContainerUpdateIDs></e:property></e:propertyset>",
            system_update_id,
            xml_escape(container_update_ids),
        )
    }

    /// Serializes a document, then applies this client's escaping mode and
    /// XML-declaration preference.
    pub fn render_xml(&self, didl: &DIDLLite) -> String {
        let xml = write_element(&didl.to_xml_element());
        let xml = apply_escaping_mode(&xml, self.quirks.needs_strict_xml(), self.quirks.needs_ascii_xml());
        if self.quirks.block_xml_declaration() {
            strip_xml_declaration(&xml)
        } else {
            xml
        }
    }

    fn truncate(&self, value: &str) -> String {
        match self.quirks.string_limit() {
            Some(limit) if value.chars().count() > limit => value.chars().take(limit).collect(),
            _ => value.to_string(),
        }
    }
}

fn bool_flag(value: bool) -> String {
    if value { "1" } else { "0" }.to_string()
}

fn join_multi(values: Vec<String>) -> Option<String> {
    if values.is_empty() {
        None
    } else {
        Some(values.join(", "))
    }
}

fn write_element(element: &Element) -> String {
    let mut buf = Vec::new();
    element.write(&mut buf).expect("writing to an in-memory buffer cannot fail");
    String::from_utf8(buf).expect("DIDL-Lite XML is always valid UTF-8")
}

fn strip_xml_declaration(xml: &str) -> String {
    xml.strip_prefix("<?xml version=\"1.0\" encoding=\"UTF-8\"?>").map(str::trim_start).unwrap_or(xml).to_string()
}

fn xml_escape(value: &str) -> String {
    value.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

/// Applied to already-serialized XML text, never to attribute/element
/// construction, so it never double-escapes the `&lt;`/`&amp;` xmltree already
/// produced: STRICTXML additionally escapes the literal apostrophe some old
/// parsers choke on; ASCIIXML numeric-escapes every non-ASCII codepoint.
fn apply_escaping_mode(xml: &str, strict: bool, ascii: bool) -> String {
    if !strict && !ascii {
        return xml.to_string();
    }
    let mut out = String::with_capacity(xml.len());
    for ch in xml.chars() {
        match ch {
            '\'' if strict => out.push_str("&apos;"),
            c if ascii && (c as u32) > 0x7E => {
                out.push_str(&format!("&#x{:04x};", c as u32));
            }
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StrictAsciiQuirks;
    impl Quirks for StrictAsciiQuirks {
        fn needs_strict_xml(&self) -> bool {
            true
        }
        fn needs_ascii_xml(&self) -> bool {
            true
        }
    }

    struct LimitedQuirks(usize);
    impl Quirks for LimitedQuirks {
        fn string_limit(&self) -> Option<usize> {
            Some(self.0)
        }
    }

    fn item(title: &'static str) -> ObjectInput<'static> {
        ObjectInput {
            id: 5,
            parent_id: 1,
            restricted: true,
            is_container: false,
            searchable: None,
            child_count: None,
            title,
            class: "object.item.audioItem.musicTrack",
            creator: None,
            date: None,
            track_number: None,
            metadata: &[],
            album_art_uri: None,
            resources: Vec::new(),
        }
    }

    #[test]
    fn filter_star_allows_everything() {
        let filter = Filter::parse("*");
        assert!(filter.allows("upnp:artist", &NoQuirks));
    }

    #[test]
    fn filter_list_still_allows_always_on_properties() {
        let filter = Filter::parse("upnp:artist");
        assert!(filter.allows("dc:title", &NoQuirks));
        assert!(!filter.allows("upnp:album", &NoQuirks));
    }

    #[test]
    fn full_filter_quirk_overrides_filter() {
        struct FullFilterQuirks;
        impl Quirks for FullFilterQuirks {
            fn full_filter(&self) -> bool {
                true
            }
        }
        let filter = Filter::parse("dc:title");
        assert!(filter.allows("upnp:album", &FullFilterQuirks));
    }

    #[test]
    fn string_limit_truncates_on_char_boundary() {
        let quirks = LimitedQuirks(3);
        let builder = DidlBuilder::new(&quirks, "*", "http://host:8080");
        let rendered = builder.render_item(&item("Caf\u{e9} Music"));
        assert_eq!(rendered.title, "Caf");
    }

    #[test]
    fn ascii_xml_escapes_non_ascii_text() {
        let xml = apply_escaping_mode("<dc:title>Caf\u{e9}</dc:title>", false, true);
        assert!(xml.contains("&#x00e9;"));
    }

    #[test]
    fn strict_xml_escapes_apostrophe() {
        let xml = apply_escaping_mode("<dc:title>Bob's</dc:title>", true, false);
        assert!(xml.contains("&apos;"));
    }

    #[test]
    fn transcode_resource_hoisted_to_first_position() {
        let quirks = NoQuirks;
        let builder = DidlBuilder::new(&quirks, "*", "http://host:8080");
        let resources = vec![
            ResourceInput {
                res_id: 0,
                purpose: ResourcePurpose::Content,
                mime_type: "audio/mpeg",
                protocol_info_override: None,
                size: None,
                duration: None,
                bitrate: None,
                sample_frequency: None,
                nr_audio_channels: None,
                bits_per_sample: None,
                resolution: None,
                profile_name: None,
                extension: None,
                file_name: None,
                url_override: None,
            },
            ResourceInput {
                res_id: 1,
                purpose: ResourcePurpose::Transcode,
                mime_type: "audio/mpeg",
                protocol_info_override: None,
                size: None,
                duration: None,
                bitrate: None,
                sample_frequency: None,
                nr_audio_channels: None,
                bits_per_sample: None,
                resolution: None,
                profile_name: None,
                extension: None,
                file_name: None,
                url_override: None,
            },
        ];
        let rendered = builder.add_resources(5, &resources, true);
        assert_eq!(rendered.len(), 2);
        assert!(rendered[0].url.contains("/res_id/1"));
    }

    #[test]
    fn hidden_purpose_is_excluded() {
        struct HideThumbnails;
        impl Quirks for HideThumbnails {
            fn hide_thumbnail_resources(&self) -> bool {
                true
            }
        }
        let quirks = HideThumbnails;
        let builder = DidlBuilder::new(&quirks, "*", "http://host:8080");
        let resources = vec![ResourceInput {
            res_id: 0,
            purpose: ResourcePurpose::Thumbnail,
            mime_type: "image/jpeg",
            protocol_info_override: None,
            size: None,
            duration: None,
            bitrate: None,
            sample_frequency: None,
            nr_audio_channels: None,
            bits_per_sample: None,
            resolution: None,
            profile_name: None,
            extension: None,
            file_name: None,
            url_override: None,
        }];
        assert!(builder.add_resources(5, &resources, false).is_empty());
    }
}
