//! Content-directory data model.
//!
//! These types describe catalog entries independently of how any particular
//! storage backend persists them, and independently of the DIDL-Lite wire
//! representation that `avsdidl` renders them into.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

bitflags::bitflags! {
    /// Per-object behavior flags (`CdsObject.flags`).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
    pub struct ObjectFlags: u32 {
        const RESTRICTED          = 1 << 0;
        const SEARCHABLE          = 1 << 1;
        const PERSISTENT_CONTAINER = 1 << 2;
        const PLAYLIST_REF        = 1 << 3;
        const PROXY_URL           = 1 << 4;
        const ONLINE_SERVICE      = 1 << 5;
        const OGG_THEORA          = 1 << 6;
        const USE_RESOURCE_REF    = 1 << 7;
    }
}

/// Fields shared by every catalog entry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CdsObjectBase {
    pub id: i64,
    pub parent_id: i64,
    pub ref_id: Option<i64>,
    pub upnp_class: String,
    pub title: String,
    /// Filesystem path or URL; absent for pure virtual containers.
    pub location: Option<String>,
    pub mtime: i64,
    pub flags: ObjectFlags,
    /// Multimap: the same key may legitimately repeat (e.g. multiple `upnp:artist`).
    pub metadata: Vec<(String, String)>,
    pub aux_data: HashMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CdsContainer {
    pub base: CdsObjectBase,
    /// Monotonic per-container revision, bumped on every child add/remove/update.
    pub update_id: u64,
    pub child_count: u32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CdsItem {
    pub base: CdsObjectBase,
    pub resources: Vec<CdsResource>,
    pub mime_type: String,
    pub track_number: Option<u32>,
    pub part_number: Option<u32>,
    pub service_id: Option<String>,
}

/// An item whose `location` is an absolute URL rather than a filesystem path.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CdsItemExternalUrl {
    pub item: CdsItem,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum CdsObject {
    Container(CdsContainer),
    Item(CdsItem),
    ExternalUrlItem(CdsItemExternalUrl),
}

impl CdsObject {
    pub fn base(&self) -> &CdsObjectBase {
        match self {
            CdsObject::Container(c) => &c.base,
            CdsObject::Item(i) => &i.base,
            CdsObject::ExternalUrlItem(e) => &e.item.base,
        }
    }

    pub fn is_container(&self) -> bool {
        matches!(self, CdsObject::Container(_))
    }

    pub fn id(&self) -> i64 {
        self.base().id
    }
}

/// Names which handler generated a `<res>` element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandlerType {
    Default,
    Libexif,
    Id3,
    Transcode,
    ExtUrl,
    Mp4,
    Ffth,
    Flac,
    Fanart,
    Containerart,
    Matroska,
    Subtitle,
    Wavpack,
    Metafile,
    Resource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourcePurpose {
    Content,
    Thumbnail,
    Subtitle,
    Transcode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceAttribute {
    Size,
    Duration,
    Bitrate,
    SampleFrequency,
    NrAudioChannels,
    Resolution,
    ColorDepth,
    ProtocolInfo,
    ResourceFile,
    Type,
    FanArtObjId,
    FanArtResId,
    BitsPerSample,
    Language,
    AudioCodec,
    VideoCodec,
    Format,
    Orientation,
    PixelFormat,
}

/// One `<res>` element's worth of data.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CdsResource {
    pub handler_type: Option<HandlerType>,
    pub purpose: Option<ResourcePurpose>,
    /// Dense per-owning-object index; unique and `0..resources.len()` within one object.
    pub res_id: u32,
    pub attributes: HashMap<ResourceAttributeKey, String>,
    /// Appear in generated URLs, URL-encoded.
    pub parameters: HashMap<String, String>,
    /// Internal only; never rendered.
    pub options: HashMap<String, String>,
}

/// Newtype so `ResourceAttribute` can key a `HashMap` without pulling in an
/// enum-map crate for nineteen variants.
pub type ResourceAttributeKey = ResourceAttribute;

impl CdsResource {
    pub fn attr(&self, key: ResourceAttribute) -> Option<&str> {
        self.attributes.get(&key).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_ids_are_dense_after_construction() {
        let item = CdsItem {
            resources: vec![
                CdsResource { res_id: 0, ..Default::default() },
                CdsResource { res_id: 1, ..Default::default() },
            ],
            ..Default::default()
        };
        let ids: Vec<_> = item.resources.iter().map(|r| r.res_id).collect();
        assert_eq!(ids, vec![0, 1]);
    }

    #[test]
    fn object_flags_compose() {
        let f = ObjectFlags::RESTRICTED | ObjectFlags::SEARCHABLE;
        assert!(f.contains(ObjectFlags::RESTRICTED));
        assert!(!f.contains(ObjectFlags::PROXY_URL));
    }
}
