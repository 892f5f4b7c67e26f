//! Bridges the ContentDirectory action handlers to the storage backend.
//!
//! Parses `ObjectID`/`ContainerID` strings, compiles `SearchCriteria` and
//! `SortCriteria` through `avsstore::search`, asks the registered
//! [`avsstore::Storage`] for objects, and renders the result as DIDL-Lite XML
//! through `avsdidl::DidlBuilder`.

use std::sync::{Arc, OnceLock};

use avsdidl::{DidlBuilder, NoQuirks, ObjectInput, ResourceInput, ResourcePurpose};
use avsstore::model::{CdsItem, CdsObject, CdsResource};
use avsstore::search::emitter::ColumnMapperSet;
use avsstore::{search, Storage};

const METADATA_TABLE_ALIAS: &str = "alias";

static STORAGE: OnceLock<Arc<dyn Storage>> = OnceLock::new();

/// Wires a concrete backend in at startup. Must be called exactly once,
/// before the ContentDirectory service receives its first request.
pub fn register_storage(storage: Arc<dyn Storage>) {
    if STORAGE.set(storage).is_err() {
        tracing::warn!("content directory storage registered more than once; ignoring");
    }
}

fn storage() -> Result<&'static Arc<dyn Storage>, String> {
    STORAGE.get().ok_or_else(|| "content directory storage has not been registered".to_string())
}

pub struct ContentHandler;

impl ContentHandler {
    pub fn new() -> Self {
        ContentHandler
    }

    pub async fn browse(
        &self,
        object_id: &str,
        browse_flag: &str,
        filter: &str,
        starting_index: u32,
        requested_count: u32,
        sort_criteria: &str,
    ) -> Result<(String, u32, u32, u64), String> {
        let store = storage()?;
        let id: i64 = object_id.parse().map_err(|_| format!("invalid ObjectID '{object_id}'"))?;
        let mappers = ColumnMapperSet::with_alias(METADATA_TABLE_ALIAS);
        let sort_sql = search::compile_sort(sort_criteria, &mappers);

        match browse_flag {
            "BrowseMetadata" => {
                let object = store.get_object(id).await.map_err(|e| e.to_string())?;
                let xml = render_xml(&[object], filter);
                Ok((xml, 1, 1, store.container_update_id(id).await.map_err(|e| e.to_string())?))
            }
            "BrowseDirectChildren" => {
                let page = store
                    .browse_children(id, starting_index, requested_count, &sort_sql)
                    .await
                    .map_err(|e| e.to_string())?;
                let xml = render_xml(&page.objects, filter);
                Ok((xml, page.number_returned, page.total_matches, page.update_id))
            }
            other => Err(format!("unsupported BrowseFlag '{other}'")),
        }
    }

    pub async fn search(
        &self,
        container_id: &str,
        search_criteria: &str,
        filter: &str,
        starting_index: u32,
        requested_count: u32,
        sort_criteria: &str,
    ) -> Result<(String, u32, u32, u64), String> {
        let store = storage()?;
        let id: i64 = container_id.parse().map_err(|_| format!("invalid ContainerID '{container_id}'"))?;
        let mappers = ColumnMapperSet::with_alias(METADATA_TABLE_ALIAS);
        let now_unix = now_unix();
        let predicate_sql =
            search::compile_search(search_criteria, &mappers, now_unix).map_err(|e| e.to_string())?;
        let sort_sql = search::compile_sort(sort_criteria, &mappers);

        let page = store
            .search(id, &predicate_sql, starting_index, requested_count, &sort_sql)
            .await
            .map_err(|e| e.to_string())?;
        let xml = render_xml(&page.objects, filter);
        Ok((xml, page.number_returned, page.total_matches, page.update_id))
    }

    pub async fn get_search_capabilities(&self) -> String {
        "dc:title,upnp:artist,upnp:album,upnp:class,upnp:genre,@id,@refID".to_string()
    }

    pub async fn get_sort_capabilities(&self) -> String {
        "dc:title,upnp:artist,upnp:album,upnp:originalTrackNumber,dc:date".to_string()
    }

    pub async fn get_system_update_id(&self) -> u64 {
        match storage() {
            Ok(store) => store.system_update_id().await.unwrap_or(0),
            Err(_) => 0,
        }
    }
}

impl Default for ContentHandler {
    fn default() -> Self {
        Self::new()
    }
}

fn now_unix() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

fn base_url() -> String {
    avsweb::get_server_base_url().unwrap_or_default()
}

// TODO: thread the requesting client's source IP/User-Agent through the SOAP
// action handlers so this resolves a real `avsupnp::clients::ClientQuirks`
// instead of always rendering for `NoQuirks`.
fn render_xml(objects: &[CdsObject], filter: &str) -> String {
    let base_url = base_url();
    let quirks = NoQuirks;
    let builder = DidlBuilder::new(&quirks, filter, &base_url);
    let inputs: Vec<ObjectInput> = objects.iter().map(to_object_input).collect();
    let didl = builder.create_response(&inputs);
    builder.render_xml(&didl)
}

fn to_object_input(object: &CdsObject) -> ObjectInput {
    use avsstore::ObjectFlags;

    match object {
        CdsObject::Container(container) => {
            let base = &container.base;
            ObjectInput {
                id: base.id,
                parent_id: base.parent_id,
                restricted: base.flags.contains(ObjectFlags::RESTRICTED),
                is_container: true,
                searchable: Some(base.flags.contains(ObjectFlags::SEARCHABLE)),
                child_count: Some(container.child_count),
                title: &base.title,
                class: &base.upnp_class,
                creator: None,
                date: None,
                track_number: None,
                metadata: &base.metadata,
                album_art_uri: None,
                resources: Vec::new(),
            }
        }
        CdsObject::Item(item) => item_input(item),
        CdsObject::ExternalUrlItem(external) => item_input(&external.item),
    }
}

fn item_input(item: &CdsItem) -> ObjectInput {
    use avsstore::ObjectFlags;

    let base = &item.base;
    let find = |key: &str| base.metadata.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str());

    ObjectInput {
        id: base.id,
        parent_id: base.parent_id,
        restricted: base.flags.contains(ObjectFlags::RESTRICTED),
        is_container: false,
        searchable: None,
        child_count: None,
        title: &base.title,
        class: &base.upnp_class,
        creator: find("dc:creator"),
        date: find("dc:date"),
        track_number: item.track_number,
        metadata: &base.metadata,
        album_art_uri: find("upnp:albumArtURI"),
        resources: item.resources.iter().map(|r| to_resource_input(&item.mime_type, r)).collect(),
    }
}

fn to_resource_input<'a>(item_mime_type: &'a str, resource: &'a CdsResource) -> ResourceInput<'a> {
    use avsstore::model::{ResourceAttribute, ResourcePurpose as StorePurpose};

    let purpose = match resource.purpose {
        Some(StorePurpose::Thumbnail) => ResourcePurpose::Thumbnail,
        Some(StorePurpose::Subtitle) => ResourcePurpose::Subtitle,
        Some(StorePurpose::Transcode) => ResourcePurpose::Transcode,
        Some(StorePurpose::Content) | None => ResourcePurpose::Content,
    };

    ResourceInput {
        res_id: resource.res_id,
        purpose,
        mime_type: resource.attr(ResourceAttribute::Type).unwrap_or(item_mime_type),
        protocol_info_override: resource.attr(ResourceAttribute::ProtocolInfo),
        size: resource.attr(ResourceAttribute::Size).and_then(|v| v.parse().ok()),
        duration: resource.attr(ResourceAttribute::Duration),
        bitrate: resource.attr(ResourceAttribute::Bitrate).and_then(|v| v.parse().ok()),
        sample_frequency: resource.attr(ResourceAttribute::SampleFrequency).and_then(|v| v.parse().ok()),
        nr_audio_channels: resource.attr(ResourceAttribute::NrAudioChannels).and_then(|v| v.parse().ok()),
        bits_per_sample: resource.attr(ResourceAttribute::BitsPerSample).and_then(|v| v.parse().ok()),
        resolution: resource.attr(ResourceAttribute::Resolution),
        profile_name: resource.parameters.get("pr_name").map(String::as_str),
        extension: resource.parameters.get("ext").map(String::as_str),
        file_name: resource.parameters.get("filename").map(String::as_str),
        url_override: resource.attr(ResourceAttribute::ResourceFile),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use avsstore::error::StorageError;
    use avsstore::model::{CdsContainer, CdsObjectBase};
    use avsstore::storage::BrowsePage;
    use async_trait::async_trait;

    struct EmptyStorage;

    #[async_trait]
    impl Storage for EmptyStorage {
        async fn get_object(&self, id: i64) -> Result<CdsObject, StorageError> {
            Err(StorageError::ObjectNotFound(id))
        }

        async fn browse_children(
            &self,
            _container_id: i64,
            _starting_index: u32,
            _requested_count: u32,
            _sort_sql: &str,
        ) -> Result<BrowsePage, StorageError> {
            Ok(BrowsePage::default())
        }

        async fn search(
            &self,
            container_id: i64,
            _predicate_sql: &str,
            starting_index: u32,
            requested_count: u32,
            sort_sql: &str,
        ) -> Result<BrowsePage, StorageError> {
            self.browse_children(container_id, starting_index, requested_count, sort_sql).await
        }

        async fn put_object(&self, _parent_id: i64, object: CdsObject) -> Result<i64, StorageError> {
            Ok(object.id())
        }

        async fn remove_object(&self, _id: i64) -> Result<(), StorageError> {
            Ok(())
        }

        async fn system_update_id(&self) -> Result<u64, StorageError> {
            Ok(0)
        }

        async fn container_update_id(&self, _container_id: i64) -> Result<u64, StorageError> {
            Ok(0)
        }
    }

    #[tokio::test]
    async fn s1_browse_root_on_empty_library() {
        register_storage(Arc::new(EmptyStorage));
        let handler = ContentHandler::new();
        let (xml, returned, total, _update_id) =
            handler.browse("0", "BrowseDirectChildren", "*", 0, 0, "").await.unwrap();
        assert_eq!(returned, 0);
        assert_eq!(total, 0);
        assert!(xml.contains("DIDL-Lite"));
    }

    #[test]
    fn container_hides_filtered_fields() {
        let container = CdsContainer {
            base: CdsObjectBase { id: 1, parent_id: 0, title: "Root".into(), upnp_class: "object.container".into(), ..Default::default() },
            update_id: 0,
            child_count: 3,
        };
        let object = CdsObject::Container(container);
        let xml = render_xml(&[object], "dc:title");
        assert!(!xml.contains("childCount"));
    }

    #[test]
    fn resource_urls_follow_the_content_template() {
        let mut item = CdsItem {
            base: CdsObjectBase { id: 42, parent_id: 1, title: "Track".into(), upnp_class: "object.item.audioItem.musicTrack".into(), ..Default::default() },
            mime_type: "audio/mpeg".into(),
            ..Default::default()
        };
        item.resources.push(CdsResource { res_id: 0, ..Default::default() });
        let xml = render_xml(&[CdsObject::Item(item)], "*");
        assert!(xml.contains("/content/media/object_id/42/res_id/0"));
    }
}
