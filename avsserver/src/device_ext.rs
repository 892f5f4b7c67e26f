//! Extension trait pour initialiser le device MediaServer une fois enregistré.

use avsupnp::devices::DeviceInstance;
use std::sync::Arc;
use tracing::{info, warn};

/// Extension trait pour initialiser les variables UPnP du MediaServer
pub trait MediaServerDeviceExt {
    /// Initialise `SourceProtocolInfo` sur le ConnectionManager.
    ///
    /// Liste les formats que ce MediaServer peut fournir : les conteneurs
    /// audio/vidéo/image usuels en DLNA, plus un flux générique `*` pour les
    /// ressources dont le MIME type n'est pas connu d'avance (fichiers
    /// externes, ressources transcodées à la demande).
    ///
    /// # Example
    ///
    /// ```ignore
    /// use avsserver::MEDIA_SERVER;
    /// use avsserver::device_ext::MediaServerDeviceExt;
    ///
    /// let server_instance = server.write().await.register_device(MEDIA_SERVER.clone()).await?;
    /// server_instance.init_protocol_info();
    /// ```
    fn init_protocol_info(&self);
}

const SOURCE_PROTOCOL_INFO: &[&str] = &[
    "http-get:*:audio/mpeg:*",
    "http-get:*:audio/mp4:*",
    "http-get:*:audio/x-flac:*",
    "http-get:*:audio/flac:*",
    "http-get:*:audio/ogg:*",
    "http-get:*:audio/x-wav:*",
    "http-get:*:audio/wav:*",
    "http-get:*:video/mpeg:*",
    "http-get:*:video/mp4:*",
    "http-get:*:video/x-matroska:*",
    "http-get:*:video/x-msvideo:*",
    "http-get:*:image/jpeg:*",
    "http-get:*:image/png:*",
    "http-get:*:*:*",
];

impl MediaServerDeviceExt for Arc<DeviceInstance> {
    fn init_protocol_info(&self) {
        let source_protocol_info = SOURCE_PROTOCOL_INFO.join(",");

        info!("Initializing MediaServer ProtocolInfo: {}", source_protocol_info);

        let Some(conn_mgr) = self.get_service("ConnectionManager") else {
            warn!("ConnectionManager service not found on MediaServer device");
            return;
        };

        if conn_mgr.get_variable("SourceProtocolInfo").is_none() {
            warn!("SourceProtocolInfo variable not found on ConnectionManager");
            return;
        };

        conn_mgr.event_to_be_sent("SourceProtocolInfo".to_string(), source_protocol_info);

        // SinkProtocolInfo reste vide : un MediaServer ne consomme pas de contenu.
    }
}
